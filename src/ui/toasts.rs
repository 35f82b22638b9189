//! Auto-expiring status toasts, stacked in the bottom-right corner.

use std::time::Instant;

use eframe::egui::{self, Color32};

pub fn render_toasts(ctx: &egui::Context, status_messages: &[(String, Instant)]) {
    if status_messages.is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("status_toasts"))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-12.0, -48.0))
        .show(ctx, |ui| {
            for (text, _) in status_messages {
                egui::Frame::new()
                    .fill(Color32::from_black_alpha(180))
                    .corner_radius(6.0)
                    .inner_margin(egui::Margin::symmetric(10, 6))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(text).color(Color32::WHITE));
                    });
                ui.add_space(4.0);
            }
        });
}
