//! Central message area: conversation header, message list, empty state.

use eframe::egui::{self, Color32};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::conversation::{Conversation, Direction};

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(https?://|www\.)[\w\-\./~%&=:+?#]+$").unwrap());

const SENT_COLOR: Color32 = Color32::from_rgb(80, 200, 120);
const TIME_COLOR: Color32 = Color32::LIGHT_GRAY;

/// Render the central panel for the current conversation, or the empty
/// state when no user is selected.
pub fn render_message_area(ctx: &egui::Context, conversation: Option<&Conversation>) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let Some(conversation) = conversation else {
            render_empty_state(ui);
            return;
        };

        ui.horizontal(|ui| {
            ui.heading(conversation.header());
            ui.separator();
            ui.label(
                egui::RichText::new(format!("{} messages", conversation.messages.len()))
                    .color(TIME_COLOR),
            );
        });
        ui.separator();

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for msg in &conversation.messages {
                    match msg.direction {
                        Direction::Sent => {
                            // Align own messages to the right
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::TOP),
                                |ui| {
                                    ui.label(
                                        egui::RichText::new(&msg.timestamp).color(TIME_COLOR),
                                    );
                                    ui.label(
                                        egui::RichText::new(&msg.text).color(SENT_COLOR),
                                    );
                                },
                            );
                        }
                        Direction::Received => {
                            ui.horizontal(|ui| {
                                ui.label(
                                    egui::RichText::new(&msg.timestamp).color(TIME_COLOR),
                                );
                                ui.label(
                                    egui::RichText::new(format!("<{}>", conversation.partner))
                                        .color(Color32::LIGHT_BLUE)
                                        .strong(),
                                );
                                render_message_text(ui, &msg.text);
                            });
                        }
                    }
                }
            });
    });
}

fn render_empty_state(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.35);
        ui.heading("Parlor");
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new("Pick a user from the sidebar to start chatting.")
                .color(Color32::LIGHT_GRAY),
        );
    });
}

/// Tokenize message text and render URLs as hyperlinks.
fn render_message_text(ui: &mut egui::Ui, text: &str) {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    for (i, &tok) in tokens.iter().enumerate() {
        if i > 0 {
            ui.label(" ");
        }
        if URL_RE.is_match(tok) {
            ui.hyperlink_to(tok, tok);
        } else {
            ui.label(tok);
        }
    }
}
