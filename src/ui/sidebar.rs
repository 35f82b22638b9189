//! Roster sidebar: one entry per user, with a search filter.

use eframe::egui::{self, Color32};

use crate::state::{ChatState, RosterStatus};
use crate::ui::theme;

/// Render the left sidebar.
///
/// Entries appear in roster (response) order. Returns the username the
/// operator clicked, if any.
pub fn render_sidebar(ctx: &egui::Context, state: &mut ChatState) -> Option<String> {
    let mut clicked: Option<String> = None;

    egui::SidePanel::left("sidebar")
        .resizable(true)
        .default_width(200.0)
        .min_width(140.0)
        .show(ctx, |ui| {
            ui.add_space(6.0);
            ui.heading("Users");
            ui.add_space(4.0);

            ui.add(
                egui::TextEdit::singleline(&mut state.roster_filter)
                    .desired_width(f32::INFINITY)
                    .hint_text("Search users..."),
            );
            ui.add_space(4.0);
            ui.separator();

            match &state.roster_status {
                RosterStatus::Loading if state.roster.is_empty() => {
                    ui.label(egui::RichText::new("Loading users...").color(Color32::LIGHT_GRAY));
                }
                RosterStatus::Failed(err) => {
                    ui.label(
                        egui::RichText::new(format!("Could not load users: {}", err))
                            .color(Color32::LIGHT_RED),
                    );
                    ui.separator();
                }
                _ => {}
            }

            if matches!(state.roster_status, RosterStatus::Loaded) && state.roster.is_empty() {
                ui.label(egui::RichText::new("No users yet.").color(Color32::LIGHT_GRAY));
            }

            let selected_partner = state
                .conversation
                .as_ref()
                .map(|c| c.partner.clone());

            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    for user in state.filtered_roster() {
                        let selected =
                            selected_partner.as_deref() == Some(user.username.as_str());
                        if render_user_entry(ui, &user.username, selected) {
                            clicked = Some(user.username.clone());
                        }
                    }
                });
        });

    clicked
}

/// Render a single roster entry. Returns true when clicked.
fn render_user_entry(ui: &mut egui::Ui, username: &str, selected: bool) -> bool {
    let mut clicked = false;

    ui.horizontal(|ui| {
        theme::render_avatar(ui, username, 24.0);
        let rich = if selected {
            egui::RichText::new(username).strong()
        } else {
            egui::RichText::new(username)
        };
        if ui.selectable_label(selected, rich).clicked() {
            clicked = true;
        }
    });

    clicked
}
