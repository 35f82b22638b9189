//! Compose panel with history recall

use chrono::Local;
use eframe::egui;

use crate::dialogs::NoticeDialog;
use crate::state::SendOutcome;
use crate::validation;

use super::ParlorApp;

impl ParlorApp {
    /// Render the compose panel at the bottom of the window.
    pub(in crate::app) fn render_input_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("input_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.input.message_input)
                        .desired_width(ui.available_width() - 60.0)
                        .hint_text("Type a message..."),
                );

                let send_clicked = ui.button("Send").clicked();
                let enter_pressed = response.lost_focus()
                    && ui.input(|i| i.key_pressed(egui::Key::Enter));

                // Input history navigation
                if response.has_focus() && ui.input(|i| i.key_pressed(egui::Key::ArrowUp)) {
                    self.input.history_up();
                }
                if response.has_focus() && ui.input(|i| i.key_pressed(egui::Key::ArrowDown)) {
                    self.input.history_down();
                }

                // Esc clears the compose box
                if response.has_focus() && ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    self.input.reset();
                }

                if send_clicked || enter_pressed {
                    if self.send_current_message() {
                        response.request_focus();
                    }
                }
            });
        });
    }

    /// Run the send operation for the current compose text.
    ///
    /// Returns true when a message was sent (so the caller can restore
    /// focus to the compose box).
    fn send_current_message(&mut self) -> bool {
        let text = validation::sanitize_message(&self.input.message_input);
        let timestamp = Local::now().format("%H:%M").to_string();

        match self.state.send_message(&text, &timestamp) {
            SendOutcome::Sent {
                conversation,
                timestamp,
            } => {
                self.schedule_reply(conversation, timestamp);
                self.input.push_history(text);
                self.input.reset();
                true
            }
            SendOutcome::NoUserSelected => {
                self.notice = Some(NoticeDialog::new("Select a user first!"));
                false
            }
            // Whitespace-only input: silently ignored, input kept as-is
            SendOutcome::EmptyInput => false,
        }
    }
}
