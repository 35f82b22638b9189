//! Modal dialogs.
//!
//! Uses the Option<Dialog> pattern: None = closed, Some = open.

use eframe::egui;

/// A blocking notice with a single dismiss button.
///
/// Shown when the operator tries to send without selecting a user.
#[derive(Debug, Clone)]
pub struct NoticeDialog {
    pub message: String,
}

impl NoticeDialog {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Render the notice. Returns true when dismissed.
    pub fn render(&self, ctx: &egui::Context) -> bool {
        let mut dismissed = false;

        egui::Window::new("Notice")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.add_space(4.0);
                ui.label(&self.message);
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        dismissed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_holds_message() {
        let notice = NoticeDialog::new("Select a user first!");
        assert_eq!(notice.message, "Select a user first!");
    }
}
