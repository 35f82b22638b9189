//! Main update loop, toolbar and global shortcuts

use eframe::egui;
use std::time::Duration;

use crate::ui;

use super::ParlorApp;

impl eframe::App for ParlorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Process backend events
        self.process_events();

        // Global keyboard shortcuts
        let (toggle_sidebar, refresh) = ctx.input(|i| {
            (
                i.modifiers.ctrl && i.key_pressed(egui::Key::B),
                i.modifiers.ctrl && i.key_pressed(egui::Key::R),
            )
        });
        if toggle_sidebar {
            self.show_sidebar = !self.show_sidebar;
        }
        if refresh {
            self.refresh_roster();
        }

        // Request repaint to keep checking for events
        ctx.request_repaint_after(Duration::from_millis(100));
        // Purge old status toasts after 4 seconds
        self.state.purge_old_status_messages(4);

        self.render_toolbar(ctx);

        // Left panel: user roster
        if self.show_sidebar {
            if let Some(name) = ui::sidebar::render_sidebar(ctx, &mut self.state) {
                self.select_user(&name);
            }
        }

        // Bottom panel: compose input
        self.render_input_panel(ctx);

        // Optional system log strip above the input
        if self.show_log {
            self.render_log_panel(ctx);
        }

        // Central panel: conversation or empty state
        ui::messages::render_message_area(ctx, self.state.conversation.as_ref());

        // Blocking notice (send attempted with no user selected)
        let dismissed = self
            .notice
            .as_ref()
            .is_some_and(|notice| notice.render(ctx));
        if dismissed {
            self.notice = None;
        }

        ui::toasts::render_toasts(ctx, &self.state.status_messages);
    }
}

impl ParlorApp {
    fn render_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Server:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.settings.server)
                        .desired_width(220.0),
                );
                if ui.button("Refresh").clicked() {
                    self.persist_settings();
                    self.refresh_roster();
                }

                ui.separator();
                ui.label("Name:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.settings.display_name)
                        .desired_width(100.0),
                );

                ui.separator();
                ui.label("Theme:");
                if ui
                    .selectable_label(self.settings.theme == "dark", "Dark")
                    .clicked()
                {
                    self.set_theme(ctx, "dark");
                }
                if ui
                    .selectable_label(self.settings.theme == "light", "Light")
                    .clicked()
                {
                    self.set_theme(ctx, "light");
                }

                ui.separator();
                if ui
                    .selectable_label(self.show_log, "Log")
                    .on_hover_text("Show the system log")
                    .clicked()
                {
                    self.show_log = !self.show_log;
                }
            });
        });
    }

    fn render_log_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("log_panel")
            .resizable(true)
            .default_height(120.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for line in &self.state.system_log {
                            ui.label(line);
                        }
                    });
            });
    }
}
