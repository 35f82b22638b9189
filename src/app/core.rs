//! Core ParlorApp struct definition and initialization

use std::thread;
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, Sender};
use eframe::egui;

use crate::backend::run_backend;
use crate::config::{load_settings, save_settings, Settings};
use crate::dialogs::NoticeDialog;
use crate::input_state::InputState;
use crate::protocol::{BackendAction, GuiEvent};
use crate::state::ChatState;
use crate::ui::theme;
use crate::validation;

pub struct ParlorApp {
    // Core state (roster, conversation, logs)
    pub state: ChatState,

    // Persisted settings, edited from the toolbar
    pub settings: Settings,

    // Channels for backend communication
    pub action_tx: Sender<BackendAction>,
    pub event_rx: Receiver<GuiEvent>,

    // Compose input state
    pub input: InputState,

    // Blocking notice, if any
    pub notice: Option<NoticeDialog>,

    // UI visibility toggles
    pub show_sidebar: bool,
    pub show_log: bool,
}

impl ParlorApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Create channels for UI <-> Backend
        let (action_tx, action_rx) = unbounded::<BackendAction>();
        let (event_tx, event_rx) = unbounded::<GuiEvent>();

        // Spawn the backend thread
        thread::spawn(move || {
            run_backend(action_rx, event_tx);
        });

        let settings = load_settings().unwrap_or_default();
        theme::apply_theme(&cc.egui_ctx, &settings.theme);

        let mut input = InputState::new();
        input.history = settings.history.clone();

        let mut app = Self {
            state: ChatState::new(),
            settings,

            action_tx,
            event_rx,

            input,

            notice: None,

            show_sidebar: true,
            show_log: false,
        };

        app.refresh_roster();
        app
    }

    /// Re-issue the roster fetch for the configured server.
    pub fn refresh_roster(&mut self) {
        if let Err(e) = validation::validate_server_url(&self.settings.server) {
            self.state.roster_failed(e.clone());
            self.state.log(format!("Invalid server URL: {}", e));
            return;
        }

        self.state.begin_roster_load();
        self.state
            .log(format!("Fetching users from {}", self.settings.server));
        let _ = self.action_tx.send(BackendAction::FetchRoster {
            server: self.settings.server.clone(),
        });
    }

    /// Switch the conversation to `name` and cancel pending replies.
    pub fn select_user(&mut self, name: &str) {
        self.state.select_user(name);
        let _ = self.action_tx.send(BackendAction::ConversationChanged);
        self.state.log(format!("Now chatting with {}", name));
    }

    /// Schedule the canned reply for a just-sent message.
    pub fn schedule_reply(&mut self, conversation: String, timestamp: String) {
        let _ = self.action_tx.send(BackendAction::ScheduleReply {
            conversation,
            text: self.settings.reply_text.clone(),
            timestamp,
            delay: Duration::from_millis(self.settings.reply_delay_ms),
        });
    }

    pub fn persist_settings(&mut self) {
        self.settings.history = self.input.history.clone();
        if let Err(e) = save_settings(&self.settings) {
            eprintln!("Failed to save settings: {}", e);
        }
    }

    /// Switch dark/light visuals and persist the choice.
    pub fn set_theme(&mut self, ctx: &egui::Context, name: &str) {
        self.settings.theme = name.to_string();
        theme::apply_theme(ctx, name);
        self.persist_settings();
    }
}

impl Drop for ParlorApp {
    fn drop(&mut self) {
        // Persist settings on exit
        self.persist_settings();
    }
}
