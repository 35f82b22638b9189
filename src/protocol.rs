use std::time::Duration;

use crate::roster::User;

/// Actions sent from the UI to the Backend
#[derive(Debug, Clone)]
pub enum BackendAction {
    /// Fetch the user roster from the given server base URL
    FetchRoster { server: String },
    /// The selected conversation changed; pending replies for the old one
    /// must not fire
    ConversationChanged,
    /// Schedule the canned reply for a conversation
    ScheduleReply {
        conversation: String,
        text: String,
        timestamp: String,
        delay: Duration,
    },
}

/// Events sent from the Backend to the UI
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// Roster fetch succeeded; users are in response order
    Roster(Vec<User>),
    /// Roster fetch or decode failed
    RosterFailed(String),
    /// A scheduled reply timer fired
    ReplyReady {
        conversation: String,
        text: String,
        timestamp: String,
    },
}
