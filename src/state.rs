//! Core application state, separated from UI logic.
//!
//! `ChatState` holds all data that represents the chat session: the roster,
//! the selected conversation, the system log and status toasts. UI
//! components receive state as a parameter rather than owning it, and the
//! panel operations (`select_user`, `send_message`, `apply_reply`) live
//! here so they can be unit tested without a window.

use std::time::Instant;

use chrono::Local;

use crate::conversation::{ChatMessage, Conversation};
use crate::roster::User;

/// Maximum system log lines to keep before trimming
const MAX_LOG_LINES: usize = 500;

/// Where the sidebar roster currently stands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RosterStatus {
    Loading,
    Loaded,
    Failed(String),
}

/// Result of a send attempt; the caller decides what to surface or schedule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    /// Message appended; an auto-reply should be scheduled carrying the
    /// same timestamp.
    Sent {
        conversation: String,
        timestamp: String,
    },
    /// No conversation selected; surface a blocking notice.
    NoUserSelected,
    /// Compose text was empty or whitespace-only; do nothing.
    EmptyInput,
}

/// Core application state for the chat client.
pub struct ChatState {
    /// Users from the `/users` endpoint, in response order.
    pub roster: Vec<User>,

    pub roster_status: RosterStatus,

    /// Sidebar search filter (case-insensitive substring on usernames).
    pub roster_filter: String,

    /// The selected conversation. `None` means no user selected.
    pub conversation: Option<Conversation>,

    /// System log messages (shown in the log view).
    pub system_log: Vec<String>,

    /// Status toast messages with creation time (auto-expire).
    pub status_messages: Vec<(String, Instant)>,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            roster: Vec::new(),
            roster_status: RosterStatus::Loading,
            roster_filter: String::new(),
            conversation: None,
            system_log: vec!["Welcome to Parlor!".into()],
            status_messages: Vec::new(),
        }
    }

    /// Append a timestamped line to the system log.
    pub fn log(&mut self, line: impl AsRef<str>) {
        let ts = Local::now().format("%H:%M:%S").to_string();
        self.system_log.push(format!("[{}] {}", ts, line.as_ref()));
        if self.system_log.len() > MAX_LOG_LINES {
            self.system_log.remove(0);
        }
    }

    /// Show a status toast.
    pub fn toast(&mut self, text: impl Into<String>) {
        self.status_messages.push((text.into(), Instant::now()));
    }

    /// Purge status messages older than the given duration.
    pub fn purge_old_status_messages(&mut self, max_age_secs: u64) {
        self.status_messages
            .retain(|(_, created)| created.elapsed().as_secs() < max_age_secs);
    }

    /// Mark the roster as being (re)fetched. The previous roster stays
    /// visible until the fetch resolves.
    pub fn begin_roster_load(&mut self) {
        self.roster_status = RosterStatus::Loading;
    }

    /// Replace the roster with a fresh fetch result.
    pub fn set_roster(&mut self, users: Vec<User>) {
        self.roster = users;
        self.roster_status = RosterStatus::Loaded;
    }

    /// Record a failed fetch; the previous roster is kept.
    pub fn roster_failed(&mut self, error: impl Into<String>) {
        self.roster_status = RosterStatus::Failed(error.into());
    }

    /// Roster entries matching the sidebar filter, in roster order.
    pub fn filtered_roster(&self) -> Vec<&User> {
        if self.roster_filter.trim().is_empty() {
            return self.roster.iter().collect();
        }
        let needle = self.roster_filter.trim().to_lowercase();
        self.roster
            .iter()
            .filter(|u| u.username.to_lowercase().contains(&needle))
            .collect()
    }

    /// Switch to chatting with `name`.
    ///
    /// The displayed message list is cleared unconditionally, even when
    /// re-selecting the current partner.
    pub fn select_user(&mut self, name: &str) {
        self.conversation = Some(Conversation::new(name));
    }

    /// Attempt to send the compose text.
    ///
    /// Checks the selection precondition first, then the whitespace-only
    /// case, matching the recoverable-vs-silent split in the UI.
    pub fn send_message(&mut self, text: &str, timestamp: &str) -> SendOutcome {
        let Some(conversation) = self.conversation.as_mut() else {
            return SendOutcome::NoUserSelected;
        };
        if text.trim().is_empty() {
            return SendOutcome::EmptyInput;
        }

        conversation.push(ChatMessage::sent(text, timestamp));
        SendOutcome::Sent {
            conversation: conversation.partner.clone(),
            timestamp: timestamp.to_string(),
        }
    }

    /// Deliver an auto-reply to the conversation it was scheduled for.
    ///
    /// Returns false (and drops the reply) when that conversation is no
    /// longer selected; the backend cancels timers on switch, this guards
    /// a reply already in flight.
    pub fn apply_reply(&mut self, conversation: &str, text: &str, timestamp: &str) -> bool {
        match self.conversation.as_mut() {
            Some(conv) if conv.partner == conversation => {
                conv.push(ChatMessage::received(text, timestamp));
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::Direction;

    fn roster(names: &[&str]) -> Vec<User> {
        names
            .iter()
            .map(|n| User {
                username: (*n).to_string(),
            })
            .collect()
    }

    #[test]
    fn test_new_state_has_no_selection() {
        let state = ChatState::new();
        assert!(state.conversation.is_none());
        assert_eq!(state.roster_status, RosterStatus::Loading);
    }

    #[test]
    fn test_send_without_selection_is_blocked() {
        let mut state = ChatState::new();
        assert_eq!(state.send_message("hello", "12:00"), SendOutcome::NoUserSelected);
        assert!(state.conversation.is_none());
    }

    #[test]
    fn test_send_whitespace_is_silently_ignored() {
        let mut state = ChatState::new();
        state.select_user("alice");
        assert_eq!(state.send_message("   ", "12:00"), SendOutcome::EmptyInput);
        assert_eq!(state.send_message("", "12:00"), SendOutcome::EmptyInput);
        assert!(state.conversation.as_ref().unwrap().messages.is_empty());
    }

    #[test]
    fn test_send_appends_exactly_one_sent_message() {
        let mut state = ChatState::new();
        state.select_user("alice");
        let outcome = state.send_message("hello", "12:34");
        assert_eq!(
            outcome,
            SendOutcome::Sent {
                conversation: "alice".into(),
                timestamp: "12:34".into(),
            }
        );

        let conv = state.conversation.as_ref().unwrap();
        assert_eq!(conv.messages.len(), 1);
        assert_eq!(conv.messages[0].direction, Direction::Sent);
        assert_eq!(conv.messages[0].text, "hello");
        assert_eq!(conv.messages[0].timestamp, "12:34");
    }

    #[test]
    fn test_select_user_clears_messages() {
        let mut state = ChatState::new();
        state.select_user("alice");
        state.send_message("hello", "12:00");

        state.select_user("bob");
        let conv = state.conversation.as_ref().unwrap();
        assert_eq!(conv.partner, "bob");
        assert!(conv.messages.is_empty());

        // Re-selecting the same partner also clears
        state.send_message("hey", "12:01");
        state.select_user("bob");
        assert!(state.conversation.as_ref().unwrap().messages.is_empty());
    }

    #[test]
    fn test_apply_reply_matches_conversation() {
        let mut state = ChatState::new();
        state.select_user("alice");
        state.send_message("hello", "12:00");

        assert!(state.apply_reply("alice", "Hi!", "12:00"));
        let conv = state.conversation.as_ref().unwrap();
        assert_eq!(conv.messages.len(), 2);
        assert_eq!(conv.messages[1].direction, Direction::Received);
        assert_eq!(conv.messages[1].timestamp, "12:00");
    }

    #[test]
    fn test_apply_reply_for_stale_conversation_is_dropped() {
        let mut state = ChatState::new();
        state.select_user("alice");
        state.send_message("hello", "12:00");

        state.select_user("bob");
        assert!(!state.apply_reply("alice", "Hi!", "12:00"));
        assert!(state.conversation.as_ref().unwrap().messages.is_empty());

        // No selection at all
        state.conversation = None;
        assert!(!state.apply_reply("alice", "Hi!", "12:00"));
    }

    #[test]
    fn test_roster_filter_narrows_without_mutating() {
        let mut state = ChatState::new();
        state.set_roster(roster(&["alice", "bob", "alina"]));

        state.roster_filter = "ali".into();
        let filtered: Vec<&str> = state
            .filtered_roster()
            .iter()
            .map(|u| u.username.as_str())
            .collect();
        assert_eq!(filtered, vec!["alice", "alina"]);
        assert_eq!(state.roster.len(), 3);

        state.roster_filter.clear();
        assert_eq!(state.filtered_roster().len(), 3);
    }

    #[test]
    fn test_roster_failure_keeps_previous_roster() {
        let mut state = ChatState::new();
        state.set_roster(roster(&["alice"]));
        state.begin_roster_load();
        state.roster_failed("request failed");

        assert_eq!(state.roster.len(), 1);
        assert_eq!(
            state.roster_status,
            RosterStatus::Failed("request failed".into())
        );
    }

    #[test]
    fn test_log_is_bounded() {
        let mut state = ChatState::new();
        for i in 0..(MAX_LOG_LINES + 50) {
            state.log(format!("line {}", i));
        }
        assert!(state.system_log.len() <= MAX_LOG_LINES);
    }
}
