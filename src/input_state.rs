//! Input state management for message composition and history recall.
//!
//! Separated from the main application state so the compose box can be
//! exercised without a window.

/// Manages all input-related state for the chat client.
#[derive(Default)]
pub struct InputState {
    /// Current message being composed
    pub message_input: String,

    /// Sent-message history (for up/down arrow navigation)
    pub history: Vec<String>,

    /// Current position in history (None = not navigating)
    pub history_pos: Option<usize>,

    /// Saved input when entering history mode
    pub history_saved_input: Option<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a sent message and reset history navigation.
    pub fn push_history(&mut self, text: String) {
        self.history.push(text);
        self.history_pos = None;
        self.history_saved_input = None;
    }

    /// Navigate up in message history.
    pub fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }

        if self.history_pos.is_none() {
            // Store current text to restore if the user navigates back
            self.history_saved_input = Some(self.message_input.clone());
            self.history_pos = Some(self.history.len() - 1);
        } else if let Some(pos) = self.history_pos {
            if pos > 0 {
                self.history_pos = Some(pos - 1);
            }
        }

        if let Some(pos) = self.history_pos {
            if let Some(h) = self.history.get(pos) {
                self.message_input = h.clone();
            }
        }
    }

    /// Navigate down in message history.
    pub fn history_down(&mut self) {
        if let Some(pos) = self.history_pos {
            if pos + 1 < self.history.len() {
                self.history_pos = Some(pos + 1);
                if let Some(h) = self.history.get(pos + 1) {
                    self.message_input = h.clone();
                }
            } else {
                // Exit history navigation
                self.history_pos = None;
                self.message_input = self.history_saved_input.take().unwrap_or_default();
            }
        }
    }

    /// Clear the compose box and leave history mode.
    pub fn reset(&mut self) {
        self.message_input.clear();
        self.history_pos = None;
        self.history_saved_input = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_state_new() {
        let input = InputState::new();
        assert!(input.message_input.is_empty());
        assert!(input.history.is_empty());
        assert!(input.history_pos.is_none());
    }

    #[test]
    fn test_history_navigation() {
        let mut input = InputState::new();
        input.history = vec!["first".into(), "second".into(), "third".into()];
        input.message_input = "current".into();

        // Navigate up
        input.history_up();
        assert_eq!(input.message_input, "third");
        assert_eq!(input.history_saved_input, Some("current".into()));

        input.history_up();
        assert_eq!(input.message_input, "second");

        input.history_up();
        assert_eq!(input.message_input, "first");

        // Navigate down
        input.history_down();
        assert_eq!(input.message_input, "second");

        input.history_down();
        assert_eq!(input.message_input, "third");

        // Exit history mode
        input.history_down();
        assert_eq!(input.message_input, "current");
        assert!(input.history_pos.is_none());
    }

    #[test]
    fn test_push_history_resets_navigation() {
        let mut input = InputState::new();
        input.history = vec!["first".into()];
        input.history_up();
        assert!(input.history_pos.is_some());

        input.push_history("second".into());
        assert!(input.history_pos.is_none());
        assert_eq!(input.history.len(), 2);
    }

    #[test]
    fn test_reset_clears_input_and_mode() {
        let mut input = InputState::new();
        input.history = vec!["first".into()];
        input.message_input = "typing".into();
        input.history_up();

        input.reset();
        assert!(input.message_input.is_empty());
        assert!(input.history_pos.is_none());
        assert!(input.history_saved_input.is_none());
    }
}
