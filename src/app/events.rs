//! Backend event processing (roster results, reply timers).

use crate::protocol::GuiEvent;

use super::ParlorApp;

impl ParlorApp {
    /// Process all pending events from the backend.
    pub fn process_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                GuiEvent::Roster(users) => {
                    let count = users.len();
                    self.state.set_roster(users);
                    self.state.log(format!("Loaded {} users", count));
                    self.state.toast(format!("Loaded {} users", count));
                }

                GuiEvent::RosterFailed(err) => {
                    self.state.roster_failed(err.clone());
                    self.state.log(format!("Roster fetch failed: {}", err));
                    self.state.toast("Could not load users");
                }

                GuiEvent::ReplyReady {
                    conversation,
                    text,
                    timestamp,
                } => {
                    // The backend cancels timers on switch; a reply already
                    // in flight for a stale conversation is dropped here.
                    if !self.state.apply_reply(&conversation, &text, &timestamp) {
                        self.state
                            .log(format!("Dropped reply for {}", conversation));
                    }
                }
            }
        }
    }
}
