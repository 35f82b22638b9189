//! Backend loop: roster fetch and auto-reply timers.
//!
//! Runs a Tokio runtime on a dedicated thread so the UI never blocks on
//! the network. Reply timers are children of a per-selection cancellation
//! token; switching conversations cancels every timer scheduled for the
//! previous one.

use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

use crate::protocol::{BackendAction, GuiEvent};
use crate::roster;

/// How long a roster request may take before it is abandoned
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);
/// Poll interval for the action channel
const TICK: Duration = Duration::from_millis(25);

pub fn run_backend(action_rx: Receiver<BackendAction>, event_tx: Sender<GuiEvent>) {
    // Create a Tokio runtime for this thread
    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            let _ = event_tx.send(GuiEvent::RosterFailed(format!(
                "failed to create Tokio runtime: {}",
                e
            )));
            return;
        }
    };

    rt.block_on(async move {
        let client = match reqwest::Client::builder().timeout(HTTP_TIMEOUT).build() {
            Ok(client) => client,
            Err(e) => {
                let _ = event_tx.send(GuiEvent::RosterFailed(format!(
                    "failed to create HTTP client: {}",
                    e
                )));
                return;
            }
        };

        // One token per conversation selection; replaced wholesale on switch.
        let mut reply_token = CancellationToken::new();

        loop {
            // Check for actions from the UI (non-blocking)
            loop {
                match action_rx.try_recv() {
                    Ok(action) => {
                        handle_action(action, &client, &event_tx, &mut reply_token).await;
                    }
                    Err(TryRecvError::Empty) => break,
                    // UI side is gone; stop the backend with it
                    Err(TryRecvError::Disconnected) => return,
                }
            }

            tokio::time::sleep(TICK).await;
        }
    });
}

async fn handle_action(
    action: BackendAction,
    client: &reqwest::Client,
    event_tx: &Sender<GuiEvent>,
    reply_token: &mut CancellationToken,
) {
    match action {
        BackendAction::FetchRoster { server } => {
            match roster::fetch_users(client, &server).await {
                Ok(users) => {
                    let _ = event_tx.send(GuiEvent::Roster(users));
                }
                Err(e) => {
                    let _ = event_tx.send(GuiEvent::RosterFailed(e.to_string()));
                }
            }
        }

        BackendAction::ConversationChanged => {
            reply_token.cancel();
            *reply_token = CancellationToken::new();
        }

        BackendAction::ScheduleReply {
            conversation,
            text,
            timestamp,
            delay,
        } => {
            let token = reply_token.child_token();
            let tx = event_tx.clone();
            tokio::spawn(async move {
                tokio::select! {
                    _ = token.cancelled() => {}
                    _ = tokio::time::sleep(delay) => {
                        let _ = tx.send(GuiEvent::ReplyReady {
                            conversation,
                            text,
                            timestamp,
                        });
                    }
                }
            });
        }
    }
}
