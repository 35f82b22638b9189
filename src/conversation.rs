/// Direction of a displayed message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Sent,
    Received,
}

/// A single rendered message with its capture-time timestamp.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub text: String,
    /// Local time formatted `HH:MM`, captured when the exchange started.
    pub timestamp: String,
    pub direction: Direction,
}

impl ChatMessage {
    pub fn sent(text: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timestamp: timestamp.into(),
            direction: Direction::Sent,
        }
    }

    pub fn received(text: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timestamp: timestamp.into(),
            direction: Direction::Received,
        }
    }
}

/// The one active conversation: a partner name and its display list.
///
/// The list is in-memory, append-only and unbounded; it disappears only
/// when a new conversation replaces this one. No per-partner history is
/// kept across switches.
#[derive(Clone, Debug)]
pub struct Conversation {
    pub partner: String,
    pub messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new(partner: impl Into<String>) -> Self {
        Self {
            partner: partner.into(),
            messages: Vec::new(),
        }
    }

    pub fn push(&mut self, msg: ChatMessage) {
        self.messages.push(msg);
    }

    /// Header label shown above the message area.
    pub fn header(&self) -> String {
        format!("Chat with {}", self.partner)
    }
}
