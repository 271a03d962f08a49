//! Chat Messages
//!
//! Message format for the advisory chat transcript.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who wrote a message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// Person asking questions
    User,
    /// Advisory responder
    Assistant,
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

/// How a message should be presented
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageCategory {
    /// Plain conversational text
    #[default]
    Text,
    /// Advisory answer, badged as analysis by the UI
    Analysis,
}

/// A single message in a chat transcript
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique message id
    pub id: String,

    /// Text content
    pub content: String,

    /// Author
    pub sender: Sender,

    /// Creation time
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,

    /// Presentation category
    #[serde(default)]
    pub category: MessageCategory,
}

impl ChatMessage {
    /// Create a new message
    pub fn new(sender: Sender, content: impl Into<String>, category: MessageCategory) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content: content.into(),
            sender,
            timestamp: Utc::now(),
            category,
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Sender::User, content, MessageCategory::Text)
    }

    /// Create an assistant reply
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Sender::Assistant, content, MessageCategory::Analysis)
    }

    /// Create a plain assistant message (greetings, notices)
    pub fn assistant_text(content: impl Into<String>) -> Self {
        Self::new(Sender::Assistant, content, MessageCategory::Text)
    }
}

/// Append-only list of chat messages.
///
/// The transcript is kept for display; nothing in the responder reads it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// All messages, oldest first
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Whether the user has said anything yet
    pub fn has_user_messages(&self) -> bool {
        self.messages.iter().any(|m| m.sender == Sender::User)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
