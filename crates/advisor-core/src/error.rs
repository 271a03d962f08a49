//! Error Types

use thiserror::Error;

/// Result type alias for chat operations
pub type Result<T> = std::result::Result<T, ChatError>;

/// Chat error types
#[derive(Error, Debug)]
pub enum ChatError {
    /// Message was empty after trimming
    #[error("Message is empty")]
    EmptyMessage,

    /// No session with this id in the store
    #[error("Session not found: {0}")]
    SessionNotFound(String),

    /// Session store failure (poisoned lock)
    #[error("Session error: {0}")]
    Session(String),
}

impl ChatError {
    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyMessage => "Please type a question before sending.".into(),
            Self::SessionNotFound(_) => "This conversation no longer exists. Please start a new one.".into(),
            Self::Session(_) => "An unexpected error occurred.".into(),
        }
    }
}
