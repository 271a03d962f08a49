//! Session Management
//!
//! A chat session owns its transcript. The responder is passed in per call,
//! so no session state leaks into reply selection.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ChatError, Result};
use crate::message::{ChatMessage, Sender, Transcript};
use crate::responder::IntentResponder;

/// Unique session identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A chat session
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatSession {
    /// Unique identifier
    pub id: SessionId,

    /// Message history
    pub transcript: Transcript,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last activity timestamp
    pub updated_at: DateTime<Utc>,
}

impl ChatSession {
    /// Create an empty session
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: SessionId::new(),
            transcript: Transcript::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a session whose transcript opens with an assistant greeting
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        let mut session = Self::new();
        session.transcript.push(ChatMessage::assistant_text(greeting));
        session
    }

    /// Update the activity timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Record a user utterance and the responder's reply.
    ///
    /// Returns the appended assistant message.
    pub fn exchange<I: Copy + Debug>(
        &mut self,
        responder: &IntentResponder<I>,
        utterance: &str,
    ) -> Result<&ChatMessage> {
        let text = utterance.trim();
        if text.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let reply = responder.classify(text);
        tracing::debug!(session = %self.id, intent = ?reply.intent, "matched chat intent");

        self.transcript.push(ChatMessage::user(text));
        self.transcript.push(ChatMessage::assistant(reply.response));
        self.touch();

        self.transcript
            .last()
            .ok_or_else(|| ChatError::Session("transcript is empty".into()))
    }

    /// Get a title from the first user message
    pub fn title(&self) -> String {
        self.transcript
            .messages()
            .iter()
            .find(|m| m.sender == Sender::User)
            .map_or_else(
                || format!("Session {}", self.id.as_str().chars().take(8).collect::<String>()),
                |m| {
                    let preview: String = m.content.chars().take(50).collect();
                    if m.content.chars().count() > 50 {
                        format!("{preview}...")
                    } else {
                        preview
                    }
                },
            )
    }

    /// Message count
    pub fn message_count(&self) -> usize {
        self.transcript.len()
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Session store trait
pub trait SessionStore: Send + Sync {
    /// Save a session
    fn save(&self, session: &ChatSession) -> Result<()>;

    /// Load a session by ID
    fn load(&self, id: &SessionId) -> Result<Option<ChatSession>>;

    /// Delete a session; returns whether it existed
    fn delete(&self, id: &SessionId) -> Result<bool>;
}

/// Sessions kept by a `MemorySessionStore` unless configured otherwise
pub const DEFAULT_SESSION_CAPACITY: usize = 1024;

/// In-memory session store.
///
/// Holds at most `capacity` sessions. Saving a new session into a full
/// store evicts the least recently active one.
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<SessionId, ChatSession>>,
    capacity: usize,
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned<T>(_: T) -> ChatError {
    ChatError::Session("session store lock poisoned".into())
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_SESSION_CAPACITY)
    }

    /// A store holding at most `capacity` sessions (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            capacity: capacity.max(1),
        }
    }

    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of stored sessions
    pub fn session_count(&self) -> Result<usize> {
        Ok(self.sessions.read().map_err(poisoned)?.len())
    }

    /// Apply `f` to a stored session under the write lock
    pub fn modify<R>(
        &self,
        id: &SessionId,
        f: impl FnOnce(&mut ChatSession) -> Result<R>,
    ) -> Result<R> {
        let mut sessions = self.sessions.write().map_err(poisoned)?;
        let session = sessions
            .get_mut(id)
            .ok_or_else(|| ChatError::SessionNotFound(id.to_string()))?;
        f(session)
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, session: &ChatSession) -> Result<()> {
        let mut sessions = self.sessions.write().map_err(poisoned)?;

        if !sessions.contains_key(&session.id) && sessions.len() >= self.capacity {
            let idle = sessions
                .values()
                .min_by_key(|s| s.updated_at)
                .map(|s| s.id.clone());
            if let Some(idle) = idle {
                tracing::debug!(session = %idle, "evicting least recently active session");
                sessions.remove(&idle);
            }
        }

        sessions.insert(session.id.clone(), session.clone());
        Ok(())
    }

    fn load(&self, id: &SessionId) -> Result<Option<ChatSession>> {
        let sessions = self.sessions.read().map_err(poisoned)?;
        Ok(sessions.get(id).cloned())
    }

    fn delete(&self, id: &SessionId) -> Result<bool> {
        let mut sessions = self.sessions.write().map_err(poisoned)?;
        Ok(sessions.remove(id).is_some())
    }
}
