//! # advisor-core
//!
//! Chat plumbing for the advisor: transcripts, sessions and a stateless
//! decision-list responder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      ChatSession                            │
//! │  ┌─────────────┐   exchange()   ┌────────────────────────┐  │
//! │  │ Transcript  │◀───────────────│   IntentResponder      │  │
//! │  │ (append)    │                │   (ordered rules)      │  │
//! │  └─────────────┘                └────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The transcript is display state owned by the session. The responder is
//! handed in on every call and never reads the transcript, so any number of
//! sessions can share one responder.

pub mod error;
pub mod message;
pub mod responder;
pub mod session;

pub use error::{ChatError, Result};
pub use message::{ChatMessage, MessageCategory, Sender, Transcript};
pub use responder::{IntentResponder, IntentRule, Reply};
pub use session::{
    ChatSession, DEFAULT_SESSION_CAPACITY, MemorySessionStore, SessionId, SessionStore,
};
