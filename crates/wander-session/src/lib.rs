//! In-memory conversation state.
//!
//! A conversation is an append-only log of [`wander_core::ChatMessage`]
//! values with a monotonic id counter. The store keeps one entry per
//! conversation, guards the single in-flight request with a pending flag,
//! and pushes [`ConversationEvent`]s to an optional subscriber. Nothing
//! persists: every conversation dies with the process.

pub mod conversation;
pub mod error;
pub mod store;

pub use conversation::Conversation;
pub use error::{SessionError, SessionResult};
pub use store::{ConversationEvent, ConversationStore};
