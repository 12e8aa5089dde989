//! Shared types for the wander conversational recommendation engine.

pub mod chat;
pub mod types;

pub use types::{
    AdvisorReply, ChatMessage, Entities, Intent, MessageDraft, MessageMetadata, Sender,
};

pub use chat::{
    ChatOptions, ChatRequest, ChatResponse, ChatUsage, FinishReason, PromptMessage, Role,
};
