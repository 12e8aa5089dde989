use thiserror::Error;

/// Conversation store error type
#[derive(Error, Debug)]
pub enum SessionError {
    /// No conversation registered under the given id
    #[error("conversation not found: {id}")]
    ConversationNotFound { id: String },
}

pub type SessionResult<T> = std::result::Result<T, SessionError>;
