use thiserror::Error;

/// Unified error type for chat completion calls
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("network error: {0}")]
    Network(String),

    #[error("api error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("authentication error: {0}")]
    Auth(String),

    #[error("rate limited")]
    RateLimited,

    #[error("transform error: {0}")]
    Transform(#[from] TransformError),

    #[error("config error: {0}")]
    Config(String),
}

/// Error converting between internal and provider wire formats
#[derive(Error, Debug)]
pub enum TransformError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing field: {0}")]
    MissingField(String),
}

pub type Result<T> = std::result::Result<T, LlmError>;
