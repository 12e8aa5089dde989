pub mod intent;
pub mod message;
pub mod reply;

pub use intent::{Entities, Intent};
pub use message::{ChatMessage, MessageDraft, MessageMetadata, Sender};
pub use reply::AdvisorReply;
