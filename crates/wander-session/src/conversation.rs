use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use wander_core::{ChatMessage, MessageDraft};

/// An append-only conversation log.
///
/// Messages are immutable once appended; the only destructive operation
/// is [`Conversation::clear`], which empties the whole log and resets the
/// id counter to 1. Ids are the stringified counter values "1", "2", ...
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    id: String,
    messages: Vec<ChatMessage>,
    next_id: u64,
    pending: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Conversation {
    /// Create an empty conversation
    pub fn new(id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            messages: Vec::new(),
            next_id: 1,
            pending: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Conversation id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Append a message, assigning the next id and the current time
    pub fn append(&mut self, draft: MessageDraft) -> ChatMessage {
        let message = draft.into_message(self.next_id.to_string());
        self.next_id += 1;
        self.updated_at = Utc::now();
        self.messages.push(message.clone());
        message
    }

    /// Empty the log and reset the id counter to 1
    pub fn clear(&mut self) {
        self.messages.clear();
        self.next_id = 1;
        self.updated_at = Utc::now();
    }

    /// The full log in append order
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// The most recent message
    pub fn last_message(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Number of messages in the log
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True when the log is empty
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// True while a response is outstanding
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Claim the single in-flight slot. Returns false when a response is
    /// already outstanding; there is no queue and no cancellation.
    pub fn try_begin_pending(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Release the in-flight slot
    pub fn finish_pending(&mut self) {
        self.pending = false;
    }

    /// Creation time
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Last append or clear time
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
