use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use wander_catalog::TourPackage;

use crate::types::intent::{Entities, Intent};

/// Who authored a conversation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Assistant => write!(f, "assistant"),
        }
    }
}

/// Classification details the local pipeline recorded for a message
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_size: Option<u32>,
}

impl MessageMetadata {
    /// Build metadata from a classified intent and extracted entities
    pub fn from_classification(intent: Intent, entities: &Entities) -> Self {
        Self {
            intent: Some(intent),
            budget: entities.budget,
            duration_days: entities.duration_days,
            group_size: entities.group_size,
        }
    }
}

/// One entry in the conversation log.
///
/// Immutable once created: the conversation only appends, never mutates
/// or deletes. The id is a stringified monotonic counter assigned by the
/// conversation at append time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<TourPackage>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_actions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MessageMetadata>,
}

/// A message without id and timestamp, which the conversation assigns.
#[derive(Debug, Clone)]
pub struct MessageDraft {
    pub sender: Sender,
    pub text: String,
    pub recommendations: Option<Vec<TourPackage>>,
    pub quick_actions: Option<Vec<String>>,
    pub metadata: Option<MessageMetadata>,
}

impl MessageDraft {
    /// Draft a user message
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
            recommendations: None,
            quick_actions: None,
            metadata: None,
        }
    }

    /// Draft an assistant message
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Assistant,
            text: text.into(),
            recommendations: None,
            quick_actions: None,
            metadata: None,
        }
    }

    /// Attach tour recommendations
    pub fn with_recommendations(mut self, recommendations: Vec<TourPackage>) -> Self {
        if !recommendations.is_empty() {
            self.recommendations = Some(recommendations);
        }
        self
    }

    /// Attach quick action prompts
    pub fn with_quick_actions(mut self, quick_actions: Vec<String>) -> Self {
        if !quick_actions.is_empty() {
            self.quick_actions = Some(quick_actions);
        }
        self
    }

    /// Attach classification metadata
    pub fn with_metadata(mut self, metadata: MessageMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Finalize into a `ChatMessage` with the id the conversation assigned
    pub fn into_message(self, id: String) -> ChatMessage {
        ChatMessage {
            id,
            sender: self.sender,
            text: self.text,
            timestamp: Utc::now(),
            recommendations: self.recommendations,
            quick_actions: self.quick_actions,
            metadata: self.metadata,
        }
    }
}
