use serde::{Deserialize, Serialize};
use wander_catalog::TourPackage;

use crate::types::message::{MessageDraft, MessageMetadata};

/// The advisor's answer to one user turn.
///
/// Total by construction: every pipeline stage returns one of these, so
/// the user always receives a reply whether the remote model answered or
/// the local pipeline did.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorReply {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<TourPackage>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_actions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MessageMetadata>,
}

impl AdvisorReply {
    /// A plain text reply
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            recommendations: None,
            quick_actions: None,
            metadata: None,
        }
    }

    /// Attach recommendations (empty lists stay absent)
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

    /// Convert into an assistant message draft for the conversation log
    pub fn into_draft(self) -> MessageDraft {
        let mut draft = MessageDraft::assistant(self.text);
        draft.recommendations = self.recommendations;
        draft.quick_actions = self.quick_actions;
        draft.metadata = self.metadata;
        draft
    }
}
