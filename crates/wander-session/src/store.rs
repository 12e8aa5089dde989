//! Conversation store: one entry per conversation with an optional event
//! subscriber for push-style UI updates.

use dashmap::DashMap;
use parking_lot::RwLock;
use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{debug, info};
use uuid::Uuid;
use wander_core::{ChatMessage, MessageDraft};

use crate::conversation::Conversation;
use crate::error::{SessionError, SessionResult};

/// Events pushed to a conversation subscriber
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConversationEvent {
    /// A message was appended
    MessageAdded { message: ChatMessage },
    /// The log was cleared and the counter reset
    Cleared,
    /// The in-flight flag changed
    PendingChanged { pending: bool },
}

/// One store entry
#[derive(Debug)]
struct ConversationEntry {
    conversation: Conversation,
    event_tx: Option<mpsc::UnboundedSender<ConversationEvent>>,
}

impl ConversationEntry {
    fn new(conversation: Conversation) -> Self {
        Self {
            conversation,
            event_tx: None,
        }
    }

    /// Push an event to the subscriber, dropping the channel if it hung up
    fn emit(&mut self, event: ConversationEvent) {
        if let Some(tx) = &self.event_tx {
            if tx.send(event).is_err() {
                self.event_tx = None;
            }
        }
    }
}

/// In-memory registry of conversations.
///
/// All mutation goes through this store so events and the pending guard
/// stay consistent with the log.
#[derive(Debug, Default)]
pub struct ConversationStore {
    conversations: DashMap<String, RwLock<ConversationEntry>>,
}

impl ConversationStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new conversation and return its id
    pub fn create_conversation(&self) -> String {
        let id = Uuid::new_v4().to_string();
        let entry = ConversationEntry::new(Conversation::new(&id));
        self.conversations.insert(id.clone(), RwLock::new(entry));
        info!(conversation = %id, "created conversation");
        id
    }

    /// Append a message and notify the subscriber
    pub fn append_message(&self, id: &str, draft: MessageDraft) -> SessionResult<ChatMessage> {
        let entry = self.entry(id)?;
        let mut entry = entry.write();
        let message = entry.conversation.append(draft);
        debug!(conversation = %id, message = %message.id, "appended message");
        entry.emit(ConversationEvent::MessageAdded {
            message: message.clone(),
        });
        Ok(message)
    }

    /// Empty the log, reset the id counter and notify the subscriber
    pub fn clear(&self, id: &str) -> SessionResult<()> {
        let entry = self.entry(id)?;
        let mut entry = entry.write();
        entry.conversation.clear();
        info!(conversation = %id, "cleared conversation");
        entry.emit(ConversationEvent::Cleared);
        Ok(())
    }

    /// The full log in append order
    pub fn history(&self, id: &str) -> SessionResult<Vec<ChatMessage>> {
        let entry = self.entry(id)?;
        let entry = entry.read();
        Ok(entry.conversation.messages().to_vec())
    }

    /// Number of messages in the log
    pub fn message_count(&self, id: &str) -> SessionResult<usize> {
        let entry = self.entry(id)?;
        let entry = entry.read();
        Ok(entry.conversation.len())
    }

    /// Whether a response is outstanding
    pub fn is_pending(&self, id: &str) -> SessionResult<bool> {
        let entry = self.entry(id)?;
        let entry = entry.read();
        Ok(entry.conversation.is_pending())
    }

    /// Claim the in-flight slot. `Ok(false)` means a response is already
    /// outstanding and the caller should refuse the send.
    pub fn try_begin_pending(&self, id: &str) -> SessionResult<bool> {
        let entry = self.entry(id)?;
        let mut entry = entry.write();
        let acquired = entry.conversation.try_begin_pending();
        if acquired {
            entry.emit(ConversationEvent::PendingChanged { pending: true });
        }
        Ok(acquired)
    }

    /// Release the in-flight slot
    pub fn finish_pending(&self, id: &str) -> SessionResult<()> {
        let entry = self.entry(id)?;
        let mut entry = entry.write();
        entry.conversation.finish_pending();
        entry.emit(ConversationEvent::PendingChanged { pending: false });
        Ok(())
    }

    /// Subscribe to conversation events, replacing any prior subscriber
    pub fn subscribe(
        &self,
        id: &str,
    ) -> SessionResult<mpsc::UnboundedReceiver<ConversationEvent>> {
        let entry = self.entry(id)?;
        let mut entry = entry.write();
        let (tx, rx) = mpsc::unbounded_channel();
        entry.event_tx = Some(tx);
        Ok(rx)
    }

    /// Drop a conversation entirely
    pub fn remove(&self, id: &str) -> bool {
        self.conversations.remove(id).is_some()
    }

    /// Number of live conversations
    pub fn conversation_count(&self) -> usize {
        self.conversations.len()
    }

    fn entry(
        &self,
        id: &str,
    ) -> SessionResult<dashmap::mapref::one::Ref<'_, String, RwLock<ConversationEntry>>> {
        self.conversations
            .get(id)
            .ok_or_else(|| SessionError::ConversationNotFound { id: id.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_n_messages() {
        let store = ConversationStore::new();
        let id = store.create_conversation();

        for n in 1..=4 {
            store
                .append_message(&id, MessageDraft::user(format!("message {n}")))
                .unwrap();
        }

        let history = store.history(&id).unwrap();
        assert_eq!(history.len(), 4);
        let ids: Vec<&str> = history.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_clear_then_append_restarts_at_one() {
        let store = ConversationStore::new();
        let id = store.create_conversation();

        store.append_message(&id, MessageDraft::user("one")).unwrap();
        store.append_message(&id, MessageDraft::user("two")).unwrap();
        store.clear(&id).unwrap();

        let message = store.append_message(&id, MessageDraft::user("fresh")).unwrap();
        assert_eq!(message.id, "1");
    }

    #[test]
    fn test_unknown_conversation_errors() {
        let store = ConversationStore::new();
        let err = store
            .append_message("missing", MessageDraft::user("hi"))
            .unwrap_err();
        assert!(matches!(err, SessionError::ConversationNotFound { .. }));
    }

    #[test]
    fn test_pending_guard_through_the_store() {
        let store = ConversationStore::new();
        let id = store.create_conversation();

        assert!(store.try_begin_pending(&id).unwrap());
        assert!(!store.try_begin_pending(&id).unwrap());
        assert!(store.is_pending(&id).unwrap());

        store.finish_pending(&id).unwrap();
        assert!(!store.is_pending(&id).unwrap());
        assert!(store.try_begin_pending(&id).unwrap());
    }

    #[tokio::test]
    async fn test_subscriber_sees_appends_and_clears() {
        let store = ConversationStore::new();
        let id = store.create_conversation();
        let mut rx = store.subscribe(&id).unwrap();

        store.append_message(&id, MessageDraft::user("hello")).unwrap();
        store.clear(&id).unwrap();

        match rx.try_recv().unwrap() {
            ConversationEvent::MessageAdded { message } => assert_eq!(message.text, "hello"),
            other => panic!("unexpected event: {other:?}"),
        }
        assert!(matches!(rx.try_recv().unwrap(), ConversationEvent::Cleared));
    }

    #[test]
    fn test_dropped_subscriber_does_not_break_appends() {
        let store = ConversationStore::new();
        let id = store.create_conversation();
        let rx = store.subscribe(&id).unwrap();
        drop(rx);

        // The send fails silently and the channel is discarded.
        store.append_message(&id, MessageDraft::user("still fine")).unwrap();
        assert_eq!(store.message_count(&id).unwrap(), 1);
    }

    #[test]
    fn test_conversations_are_isolated() {
        let store = ConversationStore::new();
        let a = store.create_conversation();
        let b = store.create_conversation();
        assert_ne!(a, b);

        store.append_message(&a, MessageDraft::user("in a")).unwrap();
        assert_eq!(store.message_count(&a).unwrap(), 1);
        assert_eq!(store.message_count(&b).unwrap(), 0);
        assert_eq!(store.conversation_count(), 2);

        assert!(store.remove(&a));
        assert_eq!(store.conversation_count(), 1);
    }
}
