//! End-to-end flow over the conversation store: send a user turn, get an
//! advisor reply, append it, and check the log regardless of whether the
//! remote assistant answered or failed.

use std::sync::Arc;

use async_trait::async_trait;
use wander_catalog::InMemoryCatalog;
use wander_core::chat::{ChatRequest, ChatResponse, PromptMessage};
use wander_core::{MessageDraft, Sender};
use wander_engine::{Advisor, AdvisorOptions, SynthesizerConfig};
use wander_llm::{CompletionClient, LlmError, Result as LlmResult};
use wander_session::ConversationStore;

struct FailingClient;

#[async_trait]
impl CompletionClient for FailingClient {
    fn provider_id(&self) -> &str {
        "failing"
    }

    async fn complete(&self, _request: ChatRequest) -> LlmResult<ChatResponse> {
        Err(LlmError::Network("simulated outage".to_string()))
    }
}

struct EchoClient;

#[async_trait]
impl CompletionClient for EchoClient {
    fn provider_id(&self) -> &str {
        "echo"
    }

    async fn complete(&self, request: ChatRequest) -> LlmResult<ChatResponse> {
        Ok(ChatResponse::new(
            "resp_1",
            request.model.as_str(),
            PromptMessage::assistant("The Goa Beach Bliss package is a great fit."),
        ))
    }
}

fn advisor(client: Arc<dyn CompletionClient>) -> Advisor {
    let catalog = Arc::new(InMemoryCatalog::seeded().unwrap());
    Advisor::new(catalog, SynthesizerConfig::default())
        .with_remote(client, AdvisorOptions::default())
}

/// One user turn against `advisor`, driven exactly like the send handler:
/// claim the pending slot, append the user message, resolve a reply,
/// append it, release the slot.
async fn send_turn(store: &ConversationStore, id: &str, advisor: &Advisor, text: &str) {
    assert!(store.try_begin_pending(id).unwrap());
    let history = store.history(id).unwrap();
    store.append_message(id, MessageDraft::user(text)).unwrap();

    let reply = advisor.respond(text, &history).await;
    store.append_message(id, reply.into_draft()).unwrap();
    store.finish_pending(id).unwrap();
}

#[tokio::test]
async fn remote_failure_still_appends_exactly_one_assistant_message() {
    let store = ConversationStore::new();
    let id = store.create_conversation();
    let advisor = advisor(Arc::new(FailingClient));

    send_turn(&store, &id, &advisor, "Show me budget-friendly beach destinations").await;

    let history = store.history(&id).unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].sender, Sender::User);

    let assistant_messages: Vec<_> = history
        .iter()
        .filter(|m| m.sender == Sender::Assistant)
        .collect();
    assert_eq!(assistant_messages.len(), 1);
    // The fallback reply is shaped like any other assistant reply.
    assert!(!assistant_messages[0].text.is_empty());
    assert!(assistant_messages[0].recommendations.is_some());
    assert!(!store.is_pending(&id).unwrap());
}

#[tokio::test]
async fn remote_success_attaches_catalog_recommendations() {
    let store = ConversationStore::new();
    let id = store.create_conversation();
    let advisor = advisor(Arc::new(EchoClient));

    send_turn(&store, &id, &advisor, "what do you suggest?").await;

    let history = store.history(&id).unwrap();
    let reply = &history[1];
    let recommendations = reply.recommendations.as_deref().unwrap();
    assert!(recommendations.iter().any(|t| t.id == "goa-beach-bliss"));
}

#[tokio::test]
async fn multi_turn_ids_keep_increasing_until_cleared() {
    let store = ConversationStore::new();
    let id = store.create_conversation();
    let advisor = advisor(Arc::new(FailingClient));

    send_turn(&store, &id, &advisor, "hello").await;
    send_turn(&store, &id, &advisor, "beaches under 20k?").await;

    let ids: Vec<String> = store
        .history(&id)
        .unwrap()
        .iter()
        .map(|m| m.id.clone())
        .collect();
    assert_eq!(ids, vec!["1", "2", "3", "4"]);

    store.clear(&id).unwrap();
    send_turn(&store, &id, &advisor, "starting fresh").await;
    let history = store.history(&id).unwrap();
    assert_eq!(history[0].id, "1");
}
