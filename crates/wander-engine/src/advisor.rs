//! The two-stage advisor: remote model first, local pipeline on any error.
//!
//! The fallback boundary is a typed control-flow edge: `respond` matches
//! on the remote `Result` and every `Err` variant, without distinction,
//! routes to the deterministic pipeline. No retry, no backoff. The
//! fallback reply is shaped exactly like a remote one, so the caller
//! cannot tell them apart.

use std::sync::Arc;

use tracing::{debug, warn};
use wander_catalog::{CatalogRepository, TourPackage};
use wander_core::chat::{ChatRequest, PromptMessage};
use wander_core::{AdvisorReply, ChatMessage, Sender};
use wander_llm::CompletionClient;
use wander_nlu::{classify, extract};

use crate::prompt::build_system_prompt;
use crate::synthesizer::{Synthesizer, SynthesizerConfig};

/// Remote call parameters
#[derive(Debug, Clone)]
pub struct AdvisorOptions {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for AdvisorOptions {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            temperature: 0.7,
            max_tokens: 500,
        }
    }
}

/// Answers one user turn, remote-first with a deterministic fallback.
pub struct Advisor {
    catalog: Arc<dyn CatalogRepository>,
    synthesizer: Synthesizer,
    remote: Option<Arc<dyn CompletionClient>>,
    options: AdvisorOptions,
}

impl Advisor {
    /// Create a local-only advisor
    pub fn new(catalog: Arc<dyn CatalogRepository>, config: SynthesizerConfig) -> Self {
        let synthesizer = Synthesizer::new(Arc::clone(&catalog), config);
        Self {
            catalog,
            synthesizer,
            remote: None,
            options: AdvisorOptions::default(),
        }
    }

    /// Attach a remote completion client
    pub fn with_remote(mut self, client: Arc<dyn CompletionClient>, options: AdvisorOptions) -> Self {
        self.remote = Some(client);
        self.options = options;
        self
    }

    /// Whether a remote client is configured
    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// Answer one user turn. Always resolves to a reply.
    pub async fn respond(&self, query: &str, history: &[ChatMessage]) -> AdvisorReply {
        if let Some(client) = &self.remote {
            let request = self.build_request(query, history);
            match client.complete(request).await {
                Ok(response) => {
                    debug!(provider = client.provider_id(), "remote assistant answered");
                    let text = response.text().to_string();
                    let recommendations = self.scan_recommendations(&text);
                    return AdvisorReply::text(text).with_recommendations(recommendations);
                }
                Err(error) => {
                    warn!(
                        provider = client.provider_id(),
                        %error,
                        "remote assistant failed, using local pipeline"
                    );
                }
            }
        }
        self.respond_locally(query)
    }

    /// The deterministic pipeline: classify, extract, synthesize.
    pub fn respond_locally(&self, query: &str) -> AdvisorReply {
        let intent = classify(query);
        let entities = extract(query);
        self.synthesizer.synthesize(intent, &entities, query)
    }

    /// One request per turn: catalog system prompt, then the mapped
    /// conversation history, then the current query.
    fn build_request(&self, query: &str, history: &[ChatMessage]) -> ChatRequest {
        let mut messages = vec![PromptMessage::system(build_system_prompt(
            self.catalog.as_ref(),
        ))];
        for message in history {
            messages.push(match message.sender {
                Sender::User => PromptMessage::user(message.text.as_str()),
                Sender::Assistant => PromptMessage::assistant(message.text.as_str()),
            });
        }
        messages.push(PromptMessage::user(query));

        ChatRequest::new(self.options.model.as_str())
            .with_messages(messages)
            .temperature(self.options.temperature)
            .max_tokens(self.options.max_tokens)
    }

    /// Find catalog packages the reply mentions, by case-insensitive
    /// substring on tour title or destination name. Result order is
    /// catalog order, not order of mention.
    fn scan_recommendations(&self, reply_text: &str) -> Vec<TourPackage> {
        let haystack = reply_text.to_lowercase();
        self.catalog
            .tours()
            .iter()
            .filter(|tour| {
                if haystack.contains(&tour.title.to_lowercase()) {
                    return true;
                }
                self.catalog
                    .destination_of(tour)
                    .map(|d| haystack.contains(&d.name.to_lowercase()))
                    .unwrap_or(false)
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use wander_catalog::InMemoryCatalog;
    use wander_core::chat::ChatResponse;
    use wander_core::Intent;
    use wander_llm::{LlmError, Result as LlmResult};

    /// Scripted remote client: replies with a fixed text or a fixed error.
    struct ScriptedClient {
        reply: std::result::Result<String, fn() -> LlmError>,
    }

    impl ScriptedClient {
        fn answering(text: &str) -> Self {
            Self { reply: Ok(text.to_string()) }
        }

        fn failing(make_error: fn() -> LlmError) -> Self {
            Self { reply: Err(make_error) }
        }
    }

    #[async_trait]
    impl CompletionClient for ScriptedClient {
        fn provider_id(&self) -> &str {
            "scripted"
        }

        async fn complete(&self, request: ChatRequest) -> LlmResult<ChatResponse> {
            assert!(!request.messages.is_empty());
            match &self.reply {
                Ok(text) => Ok(ChatResponse::new(
                    "resp_1",
                    request.model.as_str(),
                    PromptMessage::assistant(text.clone()),
                )),
                Err(make_error) => Err(make_error()),
            }
        }
    }

    fn catalog() -> Arc<InMemoryCatalog> {
        Arc::new(InMemoryCatalog::seeded().unwrap())
    }

    fn advisor_with(client: ScriptedClient) -> Advisor {
        Advisor::new(catalog(), SynthesizerConfig::default())
            .with_remote(Arc::new(client), AdvisorOptions::default())
    }

    #[tokio::test]
    async fn test_remote_reply_gets_title_recommendations() {
        let advisor = advisor_with(ScriptedClient::answering(
            "I'd suggest the Manali Adventure Trek, it suits active groups.",
        ));
        let reply = advisor.respond("something adventurous", &[]).await;

        let recs = reply.recommendations.as_deref().unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].id, "manali-adventure-trek");
    }

    #[tokio::test]
    async fn test_destination_mention_attaches_in_catalog_order() {
        // "Goa" matches both Goa tours even though neither title appears,
        // and catalog order wins over mention order.
        let advisor = advisor_with(ScriptedClient::answering(
            "Ladakh in summer is stunning; Goa works all year.",
        ));
        let reply = advisor.respond("where should I go", &[]).await;

        let ids: Vec<&str> = reply
            .recommendations
            .as_deref()
            .unwrap()
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec!["goa-beach-bliss", "ladakh-high-passes", "goa-wellness-retreat"]
        );
    }

    #[tokio::test]
    async fn test_network_error_falls_back_to_local_pipeline() {
        let advisor = advisor_with(ScriptedClient::failing(|| {
            LlmError::Network("connection refused".to_string())
        }));
        let reply = advisor
            .respond("Show me budget-friendly beach destinations", &[])
            .await;

        // The fallback must resolve with a normal-looking reply produced
        // by the local pipeline: classified intent, recommendations set.
        let metadata = reply.metadata.expect("local pipeline records metadata");
        assert_eq!(metadata.intent, Some(Intent::BudgetInquiry));
        assert!(reply.recommendations.as_deref().is_some());
    }

    #[tokio::test]
    async fn test_every_error_variant_takes_the_same_edge() {
        for make_error in [
            (|| LlmError::RateLimited) as fn() -> LlmError,
            || LlmError::Auth("bad key".to_string()),
            || LlmError::Api { status: 500, message: "boom".to_string() },
        ] {
            let advisor = advisor_with(ScriptedClient::failing(make_error));
            let reply = advisor.respond("plan a trip for 4 people", &[]).await;
            assert!(!reply.text.is_empty());
            assert_eq!(
                reply.metadata.and_then(|m| m.intent),
                Some(Intent::GroupPlanning)
            );
        }
    }

    #[tokio::test]
    async fn test_local_only_advisor_never_needs_a_remote() {
        let advisor = Advisor::new(catalog(), SynthesizerConfig::default());
        assert!(!advisor.has_remote());

        let reply = advisor.respond("hello", &[]).await;
        assert!(!reply.text.is_empty());
    }

    #[test]
    fn test_request_carries_system_history_and_query() {
        let advisor = Advisor::new(catalog(), SynthesizerConfig::default());
        let history = vec![
            wander_core::MessageDraft::user("hi").into_message("1".to_string()),
            wander_core::MessageDraft::assistant("hello!").into_message("2".to_string()),
        ];
        let request = advisor.build_request("beaches?", &history);

        assert_eq!(request.messages.len(), 4);
        assert_eq!(request.messages[0].role, wander_core::Role::System);
        assert!(request.messages[0].content.contains("TRAVEL CATALOG"));
        assert_eq!(request.messages[3].content, "beaches?");
        assert_eq!(request.options.temperature, Some(0.7));
        assert_eq!(request.options.max_tokens, Some(500));
    }
}
