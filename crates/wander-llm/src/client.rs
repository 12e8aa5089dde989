//! HTTP chat completion client.

use async_trait::async_trait;
use reqwest::{header, Client};
use tracing::debug;
use wander_core::chat::{ChatRequest, ChatResponse};

use crate::config::ClientConfig;
use crate::error::{LlmError, Result};
use crate::transformer::OpenAiTransformer;

/// A client that can answer one chat completion request.
///
/// The engine holds this behind a trait object so tests can substitute a
/// scripted implementation.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Provider identifier for logging
    fn provider_id(&self) -> &str;

    /// Send one request and return the complete response.
    ///
    /// One attempt only: no retry, no backoff. Every failure mode
    /// (connect, timeout, non-2xx status, malformed body) surfaces as an
    /// `Err` for the caller to route.
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse>;
}

/// OpenAI-compatible HTTP client
pub struct OpenAiClient {
    config: ClientConfig,
    http: Client,
    transformer: OpenAiTransformer,
}

impl OpenAiClient {
    /// Create a client from config
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LlmError::Config(e.to_string()))?;

        Ok(Self {
            config,
            http,
            transformer: OpenAiTransformer::new(),
        })
    }

    /// The configured model
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Build request headers
    fn build_headers(&self) -> Result<header::HeaderMap> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        if let Some(value) = self.config.auth.bearer_value() {
            let value = header::HeaderValue::from_str(&value)
                .map_err(|e| LlmError::Config(format!("invalid auth header value: {e}")))?;
            headers.insert(header::AUTHORIZATION, value);
        }

        for (key, value) in &self.config.headers {
            let name = header::HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| LlmError::Config(format!("invalid header name: {e}")))?;
            let value = header::HeaderValue::from_str(value)
                .map_err(|e| LlmError::Config(format!("invalid header value: {e}")))?;
            headers.insert(name, value);
        }

        Ok(headers)
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    fn provider_id(&self) -> &str {
        "openai"
    }

    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse> {
        let body = self.transformer.transform_request(&request)?;
        let headers = self.build_headers()?;

        let url = format!("{}/chat/completions", self.config.base_url);
        debug!(model = %request.model, %url, "sending chat completion request");

        let response = self
            .http
            .post(&url)
            .headers(headers)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 | 403 => LlmError::Auth(error_text),
                429 => LlmError::RateLimited,
                _ => LlmError::Api {
                    status: status.as_u16(),
                    message: error_text,
                },
            });
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|e| LlmError::Network(e.to_string()))?;

        Ok(self.transformer.parse_response(&data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds_from_config() {
        let client = OpenAiClient::new(ClientConfig::default().with_api_key("sk-test")).unwrap();
        assert_eq!(client.provider_id(), "openai");
        assert_eq!(client.model(), "gpt-4o-mini");
    }

    #[test]
    fn test_headers_include_bearer_auth() {
        let client = OpenAiClient::new(ClientConfig::default().with_api_key("sk-test")).unwrap();
        let headers = client.build_headers().unwrap();
        assert_eq!(
            headers.get(header::AUTHORIZATION).unwrap(),
            "Bearer sk-test"
        );
        assert_eq!(headers.get(header::CONTENT_TYPE).unwrap(), "application/json");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_a_network_error() {
        // Port 9 (discard) on localhost refuses connections.
        let config = ClientConfig::new("http://127.0.0.1:9/v1")
            .with_timeout(std::time::Duration::from_millis(200));
        let client = OpenAiClient::new(config).unwrap();

        let request = ChatRequest::new("gpt-4o-mini");
        let err = client.complete(request).await.unwrap_err();
        assert!(matches!(err, LlmError::Network(_)));
    }
}
