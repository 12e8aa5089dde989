//! Conversion between internal chat types and the OpenAI wire format.

use serde_json::{json, Value};
use wander_core::chat::{ChatRequest, ChatResponse, ChatUsage, FinishReason, PromptMessage, Role};

use crate::error::TransformError;

/// OpenAI-compatible schema transformer.
/// Works with the OpenAI API and compatible endpoints.
#[derive(Debug, Default)]
pub struct OpenAiTransformer;

impl OpenAiTransformer {
    /// Create a new transformer
    pub fn new() -> Self {
        Self
    }

    /// Build the request body
    pub fn transform_request(&self, request: &ChatRequest) -> Result<Value, TransformError> {
        let messages: Vec<Value> = request
            .messages
            .iter()
            .map(|m| {
                json!({
                    "role": m.role.to_string(),
                    "content": m.content,
                })
            })
            .collect();

        let mut body = json!({
            "model": request.model,
            "messages": messages,
        });

        if let Some(temp) = request.options.temperature {
            body["temperature"] = json!(temp);
        }
        if let Some(max_tokens) = request.options.max_tokens {
            body["max_tokens"] = json!(max_tokens);
        }
        if let Some(top_p) = request.options.top_p {
            body["top_p"] = json!(top_p);
        }

        Ok(body)
    }

    /// Parse a complete (non-streaming) response body.
    ///
    /// The reply text is `choices[0].message.content`.
    pub fn parse_response(&self, data: &Value) -> Result<ChatResponse, TransformError> {
        let id = data["id"].as_str().unwrap_or_default().to_string();
        let model = data["model"].as_str().unwrap_or_default().to_string();

        let choice = data["choices"]
            .get(0)
            .ok_or_else(|| TransformError::MissingField("choices".to_string()))?;

        let content = choice["message"]["content"]
            .as_str()
            .ok_or_else(|| TransformError::MissingField("choices[0].message.content".to_string()))?
            .to_string();

        let role = match choice["message"]["role"].as_str() {
            Some("system") => Role::System,
            Some("user") => Role::User,
            _ => Role::Assistant,
        };

        let usage_data = data.get("usage");
        let usage = ChatUsage {
            input_tokens: usage_data
                .and_then(|u| u["prompt_tokens"].as_u64())
                .unwrap_or(0) as u32,
            output_tokens: usage_data
                .and_then(|u| u["completion_tokens"].as_u64())
                .unwrap_or(0) as u32,
            total_tokens: usage_data
                .and_then(|u| u["total_tokens"].as_u64())
                .unwrap_or(0) as u32,
        };

        let finish_reason = match choice["finish_reason"].as_str() {
            Some("length") => FinishReason::Length,
            Some("content_filter") => FinishReason::ContentFilter,
            _ => FinishReason::Stop,
        };

        Ok(ChatResponse {
            id,
            model,
            message: PromptMessage { role, content },
            usage,
            finish_reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_request() {
        let transformer = OpenAiTransformer::new();
        let request = ChatRequest::new("gpt-4o-mini")
            .with_message(PromptMessage::system("You are a travel assistant"))
            .with_message(PromptMessage::user("Hello"))
            .temperature(0.7)
            .max_tokens(500);

        let body = transformer.transform_request(&request).unwrap();
        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["messages"].as_array().unwrap().len(), 2);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["max_tokens"], 500);

        let temp = body["temperature"].as_f64().unwrap();
        assert!((temp - 0.7).abs() < 0.001);
    }

    #[test]
    fn test_parse_response() {
        let transformer = OpenAiTransformer::new();
        let data = serde_json::json!({
            "id": "chatcmpl-123",
            "model": "gpt-4o-mini",
            "choices": [{
                "message": { "role": "assistant", "content": "Try Goa Beach Bliss." },
                "finish_reason": "stop"
            }],
            "usage": { "prompt_tokens": 120, "completion_tokens": 15, "total_tokens": 135 }
        });

        let response = transformer.parse_response(&data).unwrap();
        assert_eq!(response.id, "chatcmpl-123");
        assert_eq!(response.text(), "Try Goa Beach Bliss.");
        assert_eq!(response.usage.total_tokens, 135);
        assert_eq!(response.finish_reason, FinishReason::Stop);
    }

    #[test]
    fn test_parse_response_missing_choices() {
        let transformer = OpenAiTransformer::new();
        let data = serde_json::json!({ "id": "x", "choices": [] });

        let err = transformer.parse_response(&data).unwrap_err();
        assert!(matches!(err, TransformError::MissingField(_)));
    }

    #[test]
    fn test_parse_response_null_content() {
        let transformer = OpenAiTransformer::new();
        let data = serde_json::json!({
            "choices": [{ "message": { "role": "assistant", "content": null } }]
        });

        let err = transformer.parse_response(&data).unwrap_err();
        assert!(matches!(err, TransformError::MissingField(_)));
    }
}
