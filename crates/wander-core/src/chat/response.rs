use crate::chat::request::PromptMessage;

/// Why the model stopped generating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Stop,
    Length,
    ContentFilter,
}

/// Chat completion response
#[derive(Debug, Clone)]
pub struct ChatResponse {
    pub id: String,
    pub model: String,
    pub message: PromptMessage,
    pub usage: ChatUsage,
    pub finish_reason: FinishReason,
}

impl ChatResponse {
    /// Create a new response
    pub fn new(id: impl Into<String>, model: impl Into<String>, message: PromptMessage) -> Self {
        Self {
            id: id.into(),
            model: model.into(),
            message,
            usage: ChatUsage::default(),
            finish_reason: FinishReason::Stop,
        }
    }

    /// Set usage
    pub fn with_usage(mut self, usage: ChatUsage) -> Self {
        self.usage = usage;
        self
    }

    /// Set finish reason
    pub fn with_finish_reason(mut self, reason: FinishReason) -> Self {
        self.finish_reason = reason;
        self
    }

    /// The reply text
    pub fn text(&self) -> &str {
        &self.message.content
    }
}

/// Token usage information
#[derive(Debug, Clone, Default)]
pub struct ChatUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub total_tokens: u32,
}

impl ChatUsage {
    /// Create new usage info
    pub fn new(input: u32, output: u32) -> Self {
        Self {
            input_tokens: input,
            output_tokens: output,
            total_tokens: input + output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_response() {
        let message = PromptMessage::assistant("Hello!");
        let response = ChatResponse::new("resp_123", "gpt-4o-mini", message);

        assert_eq!(response.id, "resp_123");
        assert_eq!(response.text(), "Hello!");
        assert_eq!(response.finish_reason, FinishReason::Stop);
    }

    #[test]
    fn test_chat_usage() {
        let usage = ChatUsage::new(10, 20);
        assert_eq!(usage.total_tokens, 30);
    }
}
