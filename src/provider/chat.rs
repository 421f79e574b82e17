//! Chat-completions wire format.
//!
//! The image endpoint speaks the OpenAI chat-completions shape: the prompt goes
//! out as a single user message and the image comes back inside the assistant
//! message text.

use serde::Serialize;
use serde_json::Value;

/// Request body for a non-streaming chat completion.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub stream: bool,
    pub messages: Vec<ChatMessage>,
}

impl ChatCompletionRequest {
    /// A non-streaming request holding one user message.
    pub fn single_user_message(model: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            stream: false,
            messages: vec![ChatMessage::user(content)],
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Text of `choices[0].message.content`.
///
/// Missing fields or unexpected types at any level yield an empty string.
/// Content given as an array of parts is flattened: each part's `text` and
/// `image_url.url` are joined with newlines.
pub fn first_message_content(response: &Value) -> String {
    match response.pointer("/choices/0/message/content") {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Array(parts)) => parts
            .iter()
            .filter_map(|part| {
                part.get("text")
                    .and_then(Value::as_str)
                    .or_else(|| part.pointer("/image_url/url").and_then(Value::as_str))
            })
            .collect::<Vec<_>>()
            .join("\n"),
        _ => String::new(),
    }
}
