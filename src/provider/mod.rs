//! HTTP transport for the image endpoint.

pub mod chat;
pub mod http;

pub use chat::{first_message_content, ChatCompletionRequest, ChatMessage};
