//! Text-to-image generation over a chat-completions endpoint.

use std::sync::OnceLock;

use async_trait::async_trait;
use regex::Regex;
use tracing::{debug, warn};

use crate::error::{PictoraError, Result};
use crate::i18n::{t, ERROR_IMAGE_API_CONFIG_INCOMPLETE, ERROR_IMAGE_GENERATION_NO_IMAGE};
use crate::provider::http::{bearer_headers, remote_error_message, shared_client};
use crate::provider::{first_message_content, ChatCompletionRequest};
use crate::types::{ImageGenerationRequest, ImageGenerationResult};
use crate::util::url::normalize_chat_completions_url;

/// Instruction placed in front of the caller's content
/// ("summarize the following content into an exquisite picture").
pub const PROMPT_PREFIX: &str = "将以下内容总结成一张精美的图片:\n\n";

static DATA_URI: OnceLock<Regex> = OnceLock::new();

fn data_uri_pattern() -> &'static Regex {
    // The payload runs up to the `)` closing a Markdown image link.
    DATA_URI.get_or_init(|| {
        Regex::new(r"data:image/[^;]+;base64,[^)]+").expect("data URI pattern is valid")
    })
}

/// Anything that can turn text into an image.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate_image(
        &self,
        request: &ImageGenerationRequest,
    ) -> Result<ImageGenerationResult>;
}

/// Sends one chat-completion request per call and pulls the image out of the reply.
///
/// Holds no per-request state; one executor can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct ImageRequestExecutor {
    client: reqwest::Client,
}

impl Default for ImageRequestExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageRequestExecutor {
    /// Executor backed by the process-wide shared client.
    pub fn new() -> Self {
        Self {
            client: shared_client().clone(),
        }
    }

    /// Executor backed by a caller-configured client (timeouts, proxies, ...).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Generate one image from `request.content`.
    ///
    /// Fails before any I/O with [`PictoraError::Configuration`] when the base
    /// URL or API key is missing, or [`PictoraError::InvalidArgument`] when the
    /// key cannot be sent as a header. Afterwards it fails with
    /// [`PictoraError::RemoteApi`] on a non-success status and
    /// [`PictoraError::NoImageFound`] when the reply holds no base64 image.
    pub async fn generate_image(
        &self,
        request: &ImageGenerationRequest,
    ) -> Result<ImageGenerationResult> {
        let config = &request.image_api_config;
        let (url, api_key) = match (
            normalize_chat_completions_url(config.base_url.as_deref()),
            config.api_key(),
        ) {
            (Some(url), Some(key)) => (url, key),
            _ => return Err(PictoraError::Configuration(t(ERROR_IMAGE_API_CONFIG_INCOMPLETE))),
        };

        let headers = bearer_headers(api_key)?;
        let model = config.model_name_or_default();
        let body = ChatCompletionRequest::single_user_message(model, build_prompt(&request.content));

        debug!(model, url = %url, "image generate");

        let resp = self
            .client
            .post(&url)
            .headers(headers)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        debug!(status = status.as_u16(), "image response");
        if !status.is_success() {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(PictoraError::remote_api(
                status.as_u16(),
                remote_error_message(status, &body_text),
            ));
        }

        let bytes = resp.bytes().await?;
        let data: serde_json::Value = serde_json::from_slice(&bytes)?;
        let content = first_message_content(&data);

        match extract_data_uri(&content) {
            Some(base64_data) => Ok(ImageGenerationResult::new(base64_data)),
            None => {
                warn!(model, content_len = content.len(), "image response held no data URI");
                Err(PictoraError::NoImageFound(t(ERROR_IMAGE_GENERATION_NO_IMAGE)))
            }
        }
    }
}

#[async_trait]
impl ImageGenerator for ImageRequestExecutor {
    async fn generate_image(
        &self,
        request: &ImageGenerationRequest,
    ) -> Result<ImageGenerationResult> {
        ImageRequestExecutor::generate_image(self, request).await
    }
}

/// The prompt sent for `content`.
pub fn build_prompt(content: &str) -> String {
    format!("{PROMPT_PREFIX}{content}")
}

/// First `data:image/<subtype>;base64,<payload>` in `text`, without any
/// surrounding Markdown.
pub fn extract_data_uri(text: &str) -> Option<&str> {
    data_uri_pattern().find(text).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_prefixes_content() {
        assert_eq!(
            build_prompt("rust ownership"),
            "将以下内容总结成一张精美的图片:\n\nrust ownership"
        );
    }

    #[test]
    fn extracts_uri_from_markdown_image() {
        let text = "Here it is: ![image](data:image/png;base64,QWJjMTIz) enjoy";
        assert_eq!(extract_data_uri(text), Some("data:image/png;base64,QWJjMTIz"));
    }

    #[test]
    fn extracts_bare_uri_to_end_of_text() {
        assert_eq!(
            extract_data_uri("data:image/webp;base64,AAAA"),
            Some("data:image/webp;base64,AAAA")
        );
    }

    #[test]
    fn first_uri_wins() {
        let text = "![a](data:image/png;base64,FIRST) ![b](data:image/jpeg;base64,SECOND)";
        assert_eq!(extract_data_uri(text), Some("data:image/png;base64,FIRST"));
    }

    #[test]
    fn match_stops_only_at_close_paren() {
        let text = "![x](data:image/png;base64,AB] CD\nEF)";
        assert_eq!(extract_data_uri(text), Some("data:image/png;base64,AB] CD\nEF"));
    }

    #[test]
    fn no_uri_is_none() {
        assert_eq!(extract_data_uri("I cannot draw that."), None);
        assert_eq!(extract_data_uri("data:image/png,AAAA"), None);
        assert_eq!(extract_data_uri("data:image/png;base64,)"), None);
        assert_eq!(extract_data_uri(""), None);
    }

    #[test]
    fn executor_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ImageRequestExecutor>();
    }
}
