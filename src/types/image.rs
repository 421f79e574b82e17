//! Image generation request and result types.

use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::config::ImageApiConfig;
use crate::error::{PictoraError, Result};

/// Text to turn into an image plus the endpoint to ask.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageGenerationRequest {
    pub content: String,
    pub image_api_config: ImageApiConfig,
}

impl ImageGenerationRequest {
    pub fn new(content: impl Into<String>, image_api_config: ImageApiConfig) -> Self {
        Self {
            content: content.into(),
            image_api_config,
        }
    }
}

/// A generated image as a `data:image/<subtype>;base64,<payload>` URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageGenerationResult {
    pub base64_data: String,
}

impl ImageGenerationResult {
    pub fn new(base64_data: impl Into<String>) -> Self {
        Self {
            base64_data: base64_data.into(),
        }
    }

    /// `image/<subtype>` taken from the URI header.
    pub fn mime_type(&self) -> Option<&str> {
        let header = self.base64_data.strip_prefix("data:")?;
        let (mime, _) = header.split_once(';')?;
        Some(mime)
    }

    /// Everything after `;base64,`.
    pub fn payload(&self) -> Option<&str> {
        self.base64_data
            .split_once(";base64,")
            .map(|(_, payload)| payload)
    }

    /// Decode the payload into raw image bytes.
    pub fn decode(&self) -> Result<Vec<u8>> {
        let payload = self.payload().ok_or_else(|| {
            PictoraError::InvalidArgument("image data is not a base64 data URI".to_string())
        })?;
        base64::engine::general_purpose::STANDARD
            .decode(payload.trim())
            .map_err(|err| PictoraError::InvalidArgument(format!("invalid base64 payload: {err}")))
    }
}
