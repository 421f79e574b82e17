//! Convenience functions for one-off image generation.

use crate::config::ImageApiConfig;
use crate::error::Result;
use crate::types::{ImageGenerationRequest, ImageGenerationResult};

use super::image::ImageRequestExecutor;

/// Generate an image with the shared HTTP client.
pub async fn generate_image(request: &ImageGenerationRequest) -> Result<ImageGenerationResult> {
    ImageRequestExecutor::new().generate_image(request).await
}

/// Content + explicit config → image.
pub async fn generate_image_from(
    content: impl Into<String>,
    image_api_config: ImageApiConfig,
) -> Result<ImageGenerationResult> {
    generate_image(&ImageGenerationRequest::new(content, image_api_config)).await
}

/// Content → image, with config resolved by [`ImageApiConfig::load`].
pub async fn imagine(content: impl Into<String>) -> Result<ImageGenerationResult> {
    generate_image_from(content, ImageApiConfig::load()?).await
}
