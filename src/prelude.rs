//! Convenience re-exports for common use.

pub use crate::config::ImageApiConfig;
pub use crate::error::{PictoraError, Result};
pub use crate::generation::{ImageGenerator, ImageRequestExecutor};
pub use crate::types::{ImageGenerationRequest, ImageGenerationResult};
