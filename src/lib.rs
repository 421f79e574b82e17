//! Pictora: text to image over an OpenAI-compatible chat-completions API.
//!
//! Sends the text as a single prompt, then pulls the first
//! `data:image/...;base64,...` URI out of the assistant's reply.
//!
//! # Quick Start
//!
//! ```no_run
//! use pictora::prelude::*;
//!
//! # async fn example() -> pictora::error::Result<()> {
//! let config = ImageApiConfig::new("https://api.example.com/v1", "sk-...");
//! let request = ImageGenerationRequest::new("A short history of the printing press", config);
//! let image = ImageRequestExecutor::new().generate_image(&request).await?;
//! println!("{}", image.base64_data);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod generation;
pub mod i18n;
pub mod prelude;
pub mod provider;
pub mod types;
pub mod util;

#[cfg(feature = "cli")]
pub mod cli;
