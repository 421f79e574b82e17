//! Image generation.

pub mod convenience;
pub mod image;

pub use convenience::{generate_image, generate_image_from, imagine};
pub use image::{build_prompt, extract_data_uri, ImageGenerator, ImageRequestExecutor};
