//! Core types for Pictora.

pub mod image;

pub use image::*;
