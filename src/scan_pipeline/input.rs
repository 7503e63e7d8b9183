//! Input normalization module
//!
//! This module provides format-agnostic image loading with resampling onto
//! the fixed square working canvas.

mod loader;
mod image_loader;

pub use loader::ImageLoader;
pub use image_loader::StandardImageLoader;
