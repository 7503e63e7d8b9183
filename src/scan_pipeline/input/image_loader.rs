//! Image loader implementation using the image library.
//!
//! This module provides support for reading the common bitmap formats a user
//! can upload (PNG, JPEG, GIF, BMP, WebP, ...) using the image library. It
//! validates the declared media type, decodes the bytes, and stretches the
//! result onto the square working canvas all later stages operate on.

use image::RgbaImage;
use image::imageops::FilterType;
use tracing::debug;

use crate::scan_pipeline::common::error::{AnalysisError, Result};
use crate::scan_pipeline::input::loader::ImageLoader;

/// Image loader that uses the image library for decoding.
///
/// Format detection is content-based, so any container the image library
/// recognizes is accepted as long as the caller declared an `image/*` media
/// type for it.
pub struct StandardImageLoader;

impl ImageLoader for StandardImageLoader {
    /// Decodes uploaded image bytes and resamples them onto the canvas.
    ///
    /// This method:
    /// 1. Rejects empty payloads and non-image media types
    /// 2. Decodes the bytes into a bitmap
    /// 3. Stretches the bitmap (aspect ratio is not preserved) to
    ///    `canvas_size` x `canvas_size` RGBA
    ///
    /// # Arguments
    ///
    /// * `data` - Raw bytes of the uploaded image file
    /// * `media_type` - Media type declared by the caller, e.g. `image/png`
    /// * `canvas_size` - Side length of the square working canvas
    ///
    /// # Returns
    ///
    /// * `Ok(RgbaImage)` - Resampled RGBA raster of the requested size
    /// * `Err(AnalysisError::InvalidInput)` - Missing payload or non-image media type
    /// * `Err(AnalysisError::DecodeError)` - Bytes could not be decoded
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use thorascan_rs::scan_pipeline::{ImageLoader, StandardImageLoader};
    ///
    /// let loader = StandardImageLoader;
    /// let bytes = std::fs::read("scan.png").unwrap();
    /// let raster = loader.load(&bytes, "image/png", 512).unwrap();
    /// assert_eq!(raster.dimensions(), (512, 512));
    /// ```
    fn load(&self, data: &[u8], media_type: &str, canvas_size: u32) -> Result<RgbaImage> {
        if data.is_empty() {
            return Err(AnalysisError::InvalidInput("no image supplied".to_string()));
        }
        if !media_type.starts_with("image/") {
            return Err(AnalysisError::InvalidInput(format!(
                "media type '{}' does not declare an image",
                media_type
            )));
        }

        debug!("Decoding uploaded image, {} bytes", data.len());

        let decoded = image::load_from_memory(data)
            .map_err(|e| AnalysisError::DecodeError(e.to_string()))?;

        debug!("Decoded image: {}x{}", decoded.width(), decoded.height());

        // Stretch resample, matching how the review canvas draws the upload
        let normalized = decoded
            .resize_exact(canvas_size, canvas_size, FilterType::Triangle)
            .to_rgba8();

        Ok(normalized)
    }
}
