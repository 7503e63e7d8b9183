//! Artifact encoding module
//!
//! This module provides encoding of the four output rasters into portable
//! image representations, plus the record type returned to the caller.

mod encoder;
mod png_encoder;
pub mod types;

pub use encoder::RasterEncoder;
pub use png_encoder::PngRasterEncoder;
pub use types::{AnalysisOutputs, EncodedImage};
