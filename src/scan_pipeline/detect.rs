//! Suspect-pixel detection module
//!
//! This module holds the analysis configuration, the normalized luminance
//! field, and the local-contrast classifier that marks candidate nodule
//! pixels and paints the mask and overlay rasters.

mod grayscale;
mod detector;
pub mod types;

pub use grayscale::GrayscaleField;
pub use detector::{detect_suspects, DetectionOutcome};
pub use types::{AnalysisConfig, AnalysisConfigBuilder, PreprocessingMode};
