//! Scan analysis pipeline module
//!
//! This module provides a structured approach to chest-scan image analysis,
//! with separate modules for input normalization, suspect-pixel detection,
//! heatmap synthesis, artifact encoding, and pipeline orchestration.

pub mod input;
pub mod detect;
pub mod heatmap;
pub mod output;
pub mod analysis;
pub mod report;
pub mod common;

pub use common::{
    AnalysisError,
    Result,
};

pub use input::{
    ImageLoader,
    StandardImageLoader,
};

pub use detect::{
    AnalysisConfig,
    AnalysisConfigBuilder,
    PreprocessingMode,
    GrayscaleField,
    DetectionOutcome,
};

pub use heatmap::{
    jet,
    synthesize_heatmap,
};

pub use output::{
    RasterEncoder,
    PngRasterEncoder,
    EncodedImage,
    AnalysisOutputs,
};

pub use analysis::{
    ScanPipeline,
    PipelineTimings,
    StepTiming,
    Timer,
};

pub use report::{
    RiskLevel,
    Severity,
    Finding,
    DetailedMetrics,
    StructuredRead,
    ScanRecord,
    VisionAnalyzer,
    AnalyzerConfig,
};
