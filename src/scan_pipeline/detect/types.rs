//! Analysis configuration types

/// Luminance normalization applied before classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreprocessingMode {
    /// Use the luminance field as computed (reference behavior)
    Standard,
    /// Recenter on the field mean, mapping a four-sigma window onto [0,1]
    MeanStd,
    /// Rescale the field so its observed span covers [0,1]
    MinMax,
}

/// Configuration for a scan analysis run
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Detection sensitivity, strictly between 0 and 1.
    /// Larger values raise the effective luminance threshold, so fewer
    /// pixels qualify as suspect.
    pub sensitivity: f32,
    /// Luminance normalization mode applied before classification
    pub preprocessing: PreprocessingMode,
    /// Whether to emit per-stage statistics at debug level
    pub debug: bool,
    /// Side length of the square working canvas, in pixels
    pub canvas_size: usize,
    /// Border width excluded from classification; also the reach of the
    /// sparse neighbor ring
    pub search_radius: usize,
    /// Gaussian sigma used to diffuse the mask into heatmap hotspots
    pub blur_sigma: f32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sensitivity: 0.5,
            preprocessing: PreprocessingMode::Standard,
            debug: false,
            canvas_size: 512,
            search_radius: 3,
            blur_sigma: 7.5,
        }
    }
}

impl AnalysisConfig {
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }
}

/// Builder for AnalysisConfig
#[derive(Default)]
pub struct AnalysisConfigBuilder {
    sensitivity: Option<f32>,
    preprocessing: Option<PreprocessingMode>,
    debug: Option<bool>,
    canvas_size: Option<usize>,
    search_radius: Option<usize>,
    blur_sigma: Option<f32>,
}

impl AnalysisConfigBuilder {
    pub fn sensitivity(mut self, sensitivity: f32) -> Self {
        self.sensitivity = Some(sensitivity);
        self
    }

    pub fn preprocessing(mut self, preprocessing: PreprocessingMode) -> Self {
        self.preprocessing = Some(preprocessing);
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = Some(debug);
        self
    }

    pub fn canvas_size(mut self, canvas_size: usize) -> Self {
        self.canvas_size = Some(canvas_size);
        self
    }

    pub fn search_radius(mut self, search_radius: usize) -> Self {
        self.search_radius = Some(search_radius);
        self
    }

    pub fn blur_sigma(mut self, blur_sigma: f32) -> Self {
        self.blur_sigma = Some(blur_sigma);
        self
    }

    pub fn build(self) -> AnalysisConfig {
        let default = AnalysisConfig::default();
        AnalysisConfig {
            sensitivity: self.sensitivity.unwrap_or(default.sensitivity),
            preprocessing: self.preprocessing.unwrap_or(default.preprocessing),
            debug: self.debug.unwrap_or(default.debug),
            canvas_size: self.canvas_size.unwrap_or(default.canvas_size),
            search_radius: self.search_radius.unwrap_or(default.search_radius),
            blur_sigma: self.blur_sigma.unwrap_or(default.blur_sigma),
        }
    }
}
