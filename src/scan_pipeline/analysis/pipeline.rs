use std::path::Path;
use std::time::Instant;

use tracing::{debug, info, instrument};

use crate::scan_pipeline::{
    common::error::{AnalysisError, Result},
    detect::{AnalysisConfig, GrayscaleField, detect_suspects},
    heatmap::synthesize_heatmap,
    input::{ImageLoader, StandardImageLoader},
    output::{AnalysisOutputs, PngRasterEncoder, RasterEncoder},
};

use super::timing::{PipelineTimings, Timer};

pub struct ScanPipeline<L: ImageLoader, E: RasterEncoder> {
    loader: L,
    encoder: E,
    config: AnalysisConfig,
}

impl ScanPipeline<StandardImageLoader, PngRasterEncoder> {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            loader: StandardImageLoader,
            encoder: PngRasterEncoder,
            config,
        }
    }
}

impl<L: ImageLoader, E: RasterEncoder> ScanPipeline<L, E> {
    pub fn with_custom(loader: L, encoder: E, config: AnalysisConfig) -> Self {
        Self {
            loader,
            encoder,
            config,
        }
    }

    fn validate_config(&self) -> Result<()> {
        let config = &self.config;

        if !config.sensitivity.is_finite()
            || config.sensitivity <= 0.0
            || config.sensitivity >= 1.0
        {
            return Err(AnalysisError::InvalidConfig(format!(
                "sensitivity must lie strictly between 0 and 1, got {}",
                config.sensitivity
            )));
        }

        if !(config.blur_sigma > 0.0) {
            return Err(AnalysisError::InvalidConfig(format!(
                "blur sigma must be positive, got {}",
                config.blur_sigma
            )));
        }

        if config.canvas_size == 0 || config.canvas_size <= 2 * config.search_radius {
            return Err(AnalysisError::SurfaceInit(format!(
                "canvas of {} px leaves no interior for search radius {}",
                config.canvas_size, config.search_radius
            )));
        }

        Ok(())
    }

    /// Runs the full analysis: normalize, grayscale, classify, synthesize,
    /// encode. Returns the output record, or the first stage failure.
    #[instrument(skip(self, input_data, media_type), fields(input_size = input_data.len()))]
    pub fn analyze(&self, input_data: &[u8], media_type: &str) -> Result<AnalysisOutputs> {
        let (outputs, timings) = self.analyze_with_timings(input_data, media_type)?;
        if self.config.debug {
            timings.log_summary();
        }
        Ok(outputs)
    }

    /// Like [`analyze`](Self::analyze), but also reports per-stage durations.
    pub fn analyze_with_timings(
        &self,
        input_data: &[u8],
        media_type: &str,
    ) -> Result<(AnalysisOutputs, PipelineTimings)> {
        let started = Instant::now();
        let mut timings = PipelineTimings::new();
        info!("Starting scan analysis");

        self.validate_config()?;
        let canvas_size = self.config.canvas_size;

        let timer = Timer::start("normalize_input");
        let raster = {
            let _span = tracing::info_span!("normalize_input").entered();
            self.loader
                .load(input_data, media_type, canvas_size as u32)?
        };
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        let timer = Timer::start("grayscale");
        let gray = {
            let _span = tracing::info_span!("grayscale").entered();
            let mut field = GrayscaleField::from_raster(&raster);
            field.apply_preprocessing(self.config.preprocessing);
            field
        };
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        let timer = Timer::start("detect_suspects");
        let detection = {
            let _span = tracing::info_span!("detect_suspects").entered();
            detect_suspects(&gray, &self.config)
        };
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        let timer = Timer::start("synthesize_heatmap");
        let heatmap_raster = {
            let _span = tracing::info_span!("synthesize_heatmap").entered();
            synthesize_heatmap(&detection.suspect, canvas_size, self.config.blur_sigma)
        };
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        let timer = Timer::start("encode_artifacts");
        let (original, mask, overlay, heatmap) = {
            let _span = tracing::info_span!("encode_artifacts").entered();
            (
                self.encoder.encode(&raster)?,
                self.encoder.encode(&detection.mask)?,
                self.encoder.encode(&detection.overlay)?,
                self.encoder.encode(&heatmap_raster)?,
            )
        };
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        let total_pixels = canvas_size * canvas_size;
        let nodule_percentage = 100.0 * detection.suspect_count as f64 / total_pixels as f64;

        if self.config.debug {
            debug!(
                suspect_count = detection.suspect_count,
                total_pixels,
                "Coverage computed"
            );
        }

        info!(canvas_size, nodule_percentage, "Analysis complete");

        let outputs = AnalysisOutputs {
            original,
            mask,
            overlay,
            heatmap,
            nodule_percentage,
            processing_duration_ms: started.elapsed().as_secs_f64() * 1000.0,
        };
        Ok((outputs, timings))
    }

    /// Reads an image from disk and analyzes it. The media type is inferred
    /// from the file extension.
    #[instrument(skip(self, input_path))]
    pub fn analyze_file<P: AsRef<Path>>(&self, input_path: P) -> Result<AnalysisOutputs> {
        let input_path = input_path.as_ref();

        info!(input = %input_path.display(), "Analyzing file");

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                AnalysisError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        self.analyze(&input_data, media_type_for_path(input_path))
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: AnalysisConfig) {
        self.config = config;
    }
}

/// Declared media type for a file path, judged by extension alone.
/// Unknown extensions map to an opaque type the loader will reject.
fn media_type_for_path(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        Some("webp") => "image/webp",
        Some("tif") | Some("tiff") => "image/tiff",
        _ => "application/octet-stream",
    }
}
