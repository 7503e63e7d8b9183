//! Output record types

use std::path::Path;

use crate::scan_pipeline::common::error::{AnalysisError, Result};

/// An encoded, directly-displayable image artifact
#[derive(Debug, Clone)]
pub struct EncodedImage {
    /// Encoded bytes of the artifact
    pub bytes: Vec<u8>,
    /// Media type of the encoding, e.g. `image/png`
    pub media_type: &'static str,
}

/// Everything one analysis run produces.
///
/// The four artifacts share the canvas dimensions of the run. A run either
/// yields a fully populated record or fails; there are no partial results.
#[derive(Debug, Clone)]
pub struct AnalysisOutputs {
    /// The upload, resampled onto the working canvas
    pub original: EncodedImage,
    /// Binary suspect stencil: opaque red / fully transparent
    pub mask: EncodedImage,
    /// Grayscale composite with semi-transparent suspect highlighting
    pub overlay: EncodedImage,
    /// Blurred, jet-graded suspect density visualization
    pub heatmap: EncodedImage,
    /// `100 x suspect_count / total_pixels`, from the pass that painted the mask
    pub nodule_percentage: f64,
    /// Wall-clock time from pipeline entry to output assembly
    pub processing_duration_ms: f64,
}

impl AnalysisOutputs {
    /// Persists the four artifacts as `original.png`, `mask.png`,
    /// `overlay.png`, and `heatmap.png` under `dir`.
    pub fn write_to_dir<P: AsRef<Path>>(&self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        let artifacts = [
            ("original.png", &self.original),
            ("mask.png", &self.mask),
            ("overlay.png", &self.overlay),
            ("heatmap.png", &self.heatmap),
        ];
        for (name, artifact) in artifacts {
            let path = dir.join(name);
            std::fs::write(&path, &artifact.bytes).map_err(|e| {
                AnalysisError::OutputWriteError(format!("{}: {}", path.display(), e))
            })?;
        }
        Ok(())
    }
}
