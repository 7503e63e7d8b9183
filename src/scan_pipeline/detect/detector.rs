use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::scan_pipeline::detect::grayscale::GrayscaleField;
use crate::scan_pipeline::detect::types::AnalysisConfig;

/// Floor of the effective luminance threshold at sensitivity 0
const BASE_THRESHOLD: f32 = 0.45;

/// How far the sensitivity setting can push the threshold above the floor
const SENSITIVITY_SPAN: f32 = 0.15;

/// Near-saturated pixels are excluded as likely bone or artifact
const SATURATION_CUTOFF: f32 = 0.95;

/// A pixel must outshine its sparse surround by this much to qualify
const CONTRAST_MARGIN: f32 = 0.08;

/// Stride of the sparse neighbor ring
const NEIGHBOR_STRIDE: usize = 3;

/// Overlay alpha at suspect pixels
const OVERLAY_SUSPECT_ALPHA: u8 = 160;

/// Result of one classification pass.
///
/// The mask and overlay are painted in the same pass that counts suspects,
/// so `suspect_count` always matches the number of opaque mask pixels.
#[derive(Debug)]
pub struct DetectionOutcome {
    pub suspect_count: usize,
    /// Row-major classification flags, one per canvas pixel
    pub suspect: Vec<bool>,
    /// Opaque red at suspect pixels, fully transparent elsewhere
    pub mask: RgbaImage,
    /// Semi-transparent red at suspect pixels, opaque grayscale elsewhere
    pub overlay: RgbaImage,
}

/// Effective luminance cutoff for the configured sensitivity.
pub(crate) fn effective_threshold(sensitivity: f32) -> f32 {
    BASE_THRESHOLD + sensitivity * SENSITIVITY_SPAN
}

/// Classifies every interior pixel of the luminance field and paints the
/// mask and overlay rasters in lock-step.
///
/// A pixel is suspect when its luminance clears the effective threshold,
/// stays below the saturation cutoff, and exceeds the average of a sparse
/// neighbor ring by `CONTRAST_MARGIN`. Pixels within `search_radius` of any
/// edge are never classified; they stay transparent in the mask and render
/// as plain grayscale in the overlay.
pub fn detect_suspects(gray: &GrayscaleField, config: &AnalysisConfig) -> DetectionOutcome {
    let size = gray.size();
    let radius = config.search_radius;
    let threshold = effective_threshold(config.sensitivity);

    let mut mask = RgbaImage::from_pixel(size as u32, size as u32, Rgba([0, 0, 0, 0]));
    let mut overlay = RgbaImage::new(size as u32, size as u32);
    let mut suspect = vec![false; size * size];
    let mut suspect_count = 0usize;

    for y in 0..size {
        for x in 0..size {
            let val = gray.get(x, y);

            let interior = x >= radius && x < size - radius && y >= radius && y < size - radius;
            let mut is_suspect = false;

            if interior && val > threshold && val < SATURATION_CUTOFF {
                if val > surround_average(gray, x, y, radius) + CONTRAST_MARGIN {
                    is_suspect = true;
                }
            }

            if is_suspect {
                suspect_count += 1;
                suspect[y * size + x] = true;
                mask.put_pixel(x as u32, y as u32, Rgba([255, 0, 0, 255]));
                overlay.put_pixel(x as u32, y as u32, Rgba([255, 0, 0, OVERLAY_SUSPECT_ALPHA]));
            } else {
                let gray_val = (val * 255.0).floor() as u8;
                overlay.put_pixel(x as u32, y as u32, Rgba([gray_val, gray_val, gray_val, 255]));
            }
        }
    }

    if config.debug {
        debug!(
            threshold,
            suspect_count,
            total = size * size,
            "Suspect classification complete"
        );
    }

    DetectionOutcome {
        suspect_count,
        suspect,
        mask,
        overlay,
    }
}

/// Average luminance of the stride-3 neighbor ring around `(x, y)`,
/// center excluded. The caller guarantees the ring stays in bounds.
fn surround_average(gray: &GrayscaleField, x: usize, y: usize, radius: usize) -> f32 {
    let r = radius as i32;
    let mut sum = 0.0f32;
    let mut count = 0u32;
    for dy in (-r..=r).step_by(NEIGHBOR_STRIDE) {
        for dx in (-r..=r).step_by(NEIGHBOR_STRIDE) {
            if dx == 0 && dy == 0 {
                continue;
            }
            let nx = (x as i32 + dx) as usize;
            let ny = (y as i32 + dy) as usize;
            sum += gray.get(nx, ny);
            count += 1;
        }
    }
    sum / count as f32
}
