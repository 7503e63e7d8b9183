use image::{GrayImage, Luma, Rgba, RgbaImage};
use imageproc::filter::gaussian_blur_f32;

use crate::scan_pipeline::heatmap::colormap::jet;

/// Diffused intensities at or below this floor stay fully transparent
const INTENSITY_FLOOR: f32 = 0.1;

/// Opacity ramp: alpha saturates well before the intensity reaches 1
const ALPHA_GAIN: f32 = 450.0;

/// Diffuses the suspect map into smooth hotspots and grades them through
/// the jet colormap.
///
/// The classification flags are rendered as an 8-bit intensity plane (255 at
/// suspect pixels), blurred with the given Gaussian sigma, and normalized
/// back to [0,1]. Pixels whose diffused intensity clears the floor get a jet
/// color and an alpha of `min(255, intensity * 450)`; the rest stay fully
/// transparent.
pub fn synthesize_heatmap(suspect: &[bool], size: usize, sigma: f32) -> RgbaImage {
    let mut plane = GrayImage::new(size as u32, size as u32);
    for (i, &flagged) in suspect.iter().enumerate() {
        if flagged {
            plane.put_pixel((i % size) as u32, (i / size) as u32, Luma([255]));
        }
    }

    let diffused = gaussian_blur_f32(&plane, sigma);

    let mut heatmap = RgbaImage::from_pixel(size as u32, size as u32, Rgba([0, 0, 0, 0]));
    for (x, y, pixel) in diffused.enumerate_pixels() {
        let intensity = pixel.0[0] as f32 / 255.0;
        if intensity > INTENSITY_FLOOR {
            let [r, g, b] = jet(intensity);
            let alpha = (intensity * ALPHA_GAIN).min(255.0) as u8;
            heatmap.put_pixel(x, y, Rgba([r, g, b, alpha]));
        }
    }
    heatmap
}
