use image::RgbaImage;

use crate::scan_pipeline::detect::types::PreprocessingMode;

/// Guard against division by a vanishing spread
const SPREAD_EPSILON: f32 = 1e-6;

/// Normalized luminance field over the working canvas.
///
/// One value per canvas pixel, in [0,1], row-major. Derived once per run and
/// consumed by the classifier; never handed back to callers.
#[derive(Debug, Clone)]
pub struct GrayscaleField {
    size: usize,
    values: Vec<f32>,
}

impl GrayscaleField {
    /// Computes ITU-R 601 luma per pixel: `(0.299r + 0.587g + 0.114b) / 255`.
    pub fn from_raster(raster: &RgbaImage) -> Self {
        let size = raster.width() as usize;
        let values = raster
            .pixels()
            .map(|p| {
                let [r, g, b, _] = p.0;
                let luma = (0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32) / 255.0;
                luma.clamp(0.0, 1.0)
            })
            .collect();
        Self { size, values }
    }

    /// Builds a field directly from luminance samples, clamping each to [0,1].
    /// `values` must hold `size * size` samples in row-major order.
    pub fn from_luminance(size: usize, values: Vec<f32>) -> Self {
        assert_eq!(values.len(), size * size);
        let values = values.into_iter().map(|v| v.clamp(0.0, 1.0)).collect();
        Self { size, values }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.values[y * self.size + x]
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn apply_preprocessing(&mut self, mode: PreprocessingMode) {
        match mode {
            PreprocessingMode::Standard => {}
            PreprocessingMode::MeanStd => self.normalize_mean_std(),
            PreprocessingMode::MinMax => self.normalize_min_max(),
        }
    }

    fn normalize_mean_std(&mut self) {
        let n = self.values.len() as f32;
        let mean = self.values.iter().sum::<f32>() / n;
        let variance = self.values.iter().map(|v| (v - mean).powi(2)).sum::<f32>() / n;
        let std = variance.sqrt();
        if std < SPREAD_EPSILON {
            return;
        }
        for v in &mut self.values {
            *v = (0.5 + (*v - mean) / (4.0 * std)).clamp(0.0, 1.0);
        }
    }

    fn normalize_min_max(&mut self) {
        let min = self.values.iter().copied().fold(f32::INFINITY, f32::min);
        let max = self.values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        let span = max - min;
        if span < SPREAD_EPSILON {
            return;
        }
        for v in &mut self.values {
            *v = ((*v - min) / span).clamp(0.0, 1.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_luminance_weights() {
        let mut raster = RgbaImage::new(2, 2);
        raster.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        raster.put_pixel(1, 0, Rgba([0, 255, 0, 255]));
        raster.put_pixel(0, 1, Rgba([0, 0, 255, 255]));
        raster.put_pixel(1, 1, Rgba([255, 255, 255, 255]));

        let field = GrayscaleField::from_raster(&raster);
        assert!((field.get(0, 0) - 0.299).abs() < 1e-5);
        assert!((field.get(1, 0) - 0.587).abs() < 1e-5);
        assert!((field.get(0, 1) - 0.114).abs() < 1e-5);
        assert!((field.get(1, 1) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_from_luminance_clamps() {
        let field = GrayscaleField::from_luminance(2, vec![-0.5, 0.25, 1.5, 0.75]);
        assert_eq!(field.get(0, 0), 0.0);
        assert_eq!(field.get(0, 1), 1.0);
    }

    #[test]
    fn test_standard_mode_is_identity() {
        let mut field = GrayscaleField::from_luminance(2, vec![0.1, 0.4, 0.6, 0.9]);
        let before = field.values().to_vec();
        field.apply_preprocessing(PreprocessingMode::Standard);
        assert_eq!(field.values(), &before[..]);
    }

    #[test]
    fn test_min_max_spans_unit_interval() {
        let mut field = GrayscaleField::from_luminance(2, vec![0.2, 0.4, 0.6, 0.8]);
        field.apply_preprocessing(PreprocessingMode::MinMax);
        let values = field.values();
        assert!((values[0] - 0.0).abs() < 1e-5);
        assert!((values[3] - 1.0).abs() < 1e-5);
        assert!((values[1] - 1.0 / 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_flat_field_unchanged_by_normalization() {
        let mut mean_std = GrayscaleField::from_luminance(2, vec![0.5; 4]);
        mean_std.apply_preprocessing(PreprocessingMode::MeanStd);
        assert_eq!(mean_std.values(), &[0.5; 4]);

        let mut min_max = GrayscaleField::from_luminance(2, vec![0.5; 4]);
        min_max.apply_preprocessing(PreprocessingMode::MinMax);
        assert_eq!(min_max.values(), &[0.5; 4]);
    }

    #[test]
    fn test_mean_std_recenters_on_half() {
        let mut field = GrayscaleField::from_luminance(2, vec![0.1, 0.3, 0.5, 0.7]);
        field.apply_preprocessing(PreprocessingMode::MeanStd);
        let mean: f32 = field.values().iter().sum::<f32>() / 4.0;
        assert!((mean - 0.5).abs() < 1e-5);
        for v in field.values() {
            assert!((0.0..=1.0).contains(v));
        }
    }
}
