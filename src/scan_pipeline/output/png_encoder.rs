use std::io::Cursor;

use image::{ImageFormat, RgbaImage};
use tracing::debug;

use crate::scan_pipeline::common::error::{AnalysisError, Result};
use crate::scan_pipeline::output::encoder::RasterEncoder;
use crate::scan_pipeline::output::types::EncodedImage;

pub struct PngRasterEncoder;

impl RasterEncoder for PngRasterEncoder {
    fn encode(&self, raster: &RgbaImage) -> Result<EncodedImage> {
        debug!("Encoding PNG artifact: {}x{}", raster.width(), raster.height());

        let mut buffer = Cursor::new(Vec::new());
        raster
            .write_to(&mut buffer, ImageFormat::Png)
            .map_err(|e| AnalysisError::EncodeError(e.to_string()))?;

        Ok(EncodedImage {
            bytes: buffer.into_inner(),
            media_type: "image/png",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_round_trips_pixels() {
        let mut raster = RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 0]));
        raster.put_pixel(3, 4, Rgba([255, 0, 0, 160]));

        let encoded = PngRasterEncoder.encode(&raster).unwrap();
        assert_eq!(encoded.media_type, "image/png");

        let decoded = image::load_from_memory(&encoded.bytes).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (8, 8));
        assert_eq!(decoded.get_pixel(3, 4).0, [255, 0, 0, 160]);
        assert_eq!(decoded.get_pixel(0, 0).0, [0, 0, 0, 0]);
    }
}
