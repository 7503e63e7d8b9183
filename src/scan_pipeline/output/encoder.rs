use image::RgbaImage;

use crate::scan_pipeline::common::error::Result;
use crate::scan_pipeline::output::types::EncodedImage;

pub trait RasterEncoder {
    fn encode(&self, raster: &RgbaImage) -> Result<EncodedImage>;
}
