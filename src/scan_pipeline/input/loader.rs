use image::RgbaImage;

use crate::scan_pipeline::common::error::Result;

pub trait ImageLoader {
    fn load(&self, data: &[u8], media_type: &str, canvas_size: u32) -> Result<RgbaImage>;
}
