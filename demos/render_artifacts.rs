use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use thorascan_rs::scan_pipeline::{AnalysisConfig, ScanPipeline};

fn main() -> anyhow::Result<()> {
    // synthetic chest-like field: soft gradient with two bright opacities
    let size = 512u32;
    let mut raster = RgbaImage::new(size, size);
    for (x, y, pixel) in raster.enumerate_pixels_mut() {
        let cx = x as f32 - 256.0;
        let cy = y as f32 - 256.0;
        let falloff = 1.0 - ((cx * cx + cy * cy).sqrt() / 380.0).min(1.0);
        let shade = (40.0 + 90.0 * falloff) as u8;
        *pixel = Rgba([shade, shade, shade, 255]);
    }
    for (x0, y0, side) in [(180u32, 140u32, 26u32), (320, 330, 18)] {
        for y in y0..y0 + side {
            for x in x0..x0 + side {
                raster.put_pixel(x, y, Rgba([215, 215, 215, 255]));
            }
        }
    }
    let mut buffer = Cursor::new(Vec::new());
    raster.write_to(&mut buffer, ImageFormat::Png)?;

    let config = AnalysisConfig::builder().sensitivity(0.3).build();
    let pipeline = ScanPipeline::new(config);
    let (outputs, timings) = pipeline.analyze_with_timings(&buffer.into_inner(), "image/png")?;

    println!("Canvas: {0}x{0} pixels", pipeline.config().canvas_size);
    println!("Nodule coverage: {:.3}%", outputs.nodule_percentage);
    println!("Wall clock: {:.1}ms", outputs.processing_duration_ms);

    println!("\nStage timings:");
    for step in timings.steps() {
        println!("  {:<20} {:>9.3}ms", step.name, step.duration.as_secs_f64() * 1000.0);
    }

    println!("\nArtifact sizes:");
    for (name, artifact) in [
        ("original", &outputs.original),
        ("mask", &outputs.mask),
        ("overlay", &outputs.overlay),
        ("heatmap", &outputs.heatmap),
    ] {
        println!("  {:<10} {:>8} bytes ({})", name, artifact.bytes.len(), artifact.media_type);
    }

    let heatmap = image::load_from_memory(&outputs.heatmap.bytes)?.to_rgba8();
    let visible = heatmap.pixels().filter(|p| p.0[3] > 0).count();
    let total = (size * size) as usize;
    println!(
        "\nHeatmap coverage: {} of {} pixels ({:.2}%)",
        visible,
        total,
        100.0 * visible as f64 / total as f64
    );

    let out_dir = std::path::Path::new("artifacts");
    std::fs::create_dir_all(out_dir)?;
    outputs.write_to_dir(out_dir)?;
    println!("Artifacts written under {}/", out_dir.display());

    Ok(())
}
