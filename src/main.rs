use thorascan_rs::logger;
use thorascan_rs::scan_pipeline::{AnalysisConfig, PreprocessingMode, ScanPipeline};

use tracing::{error, info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init();

    info!("Starting thorascan...");

    let input = std::env::args().nth(1).unwrap_or_else(|| "input.png".to_string());

    let config = AnalysisConfig::builder()
        .sensitivity(0.5)
        .preprocessing(PreprocessingMode::Standard)
        .build();
    let pipeline = ScanPipeline::new(config);

    info!("Scan analysis pipeline initialized");
    info!("Sensitivity: {}", pipeline.config().sensitivity);
    info!("Canvas: {0}x{0}", pipeline.config().canvas_size);

    match pipeline.analyze_file(&input) {
        Ok(outputs) => {
            info!(
                "Analysis successful: {:.2}% nodule coverage in {:.1}ms",
                outputs.nodule_percentage, outputs.processing_duration_ms
            );
            outputs.write_to_dir(".")?;
            info!("Artifacts written: original.png, mask.png, overlay.png, heatmap.png");
        }
        Err(e) => error!("Analysis failed: {}", e),
    }

    Ok(())
}
