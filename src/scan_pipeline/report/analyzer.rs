use crate::scan_pipeline::common::error::{AnalysisError, Result};
use crate::scan_pipeline::output::types::EncodedImage;
use crate::scan_pipeline::report::types::StructuredRead;

/// Default remote vision model
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Connection settings for a remote analyzer implementation.
///
/// The access key is injected here at construction time; nothing in the
/// pipeline reads it from ambient process state.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub api_key: String,
    pub model: String,
}

impl AnalyzerConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// Seam for the remote vision service.
///
/// Implementations submit the encoded original artifact and return the
/// structured clinical read. Composed by the caller strictly after the
/// pipeline has succeeded; transport concerns (timeouts, retries) belong to
/// the implementation, never to the pipeline.
pub trait VisionAnalyzer {
    fn analyze(&self, image: &EncodedImage) -> Result<StructuredRead>;
}

/// Validates a raw service response against the read schema.
pub fn parse_structured_read(payload: &str) -> Result<StructuredRead> {
    serde_json::from_str(payload).map_err(|e| {
        AnalysisError::RemoteAnalysis(format!("response did not match the read schema: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan_pipeline::report::types::{RiskLevel, ScanRecord, Severity, StructuredRead};
    use crate::scan_pipeline::{AnalysisConfig, ScanPipeline};

    const VALID_RESPONSE: &str = r#"{
        "riskLevel": "Moderate",
        "confidenceScore": 0.82,
        "summary": "Single well-defined opacity in the right upper zone.",
        "findings": [
            {
                "location": "right upper lobe",
                "description": "8mm rounded opacity with smooth margins",
                "severity": "Medium"
            }
        ],
        "recommendations": ["Follow-up CT in 3 months"],
        "detailedMetrics": {
            "spiculation": 2.0,
            "density": 6.5,
            "marginDefinition": 8.0,
            "calcification": 1.0,
            "sizeScore": 3.5
        }
    }"#;

    struct MockAnalyzer {
        config: AnalyzerConfig,
    }

    impl VisionAnalyzer for MockAnalyzer {
        fn analyze(&self, _image: &EncodedImage) -> Result<StructuredRead> {
            assert!(!self.config.api_key.is_empty());
            parse_structured_read(VALID_RESPONSE)
        }
    }

    #[test]
    fn test_parses_schema_conformant_response() {
        let read = parse_structured_read(VALID_RESPONSE).unwrap();
        assert_eq!(read.risk_level, RiskLevel::Moderate);
        assert_eq!(read.confidence_score, 0.82);
        assert_eq!(read.findings.len(), 1);
        assert_eq!(read.findings[0].severity, Severity::Medium);
        assert_eq!(read.detailed_metrics.margin_definition, 8.0);
    }

    #[test]
    fn test_serializes_with_wire_names() {
        let read = parse_structured_read(VALID_RESPONSE).unwrap();
        let wire = serde_json::to_string(&read).unwrap();
        assert!(wire.contains("\"riskLevel\""));
        assert!(wire.contains("\"confidenceScore\""));
        assert!(wire.contains("\"detailedMetrics\""));
        assert!(wire.contains("\"marginDefinition\""));
    }

    #[test]
    fn test_rejects_out_of_vocabulary_risk_level() {
        let payload = VALID_RESPONSE.replace("\"Moderate\"", "\"Severe\"");
        let result = parse_structured_read(&payload);
        assert!(matches!(
            result.unwrap_err(),
            AnalysisError::RemoteAnalysis(_)
        ));
    }

    #[test]
    fn test_rejects_missing_fields() {
        let result = parse_structured_read(r#"{"riskLevel": "Low"}"#);
        assert!(matches!(
            result.unwrap_err(),
            AnalysisError::RemoteAnalysis(_)
        ));
    }

    #[test]
    fn test_record_composes_pipeline_outputs_with_remote_read() {
        let config = AnalysisConfig::builder().canvas_size(32).build();
        let pipeline = ScanPipeline::new(config);

        let raster = image::RgbaImage::from_pixel(8, 8, image::Rgba([90, 90, 90, 255]));
        let mut buffer = std::io::Cursor::new(Vec::new());
        raster.write_to(&mut buffer, image::ImageFormat::Png).unwrap();

        let outputs = pipeline.analyze(&buffer.into_inner(), "image/png").unwrap();

        let analyzer = MockAnalyzer {
            config: AnalyzerConfig::new("test-key"),
        };
        let read = analyzer.analyze(&outputs.original).unwrap();
        let record = ScanRecord::compose(outputs, read);

        assert_eq!(record.read.risk_level, RiskLevel::Moderate);
        assert_eq!(record.outputs.nodule_percentage, 0.0);
    }
}
