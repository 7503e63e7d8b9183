//! Structured clinical-read schema types

use serde::{Deserialize, Serialize};

use crate::scan_pipeline::output::types::AnalysisOutputs;

/// Overall risk classification returned by the remote read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    High,
    Moderate,
    Low,
    Clear,
}

/// Severity of an individual finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// One localized observation from the remote read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub location: String,
    pub description: String,
    pub severity: Severity,
}

/// Quantitative radiomic feature scores, each on a 0-10 scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedMetrics {
    pub spiculation: f64,
    pub density: f64,
    pub margin_definition: f64,
    pub calcification: f64,
    pub size_score: f64,
}

/// The full structured response the remote service must produce
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredRead {
    pub risk_level: RiskLevel,
    /// Model confidence in [0,1]
    pub confidence_score: f64,
    pub summary: String,
    pub findings: Vec<Finding>,
    pub recommendations: Vec<String>,
    pub detailed_metrics: DetailedMetrics,
}

/// One complete review record: the pipeline's artifacts and coverage merged
/// with the remote structured read.
#[derive(Debug, Clone)]
pub struct ScanRecord {
    pub outputs: AnalysisOutputs,
    pub read: StructuredRead,
}

impl ScanRecord {
    pub fn compose(outputs: AnalysisOutputs, read: StructuredRead) -> Self {
        Self { outputs, read }
    }
}
