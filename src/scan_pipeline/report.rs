//! Remote clinical-read boundary module
//!
//! This module defines the contract with the external vision-analysis
//! service: the response schema it must satisfy, the seam a transport
//! implementation plugs into, and the merge of its structured read with the
//! pipeline's own outputs into one reviewable record. The transport itself
//! (request framing, prompt, retries) lives outside this crate.

mod analyzer;
pub mod types;

pub use analyzer::{AnalyzerConfig, VisionAnalyzer, parse_structured_read};
pub use types::{DetailedMetrics, Finding, RiskLevel, ScanRecord, Severity, StructuredRead};
