//! Detection Source Error Types

use std::path::PathBuf;
use thiserror::Error;

/// Errors while producing detections
#[derive(Debug, Error)]
pub enum SourceError {
    /// Scenario name not recognized
    #[error("Unknown scenario: {0} (expected safe, partial, or critical)")]
    UnknownScenario(String),

    /// Manual count exceeds the entry form bounds
    #[error("{field} count {value} is out of range [0, {max}]")]
    CountOutOfRange {
        field: &'static str,
        value: u32,
        max: u32,
    },

    /// Confidence threshold outside [0, 1]
    #[error("Invalid confidence threshold: {0}")]
    InvalidConfidence(f32),

    /// Detection file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Detection data is not a valid JSON array of records
    #[error("Invalid detection data: {0}")]
    Json(#[from] serde_json::Error),
}
