//! JSON detection files
//!
//! Expected format is an array of records:
//! `[{"class_name": "person", "confidence": 0.95, "bbox": [100, 100, 180, 250]}, ...]`

use crate::SourceError;
use ppe_rules::Detection;
use std::path::Path;
use tracing::{info, warn};

/// Parse detections from a JSON string
pub fn from_json_str(json: &str) -> Result<Vec<Detection>, SourceError> {
    let detections: Vec<Detection> = serde_json::from_str(json)?;

    let untagged = detections.iter().filter(|d| d.category.is_none()).count();
    if untagged > 0 {
        warn!("{} detection(s) without class_name will not be counted", untagged);
    }

    let unscored = detections.iter().filter(|d| d.confidence.is_none()).count();
    if unscored > 0 {
        warn!("{} detection(s) without confidence bypass confidence filtering", unscored);
    }

    Ok(detections)
}

/// Load detections from a JSON file
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Detection>, SourceError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let detections = from_json_str(&content)?;
    info!("Loaded {} detections from {}", detections.len(), path.display());
    Ok(detections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ppe_rules::{Category, SummaryCounts};
    use std::io::Write;

    #[test]
    fn test_parse_records() {
        let json = r#"[
            {"class_name": "person", "confidence": 0.95, "bbox": [100, 100, 180, 250]},
            {"class_name": "helmet", "confidence": 0.92, "bbox": [110, 90, 140, 120]},
            {"class_name": "ladder", "confidence": 0.70},
            {"confidence": 0.50}
        ]"#;

        let detections = from_json_str(json).unwrap();
        assert_eq!(detections.len(), 4);
        assert_eq!(detections[2].category, Some(Category::Other("ladder".into())));
        assert_eq!(detections[3].category, None);
        assert_eq!(
            SummaryCounts::from_detections(&detections),
            SummaryCounts::new(1, 1, 0)
        );
    }

    #[test]
    fn test_rejects_non_array() {
        assert!(matches!(
            from_json_str(r#"{"class_name": "person"}"#),
            Err(SourceError::Json(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"class_name": "safety_vest", "confidence": 0.8}}]"#).unwrap();

        let detections = from_file(file.path()).unwrap();
        assert_eq!(detections.len(), 1);
        assert!(detections[0].is(&Category::Vest));
    }

    #[test]
    fn test_missing_file() {
        let err = from_file("/nonexistent/detections.json").unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
    }
}
