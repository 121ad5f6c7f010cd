//! Confidence filtering

use crate::SourceError;
use ppe_rules::Detection;
use tracing::debug;

/// Default minimum detection confidence
pub const DEFAULT_MIN_CONFIDENCE: f32 = 0.6;

/// Drop detections below `min_confidence`. Records without a score are kept.
pub fn filter_by_confidence(
    detections: Vec<Detection>,
    min_confidence: f32,
) -> Result<Vec<Detection>, SourceError> {
    if !(0.0..=1.0).contains(&min_confidence) {
        return Err(SourceError::InvalidConfidence(min_confidence));
    }

    let before = detections.len();
    let kept: Vec<Detection> = detections
        .into_iter()
        .filter(|d| d.confidence.map_or(true, |c| c >= min_confidence))
        .collect();

    if kept.len() < before {
        debug!(
            "Dropped {} detection(s) below confidence {}",
            before - kept.len(),
            min_confidence
        );
    }
    Ok(kept)
}
