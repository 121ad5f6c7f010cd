//! Manual count entry

use crate::SourceError;
use ppe_rules::{Category, Detection};
use tracing::debug;

/// Upper bound for each manually entered count
pub const MAX_MANUAL_COUNT: u32 = 10;

const MANUAL_CONFIDENCE: f32 = 0.9;

fn check_range(field: &'static str, value: u32) -> Result<(), SourceError> {
    if value > MAX_MANUAL_COUNT {
        return Err(SourceError::CountOutOfRange {
            field,
            value,
            max: MAX_MANUAL_COUNT,
        });
    }
    Ok(())
}

/// Build a detection list from operator-entered counts
pub fn from_counts(persons: u32, helmets: u32, vests: u32) -> Result<Vec<Detection>, SourceError> {
    check_range("persons", persons)?;
    check_range("helmets", helmets)?;
    check_range("vests", vests)?;

    debug!("Manual entry: {} persons, {} helmets, {} vests", persons, helmets, vests);

    let entries = [
        (Category::Person, persons),
        (Category::Helmet, helmets),
        (Category::Vest, vests),
    ];
    let detections = entries
        .into_iter()
        .flat_map(|(category, n)| {
            (0..n).map(move |_| Detection::new(category.clone(), MANUAL_CONFIDENCE, [0.0; 4]))
        })
        .collect();

    Ok(detections)
}
