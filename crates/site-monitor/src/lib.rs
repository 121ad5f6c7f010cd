//! Site Monitoring Session
//!
//! Caller-owned inspection history for a monitoring session. Records each
//! classification, raises alert notices, and aggregates site statistics.

mod session;

pub use session::{AlertNotice, InspectionLog, InspectionRecord, MonitorConfig, SiteStats};

use thiserror::Error;

/// Monitoring errors
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("History capacity must be at least 1, got {0}")]
    InvalidCapacity(usize),
}
