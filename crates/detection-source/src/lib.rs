//! Detection Sources
//!
//! Produces detection lists for the rule engine. No perception model runs
//! here; detections come from labeled fixtures, manual counts, or files.

mod error;
mod file;
mod filter;
mod manual;
mod scenario;

pub use error::SourceError;
pub use file::{from_file, from_json_str};
pub use filter::{filter_by_confidence, DEFAULT_MIN_CONFIDENCE};
pub use manual::{from_counts, MAX_MANUAL_COUNT};
pub use scenario::{fixture, Scenario};
