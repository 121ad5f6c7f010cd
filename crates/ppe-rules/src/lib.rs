//! PPE Compliance Rule Engine
//!
//! Classifies work-site safety from person, helmet, and vest detections:
//! - Category tally of an opaque detection list
//! - Ordered first-match rule table (helmet shortfall before vest shortfall)
//! - Severity, message, and recommended action per classification
//! - Compliance ratio for display

pub mod counts;
pub mod detection;
pub mod engine;
pub mod rule;

pub use counts::SummaryCounts;
pub use detection::{Category, Detection};
pub use engine::{ClassificationResult, RuleEngine};
pub use rule::{Condition, Rule, Severity, DEFAULT_RULE_NAME, RULE_TABLE};
