//! Fixture scenarios
//!
//! Hand-labeled detections of two workers on a site, used for demos and
//! tests in place of a perception model.

use crate::SourceError;
use ppe_rules::{Category, Detection};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Site scenario with fixed detections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    /// Both workers fully equipped
    Safe,
    /// One worker missing a vest, the other missing a helmet
    Partial,
    /// Neither worker wears any PPE
    Critical,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [Scenario::Safe, Scenario::Partial, Scenario::Critical];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::Safe => "safe",
            Scenario::Partial => "partial",
            Scenario::Critical => "critical",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Scenario::Safe => "Safe conditions: full PPE",
            Scenario::Partial => "Partial alerts: incomplete PPE",
            Scenario::Critical => "Critical conditions: no PPE",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scenario {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "safe" | "seguro" => Ok(Scenario::Safe),
            "partial" | "alerta" => Ok(Scenario::Partial),
            "critical" | "critico" => Ok(Scenario::Critical),
            _ => Err(SourceError::UnknownScenario(s.to_string())),
        }
    }
}

/// Fixed detections for a scenario
pub fn fixture(scenario: Scenario) -> Vec<Detection> {
    let det = Detection::new;
    match scenario {
        Scenario::Safe => vec![
            det(Category::Person, 0.95, [100.0, 100.0, 180.0, 250.0]),
            det(Category::Helmet, 0.92, [110.0, 90.0, 140.0, 120.0]),
            det(Category::Vest, 0.89, [100.0, 120.0, 180.0, 170.0]),
            det(Category::Person, 0.88, [300.0, 150.0, 380.0, 300.0]),
            det(Category::Helmet, 0.91, [310.0, 140.0, 340.0, 170.0]),
            det(Category::Vest, 0.87, [300.0, 170.0, 380.0, 220.0]),
        ],
        Scenario::Partial => vec![
            det(Category::Person, 0.95, [100.0, 100.0, 180.0, 250.0]),
            det(Category::Helmet, 0.92, [110.0, 90.0, 140.0, 120.0]),
            det(Category::Person, 0.88, [300.0, 150.0, 380.0, 300.0]),
            det(Category::Vest, 0.87, [300.0, 170.0, 380.0, 220.0]),
        ],
        Scenario::Critical => vec![
            det(Category::Person, 0.95, [100.0, 100.0, 180.0, 250.0]),
            det(Category::Person, 0.88, [300.0, 150.0, 380.0, 300.0]),
        ],
    }
}
