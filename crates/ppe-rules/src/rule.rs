//! Rule table definitions

use crate::counts::SummaryCounts;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification severity.
///
/// Ordered `Nominal < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Nominal,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Nominal => "nominal",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }

    /// Banner shown above the classification
    pub fn headline(&self) -> &'static str {
        match self {
            Severity::Nominal => "SAFE CONDITIONS",
            Severity::Medium => "SAFETY ALERT",
            Severity::High => "CRITICAL SAFETY ALERT",
        }
    }

    /// Expected response time
    pub fn priority(&self) -> &'static str {
        match self {
            Severity::Nominal => "Normal operations",
            Severity::Medium => "Resolve within 1 hour",
            Severity::High => "Immediate resolution",
        }
    }

    /// Whether this severity calls for an alert
    pub fn is_alert(&self) -> bool {
        !matches!(self, Severity::Nominal)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Predicate over summary counts (P = persons, H = helmets, V = vests)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// P > 0 and H == 0
    NoHelmets,
    /// P > 0 and H < P
    HelmetShortfall,
    /// P > 0 and V == 0
    NoVests,
    /// P > 0 and V < P
    VestShortfall,
    /// P > 0 and H >= P and V >= P
    FullyEquipped,
    /// P == 0
    NoPersons,
}

impl Condition {
    pub fn matches(&self, c: &SummaryCounts) -> bool {
        match self {
            Condition::NoHelmets => c.persons > 0 && c.helmets == 0,
            Condition::HelmetShortfall => c.persons > 0 && c.helmets < c.persons,
            Condition::NoVests => c.persons > 0 && c.vests == 0,
            Condition::VestShortfall => c.persons > 0 && c.vests < c.persons,
            Condition::FullyEquipped => {
                c.persons > 0 && c.helmets >= c.persons && c.vests >= c.persons
            }
            Condition::NoPersons => c.persons == 0,
        }
    }
}

/// A named condition paired with its outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub name: &'static str,
    pub condition: Condition,
    pub severity: Severity,
    pub message: &'static str,
    pub action: &'static str,
}

/// Name reported when no rule in the table matches
pub const DEFAULT_RULE_NAME: &str = "default";
pub const DEFAULT_MESSAGE: &str = "Normal safety conditions detected";
pub const DEFAULT_ACTION: &str = "Continue routine monitoring";

/// Site safety rules, first match wins.
///
/// `HelmetShortfall` is a superset of `NoHelmets` (likewise for vests), so
/// each "zero" rule only fires because it is declared first. Helmet rules
/// precede vest rules.
pub const RULE_TABLE: [Rule; 6] = [
    Rule {
        name: "no_helmet_critical",
        condition: Condition::NoHelmets,
        severity: Severity::High,
        message: "CRITICAL: No worker is wearing a safety helmet",
        action: "STOP activities immediately and notify the safety supervisor",
    },
    Rule {
        name: "no_helmet_partial",
        condition: Condition::HelmetShortfall,
        severity: Severity::High,
        message: "HIGH: Workers detected without a safety helmet",
        action: "Isolate the area and provide PPE immediately",
    },
    Rule {
        name: "no_vest_critical",
        condition: Condition::NoVests,
        severity: Severity::Medium,
        message: "MEDIUM: No worker is wearing a reflective vest",
        action: "Notify the supervisor and provide safety vests",
    },
    Rule {
        name: "no_vest_partial",
        condition: Condition::VestShortfall,
        severity: Severity::Medium,
        message: "MEDIUM: Workers detected without a reflective vest",
        action: "Reinforce mandatory vest use at the next safety meeting",
    },
    Rule {
        name: "proper_equipment",
        condition: Condition::FullyEquipped,
        severity: Severity::Nominal,
        message: "OK: All personnel have complete personal protective equipment",
        action: "Continue monitoring and maintain safety standards",
    },
    Rule {
        name: "no_persons",
        condition: Condition::NoPersons,
        severity: Severity::Nominal,
        message: "OK: No workers detected in the analyzed area",
        action: "Continue routine monitoring of the area",
    },
];
