//! Summary counts derived from a detection set

use crate::detection::{Category, Detection};
use serde::{Deserialize, Serialize};

/// Person, helmet, and vest tallies for one evaluation.
///
/// The three counts are independent. A scene may show more helmets than
/// persons (spare equipment on a rack).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SummaryCounts {
    pub persons: u32,
    pub helmets: u32,
    pub vests: u32,
}

impl SummaryCounts {
    pub fn new(persons: u32, helmets: u32, vests: u32) -> Self {
        Self {
            persons,
            helmets,
            vests,
        }
    }

    /// Tally detections by category.
    ///
    /// Untagged records and categories outside {person, helmet, vest} are
    /// excluded from all three counts. An `Other` built directly around a
    /// known label is counted as that label.
    pub fn from_detections<'a, I>(detections: I) -> Self
    where
        I: IntoIterator<Item = &'a Detection>,
    {
        let mut counts = Self::default();
        for det in detections {
            let Some(category) = &det.category else {
                continue;
            };
            let category = match category {
                Category::Other(label) => Category::from_label(label),
                known => known.clone(),
            };
            match category {
                Category::Person => counts.persons = counts.persons.saturating_add(1),
                Category::Helmet => counts.helmets = counts.helmets.saturating_add(1),
                Category::Vest => counts.vests = counts.vests.saturating_add(1),
                Category::Other(_) => {}
            }
        }
        counts
    }

    /// Compliance ratio: `min(helmets, vests) / persons`, 0.0 with no persons.
    ///
    /// Bounded by the scarcer equipment type, not an average of the two.
    pub fn compliance_ratio(&self) -> f64 {
        if self.persons == 0 {
            return 0.0;
        }
        self.helmets.min(self.vests) as f64 / self.persons as f64
    }

    /// Compliance ratio as a percentage
    pub fn compliance_percent(&self) -> f64 {
        self.compliance_ratio() * 100.0
    }

    /// Workers without a helmet
    pub fn helmet_shortfall(&self) -> u32 {
        self.persons.saturating_sub(self.helmets)
    }

    /// Workers without a vest
    pub fn vest_shortfall(&self) -> u32 {
        self.persons.saturating_sub(self.vests)
    }
}
