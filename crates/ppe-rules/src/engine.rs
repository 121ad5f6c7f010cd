//! Rule Engine Implementation

use crate::counts::SummaryCounts;
use crate::detection::Detection;
use crate::rule::{Rule, Severity, DEFAULT_ACTION, DEFAULT_MESSAGE, DEFAULT_RULE_NAME, RULE_TABLE};
use serde::Serialize;
use tracing::{debug, info};

/// Outcome of one evaluation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    /// Name of the matching rule, or `"default"`
    pub rule: &'static str,
    pub severity: Severity,
    pub message: &'static str,
    /// Recommended action
    pub action: &'static str,
    /// Counts that produced this result
    pub counts: SummaryCounts,
}

impl ClassificationResult {
    fn from_rule(rule: &Rule, counts: SummaryCounts) -> Self {
        Self {
            rule: rule.name,
            severity: rule.severity,
            message: rule.message,
            action: rule.action,
            counts,
        }
    }

    fn nominal_default(counts: SummaryCounts) -> Self {
        Self {
            rule: DEFAULT_RULE_NAME,
            severity: Severity::Nominal,
            message: DEFAULT_MESSAGE,
            action: DEFAULT_ACTION,
            counts,
        }
    }
}

/// Maps a detection set to exactly one safety classification.
///
/// The rule table is fixed at construction and never mutated, so a single
/// engine can be shared across threads.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    rules: &'static [Rule],
}

impl RuleEngine {
    /// Create an engine over the site rule table
    pub fn new() -> Self {
        info!("Creating rule engine with {} rules", RULE_TABLE.len());
        Self { rules: &RULE_TABLE }
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &[Rule] {
        self.rules
    }

    /// Classify a detection set
    pub fn evaluate(&self, detections: &[Detection]) -> ClassificationResult {
        self.evaluate_counts(SummaryCounts::from_detections(detections))
    }

    /// Classify pre-computed counts. First matching rule wins.
    pub fn evaluate_counts(&self, counts: SummaryCounts) -> ClassificationResult {
        let result = self
            .rules
            .iter()
            .find(|rule| rule.condition.matches(&counts))
            .map(|rule| ClassificationResult::from_rule(rule, counts))
            .unwrap_or_else(|| ClassificationResult::nominal_default(counts));

        debug!(
            "Evaluated P={} H={} V={} -> {} ({})",
            counts.persons, counts.helmets, counts.vests, result.rule, result.severity
        );
        result
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::Category;
    use proptest::prelude::*;

    fn scene(persons: u32, helmets: u32, vests: u32) -> Vec<Detection> {
        let mut detections = Vec::new();
        for _ in 0..persons {
            detections.push(Detection::new(Category::Person, 0.9, [0.0; 4]));
        }
        for _ in 0..helmets {
            detections.push(Detection::new(Category::Helmet, 0.9, [0.0; 4]));
        }
        for _ in 0..vests {
            detections.push(Detection::new(Category::Vest, 0.9, [0.0; 4]));
        }
        detections
    }

    #[test]
    fn test_default_outcome_when_no_rule_matches() {
        // Shortfall rules only: a fully equipped crew matches none of them
        let engine = RuleEngine {
            rules: &RULE_TABLE[..4],
        };
        let counts = SummaryCounts::new(2, 2, 2);
        let result = engine.evaluate_counts(counts);

        assert_eq!(result.rule, DEFAULT_RULE_NAME);
        assert_eq!(result.severity, Severity::Nominal);
        assert_eq!(result.message, DEFAULT_MESSAGE);
        assert_eq!(result.action, DEFAULT_ACTION);
        assert_eq!(result.counts, counts);
    }

    #[test]
    fn test_empty_input_no_persons() {
        let engine = RuleEngine::new();
        let result = engine.evaluate(&[]);
        assert_eq!(result.rule, "no_persons");
        assert_eq!(result.severity, Severity::Nominal);
        assert_eq!(result.counts, SummaryCounts::default());
    }

    #[test]
    fn test_no_persons_regardless_of_equipment() {
        let engine = RuleEngine::new();
        let result = engine.evaluate(&scene(0, 5, 1));
        assert_eq!(result.rule, "no_persons");
        assert_eq!(result.message, "OK: No workers detected in the analyzed area");
    }

    #[test]
    fn test_no_helmets_no_vests() {
        let result = RuleEngine::new().evaluate(&scene(2, 0, 0));
        assert_eq!(result.rule, "no_helmet_critical");
        assert_eq!(result.severity, Severity::High);
    }

    #[test]
    fn test_helmet_rule_precedes_vest_rule() {
        let result = RuleEngine::new().evaluate(&scene(2, 0, 2));
        assert_eq!(result.rule, "no_helmet_critical");
        assert_eq!(result.severity, Severity::High);
    }

    #[test]
    fn test_no_vests() {
        let result = RuleEngine::new().evaluate(&scene(2, 2, 0));
        assert_eq!(result.rule, "no_vest_critical");
        assert_eq!(result.severity, Severity::Medium);
    }

    #[test]
    fn test_partial_helmets_with_full_vests() {
        let result = RuleEngine::new().evaluate(&scene(2, 1, 2));
        assert_eq!(result.rule, "no_helmet_partial");
        assert_eq!(result.severity, Severity::High);
    }

    #[test]
    fn test_partial_vests() {
        let result = RuleEngine::new().evaluate(&scene(3, 3, 1));
        assert_eq!(result.rule, "no_vest_partial");
        assert_eq!(result.severity, Severity::Medium);
    }

    #[test]
    fn test_proper_equipment() {
        let result = RuleEngine::new().evaluate(&scene(2, 2, 2));
        assert_eq!(result.rule, "proper_equipment");
        assert_eq!(result.severity, Severity::Nominal);
        assert_eq!(
            result.action,
            "Continue monitoring and maintain safety standards"
        );
    }

    #[test]
    fn test_unknown_categories_ignored() {
        let mut detections = scene(2, 2, 2);
        detections.push(Detection::new(Category::from_label("ladder"), 0.7, [0.0; 4]));
        detections.push(Detection::untagged(0.5, [0.0; 4]));

        let result = RuleEngine::new().evaluate(&detections);
        assert_eq!(result.counts, SummaryCounts::new(2, 2, 2));
        assert_eq!(result.rule, "proper_equipment");
    }

    #[test]
    fn test_rules_in_declaration_order() {
        let names: Vec<_> = RuleEngine::new().rules().iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            [
                "no_helmet_critical",
                "no_helmet_partial",
                "no_vest_critical",
                "no_vest_partial",
                "proper_equipment",
                "no_persons",
            ]
        );
    }

    #[test]
    fn test_result_serializes() {
        let result = RuleEngine::new().evaluate_counts(SummaryCounts::new(2, 2, 0));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["rule"], "no_vest_critical");
        assert_eq!(json["severity"], "medium");
        assert_eq!(json["counts"]["helmets"], 2);
    }

    proptest! {
        #[test]
        fn prop_every_triple_hits_a_table_rule(p in 0u32..50, h in 0u32..50, v in 0u32..50) {
            let result = RuleEngine::new().evaluate_counts(SummaryCounts::new(p, h, v));
            prop_assert_ne!(result.rule, DEFAULT_RULE_NAME);
            prop_assert_eq!(result.counts, SummaryCounts::new(p, h, v));
        }

        #[test]
        fn prop_equipment_loss_never_lowers_severity(
            p in 1u32..20,
            lost_h in 0u32..20,
            lost_v in 0u32..20,
        ) {
            let engine = RuleEngine::new();
            let compliant = engine.evaluate_counts(SummaryCounts::new(p, p, p));
            prop_assert_eq!(compliant.severity, Severity::Nominal);

            let degraded = engine.evaluate_counts(SummaryCounts::new(
                p,
                p.saturating_sub(lost_h),
                p.saturating_sub(lost_v),
            ));
            prop_assert!(degraded.severity >= compliant.severity);
            if lost_h > 0 {
                prop_assert_eq!(degraded.severity, Severity::High);
            }
        }

        #[test]
        fn prop_evaluation_is_idempotent(p in 0u32..10, h in 0u32..10, v in 0u32..10) {
            let engine = RuleEngine::new();
            let detections = scene(p, h, v);
            prop_assert_eq!(engine.evaluate(&detections), engine.evaluate(&detections));
        }

        #[test]
        fn prop_detection_order_irrelevant(
            p in 0u32..8,
            h in 0u32..8,
            v in 0u32..8,
            seed in any::<u64>(),
        ) {
            let engine = RuleEngine::new();
            let detections = scene(p, h, v);
            let mut shuffled = detections.clone();
            // Deterministic Fisher-Yates driven by the seed
            let mut state = seed | 1;
            for i in (1..shuffled.len()).rev() {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                shuffled.swap(i, (state % (i as u64 + 1)) as usize);
            }
            prop_assert_eq!(engine.evaluate(&detections), engine.evaluate(&shuffled));
        }
    }
}
