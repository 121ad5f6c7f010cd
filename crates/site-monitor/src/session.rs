//! Inspection Log Implementation

use crate::MonitorError;
use chrono::{DateTime, Utc};
use ppe_rules::{ClassificationResult, Severity};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Monitoring session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Number of inspections kept in the activity log (default: 20)
    pub history_capacity: usize,
    /// Raise alert notices for medium/high classifications (default: true)
    pub alerts_enabled: bool,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            history_capacity: 20,
            alerts_enabled: true,
        }
    }
}

/// One recorded inspection
#[derive(Debug, Clone, Serialize)]
pub struct InspectionRecord {
    pub id: Uuid,
    /// Free-form label, e.g. "Zone B inspection"
    pub label: String,
    pub recorded_at: DateTime<Utc>,
    pub result: ClassificationResult,
}

/// Alert raised for a non-nominal inspection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertNotice {
    pub inspection_id: Uuid,
    pub severity: Severity,
    pub message: &'static str,
    pub action: &'static str,
    pub priority: &'static str,
}

/// Aggregate statistics for a session
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SiteStats {
    /// Inspections recorded since creation or last clear
    pub inspections: usize,
    /// Alert notices raised
    pub alerts: usize,
    /// Inspections per severity: [nominal, medium, high]
    pub by_severity: [usize; 3],
    /// Mean compliance percent over recorded inspections with workers present
    pub mean_compliance_percent: Option<f64>,
}

impl SiteStats {
    /// Inspections classified at the given severity
    pub fn count(&self, severity: Severity) -> usize {
        self.by_severity[severity_index(severity)]
    }
}

fn severity_index(severity: Severity) -> usize {
    match severity {
        Severity::Nominal => 0,
        Severity::Medium => 1,
        Severity::High => 2,
    }
}

/// Bounded inspection history owned by one monitoring session
pub struct InspectionLog {
    config: MonitorConfig,
    /// Oldest first
    records: VecDeque<InspectionRecord>,
    inspections: usize,
    alerts: usize,
    by_severity: [usize; 3],
    /// Running compliance percent sum over inspections with workers present
    compliance_sum: f64,
    staffed_inspections: usize,
}

impl InspectionLog {
    /// Create a new inspection log
    pub fn new(config: MonitorConfig) -> Result<Self, MonitorError> {
        if config.history_capacity == 0 {
            return Err(MonitorError::InvalidCapacity(config.history_capacity));
        }

        info!("Creating inspection log with config: {:?}", config);
        Ok(Self {
            records: VecDeque::with_capacity(config.history_capacity),
            config,
            inspections: 0,
            alerts: 0,
            by_severity: [0; 3],
            compliance_sum: 0.0,
            staffed_inspections: 0,
        })
    }

    /// Record an inspection, returning an alert notice when one is due
    pub fn record(
        &mut self,
        label: impl Into<String>,
        result: ClassificationResult,
    ) -> Option<AlertNotice> {
        let record = InspectionRecord {
            id: Uuid::new_v4(),
            label: label.into(),
            recorded_at: Utc::now(),
            result,
        };

        self.inspections += 1;
        self.by_severity[severity_index(record.result.severity)] += 1;

        let counts = record.result.counts;
        if counts.persons > 0 {
            self.compliance_sum += counts.compliance_percent();
            self.staffed_inspections += 1;
        }

        let notice = self.notice_for(&record);
        if let Some(notice) = &notice {
            self.alerts += 1;
            warn!(
                "Alert [{}] {}: {} -> {}",
                notice.severity, record.label, notice.message, notice.action
            );
        } else {
            debug!("Inspection recorded: {} ({})", record.label, record.result.severity);
        }

        if self.records.len() >= self.config.history_capacity {
            self.records.pop_front();
        }
        self.records.push_back(record);

        notice
    }

    fn notice_for(&self, record: &InspectionRecord) -> Option<AlertNotice> {
        let severity = record.result.severity;
        if !severity.is_alert() {
            return None;
        }
        if !self.config.alerts_enabled {
            debug!("Alert suppressed: alerting disabled");
            return None;
        }

        Some(AlertNotice {
            inspection_id: record.id,
            severity,
            message: record.result.message,
            action: record.result.action,
            priority: severity.priority(),
        })
    }

    /// Most recent inspection
    pub fn last(&self) -> Option<&InspectionRecord> {
        self.records.back()
    }

    /// Up to `n` inspections, newest first
    pub fn recent(&self, n: usize) -> Vec<&InspectionRecord> {
        self.records.iter().rev().take(n).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Session statistics. All fields cover every inspection recorded since
    /// creation or the last `clear`, including ones evicted from history.
    pub fn stats(&self) -> SiteStats {
        let mean_compliance_percent = if self.staffed_inspections == 0 {
            None
        } else {
            Some(self.compliance_sum / self.staffed_inspections as f64)
        };

        SiteStats {
            inspections: self.inspections,
            alerts: self.alerts,
            by_severity: self.by_severity,
            mean_compliance_percent,
        }
    }

    /// Clear history and counters
    pub fn clear(&mut self) {
        self.records.clear();
        self.inspections = 0;
        self.alerts = 0;
        self.by_severity = [0; 3];
        self.compliance_sum = 0.0;
        self.staffed_inspections = 0;
    }
}
