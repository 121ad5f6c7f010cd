//! Text and JSON rendering of classifications

use ppe_rules::{ClassificationResult, Rule};
use serde::Serialize;
use site_monitor::{AlertNotice, InspectionRecord, SiteStats};
use std::fmt::{self, Write};

/// Classification plus the display metrics derived from it
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Where the detections came from, e.g. `scenario:safe`
    pub source: String,
    /// Detections evaluated after confidence filtering
    pub detections: usize,
    /// Detections dropped by confidence filtering
    pub dropped: usize,
    pub result: ClassificationResult,
    pub compliance_percent: f64,
    pub helmet_shortfall: u32,
    pub vest_shortfall: u32,
}

impl Report {
    pub fn new(
        source: impl Into<String>,
        detections: usize,
        dropped: usize,
        result: ClassificationResult,
    ) -> Self {
        let counts = result.counts;
        Self {
            source: source.into(),
            detections,
            dropped,
            compliance_percent: counts.compliance_percent(),
            helmet_shortfall: counts.helmet_shortfall(),
            vest_shortfall: counts.vest_shortfall(),
            result,
        }
    }
}

/// Render a report as a text panel
pub fn report_text(report: &Report) -> Result<String, fmt::Error> {
    let result = &report.result;
    let counts = result.counts;
    let mut out = String::new();

    writeln!(out, "== {} ==", result.severity.headline())?;
    writeln!(out, "{}", result.message)?;
    writeln!(out, "Recommended action: {}", result.action)?;
    writeln!(out, "Priority: {}", result.severity.priority())?;
    writeln!(out)?;
    writeln!(
        out,
        "Source: {} ({} detections, {} dropped)",
        report.source, report.detections, report.dropped
    )?;
    writeln!(
        out,
        "Workers: {}  Helmets: {}  Vests: {}  Compliance: {:.1}%",
        counts.persons, counts.helmets, counts.vests, report.compliance_percent
    )?;

    if counts.persons == 0 {
        writeln!(out, "No workers present")?;
    } else {
        if report.helmet_shortfall > 0 {
            writeln!(out, "{} without helmet", report.helmet_shortfall)?;
        } else {
            writeln!(out, "Helmets OK")?;
        }
        if report.vest_shortfall > 0 {
            writeln!(out, "{} without vest", report.vest_shortfall)?;
        } else {
            writeln!(out, "Vests OK")?;
        }
    }

    Ok(out)
}

pub fn notice_text(notice: &AlertNotice) -> String {
    format!(
        "ALERT [{}] {} | {} | {}",
        notice.severity, notice.message, notice.action, notice.priority
    )
}

/// Rule table listing in evaluation order
pub fn rules_text(rules: &[Rule]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for (i, rule) in rules.iter().enumerate() {
        writeln!(
            out,
            "{:>2}. {:<20} {:<8} {}",
            i + 1,
            rule.name,
            rule.severity.as_str(),
            rule.message
        )?;
    }
    writeln!(
        out,
        "    {:<20} {:<8} (catch-all)",
        ppe_rules::DEFAULT_RULE_NAME,
        "nominal"
    )?;
    Ok(out)
}

/// Activity log (newest first) and session statistics
pub fn session_text(
    recent: &[&InspectionRecord],
    stats: &SiteStats,
) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "Recent activity:")?;
    for record in recent {
        writeln!(
            out,
            "  {} {}: {}",
            record.recorded_at.format("%H:%M:%S"),
            record.label,
            record.result.severity
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Inspections: {}", stats.inspections)?;
    writeln!(out, "Alerts: {}", stats.alerts)?;
    writeln!(
        out,
        "By severity: nominal={} medium={} high={}",
        stats.by_severity[0], stats.by_severity[1], stats.by_severity[2]
    )?;
    match stats.mean_compliance_percent {
        Some(mean) => writeln!(out, "Mean compliance: {:.1}%", mean)?,
        None => writeln!(out, "Mean compliance: n/a")?,
    }

    Ok(out)
}
