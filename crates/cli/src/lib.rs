//! SafeBuild Command-Line Advisor
//!
//! Feeds detections from a source into the PPE rule engine and renders the
//! classification with its recommended action.

use clap::{Parser, Subcommand};
use detection_source::{filter_by_confidence, SourceError};
use ppe_rules::{Detection, RuleEngine};
use site_monitor::{InspectionLog, MonitorError};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod render;
mod settings;

pub use render::Report;
pub use settings::{Settings, DEFAULT_CONFIG_FILE};

/// CLI error types
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Monitor(#[from] MonitorError),

    #[error("Output serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Output rendering failed: {0}")]
    Render(#[from] std::fmt::Error),

    #[error("Invalid log level: {0}")]
    LogLevel(String),

    #[error("Failed to install log subscriber: {0}")]
    Logging(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Work-site PPE safety advisor
#[derive(Parser, Debug)]
#[command(name = "safebuild", author, version, about)]
pub struct Cli {
    /// Settings file (TOML). Defaults to ./safebuild.toml when present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Minimum detection confidence (overrides settings)
    #[arg(long, global = true)]
    pub min_confidence: Option<f32>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate a built-in fixture scenario (safe, partial, critical)
    Scenario { name: String },

    /// Evaluate manually entered counts
    Counts {
        #[arg(long, default_value_t = 0)]
        persons: u32,
        #[arg(long, default_value_t = 0)]
        helmets: u32,
        #[arg(long, default_value_t = 0)]
        vests: u32,
    },

    /// Evaluate detections from a JSON file
    File { path: PathBuf },

    /// Run every scenario through one monitoring session
    Demo,

    /// List the rule table in evaluation order
    Rules,
}

/// Initialize logging on stderr
pub fn init_logging(level: &str) -> Result<(), CliError> {
    let level: Level = level
        .parse()
        .map_err(|_| CliError::LogLevel(level.to_string()))?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Execute a parsed command
pub fn run(cli: Cli, mut settings: Settings) -> Result<(), CliError> {
    if let Some(min) = cli.min_confidence {
        settings.min_confidence = min;
    }

    let engine = RuleEngine::new();

    match cli.command {
        Command::Scenario { name } => {
            let scenario = name.parse::<detection_source::Scenario>()?;
            let detections = detection_source::fixture(scenario);
            let report = analyze(&engine, &settings, format!("scenario:{scenario}"), detections)?;
            print_report(&report, cli.json)?;
        }
        Command::Counts {
            persons,
            helmets,
            vests,
        } => {
            let detections = detection_source::from_counts(persons, helmets, vests)?;
            let report = analyze(&engine, &settings, "counts", detections)?;
            print_report(&report, cli.json)?;
        }
        Command::File { path } => {
            let detections = detection_source::from_file(&path)?;
            let report = analyze(
                &engine,
                &settings,
                format!("file:{}", path.display()),
                detections,
            )?;
            print_report(&report, cli.json)?;
        }
        Command::Demo => run_demo(&engine, &settings, cli.json)?,
        Command::Rules => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(engine.rules())?);
            } else {
                print!("{}", render::rules_text(engine.rules())?);
            }
        }
    }

    Ok(())
}

/// Filter detections by confidence and classify them
pub fn analyze(
    engine: &RuleEngine,
    settings: &Settings,
    source: impl Into<String>,
    detections: Vec<Detection>,
) -> Result<Report, CliError> {
    let source = source.into();
    let total = detections.len();
    let kept = filter_by_confidence(detections, settings.min_confidence)?;
    let result = engine.evaluate(&kept);

    info!("Analyzed {}: {} ({})", source, result.rule, result.severity);
    Ok(Report::new(source, kept.len(), total - kept.len(), result))
}

fn print_report(report: &Report, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", render::report_text(report)?);
    }
    Ok(())
}

fn run_demo(engine: &RuleEngine, settings: &Settings, json: bool) -> Result<(), CliError> {
    let mut log = InspectionLog::new(settings.monitor_config())?;
    let mut reports = Vec::new();
    let mut notices = Vec::new();

    for scenario in detection_source::Scenario::ALL {
        let report = analyze(
            engine,
            settings,
            format!("scenario:{scenario}"),
            detection_source::fixture(scenario),
        )?;
        if let Some(notice) = log.record(scenario.description(), report.result.clone()) {
            notices.push(notice);
        }
        reports.push(report);
    }

    let recent = log.recent(settings.history_capacity);
    let stats = log.stats();

    if json {
        let out = serde_json::json!({
            "reports": reports,
            "alerts": notices,
            "activity": recent,
            "stats": stats,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    for report in &reports {
        println!("{}", render::report_text(report)?);
    }
    for notice in &notices {
        println!("{}", render::notice_text(notice));
    }
    println!();
    print!("{}", render::session_text(&recent, &stats)?);
    Ok(())
}
