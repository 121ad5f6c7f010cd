//! Layered settings: defaults, optional TOML file, `SAFEBUILD_*` environment

use config::{Config, ConfigError, Environment, File};
use detection_source::DEFAULT_MIN_CONFIDENCE;
use serde::{Deserialize, Serialize};
use site_monitor::MonitorConfig;
use std::path::Path;

/// Settings file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "safebuild";

const ENV_PREFIX: &str = "SAFEBUILD";

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Detections below this confidence are dropped before evaluation
    pub min_confidence: f32,
    /// Raise alert notices for medium/high classifications
    pub alerts_enabled: bool,
    /// Inspections kept in the session activity log
    pub history_capacity: usize,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        let monitor = MonitorConfig::default();
        Self {
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            alerts_enabled: monitor.alerts_enabled,
            history_capacity: monitor.history_capacity,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Load settings. An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let defaults = Settings::default();

        let builder = Config::builder()
            .set_default("min_confidence", defaults.min_confidence as f64)?
            .set_default("alerts_enabled", defaults.alerts_enabled)?
            .set_default("history_capacity", defaults.history_capacity as i64)?
            .set_default("log_level", defaults.log_level)?;

        let builder = match path {
            Some(path) => builder.add_source(File::from(path)),
            None => builder.add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false)),
        };

        builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Monitoring session configuration derived from these settings
    pub fn monitor_config(&self) -> MonitorConfig {
        MonitorConfig {
            history_capacity: self.history_capacity,
            alerts_enabled: self.alerts_enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "min_confidence = 0.8").unwrap();
        writeln!(file, "alerts_enabled = false").unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();
        assert!((settings.min_confidence - 0.8).abs() < 1e-6);
        assert!(!settings.alerts_enabled);
        assert_eq!(settings.history_capacity, 20);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_explicit_missing_file_fails() {
        assert!(Settings::load(Some(Path::new("/nonexistent/safebuild.toml"))).is_err());
    }

    #[test]
    fn test_monitor_config() {
        let settings = Settings {
            history_capacity: 5,
            ..Default::default()
        };
        let monitor = settings.monitor_config();
        assert_eq!(monitor.history_capacity, 5);
        assert!(monitor.alerts_enabled);
    }
}
