//! Configuration management for costcheck
//!
//! The diagnostic runs with built-in defaults. A YAML file at one of the
//! default locations can adjust logging, the formatting locale and the
//! regression value the string sample is checked against.

use crate::error::{CostcheckError, Result};
use crate::format::{Locale, NumberFormat};
use crate::logging::get_logger;
use serde::{Deserialize, Serialize};
use std::path::Path;

mod defaults;

/// Locations searched by [`Config::load`], in order
pub const DEFAULT_CONFIG_PATHS: [&str; 2] = ["costcheck.yaml", "/etc/costcheck/config.yaml"];

/// Largest accepted ratio precision
pub const MAX_RATIO_DECIMALS: usize = 6;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Number and currency formatting
    pub formatting: FormattingConfig,

    /// Regression checks applied to the samples
    pub checks: ChecksConfig,

    /// Optional report sections
    pub report: ReportSettings,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    pub level: String,

    /// Whether to log to stderr
    pub console_output: bool,

    /// Whether to use JSON format
    pub json_format: bool,

    /// Directory (or file path whose parent is used) for a daily rotated log
    pub file: Option<String>,

    /// Number of rotated files to keep
    pub backup_count: u32,
}

/// Number and currency formatting
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormattingConfig {
    /// BCP-47 locale tag for digit grouping
    pub locale: String,

    /// Prefix for currency amounts
    pub currency_symbol: String,

    /// Decimal places for percentage ratios
    pub ratio_decimals: usize,
}

/// Regression checks
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecksConfig {
    /// Total cost both samples must coerce to
    pub expected_total_cost: f64,
}

/// Optional report sections
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Append a JSON summary line per sample
    pub json_summary: bool,
}

impl FormattingConfig {
    /// Parsed locale; unknown tags fall back to the default
    pub fn locale(&self) -> Locale {
        self.locale.parse().unwrap_or_else(|e: String| {
            get_logger("config").warn(&format!("{}, using {}", e, Locale::default()));
            Locale::default()
        })
    }

    /// Grouping policy for the configured locale
    pub fn number_format(&self) -> NumberFormat {
        NumberFormat::for_locale(self.locale())
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load from the first default location that exists, else use defaults
    pub fn load() -> Result<Self> {
        for path in &DEFAULT_CONFIG_PATHS {
            if Path::new(path).exists() {
                return Self::from_file(path);
            }
        }

        Ok(Config::default())
    }

    /// Save configuration to a YAML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        crate::logging::parse_log_level(&self.logging.level).map_err(|_| {
            CostcheckError::validation(
                "logging.level",
                format!("Unknown log level '{}'", self.logging.level),
            )
        })?;

        self.formatting
            .locale
            .parse::<Locale>()
            .map_err(|e| CostcheckError::validation("formatting.locale", e))?;

        if self.formatting.currency_symbol.is_empty() {
            return Err(CostcheckError::validation(
                "formatting.currency_symbol",
                "Currency symbol cannot be empty",
            ));
        }

        if self.formatting.ratio_decimals > MAX_RATIO_DECIMALS {
            return Err(CostcheckError::validation(
                "formatting.ratio_decimals",
                format!("Must be at most {}", MAX_RATIO_DECIMALS),
            ));
        }

        if !self.checks.expected_total_cost.is_finite() {
            return Err(CostcheckError::validation(
                "checks.expected_total_cost",
                "Must be a finite number",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.logging.level, "INFO");
        assert_eq!(config.formatting.locale, "zh-CN");
        assert_eq!(config.formatting.currency_symbol, "¥");
        assert_eq!(config.formatting.ratio_decimals, 1);
        assert_eq!(config.checks.expected_total_cost, 158000.0);
        assert!(!config.report.json_summary);
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.formatting.locale = "xx-YY".to_string();
        assert!(config.validate().is_err());

        config = Config::default();
        config.formatting.ratio_decimals = 12;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: Config = serde_yaml::from_str("formatting:\n  locale: de-DE\n").unwrap();
        assert_eq!(config.formatting.locale(), Locale::DeDe);
        assert_eq!(config.formatting.currency_symbol, "¥");
        assert_eq!(config.logging.level, "INFO");
    }

    #[test]
    fn test_unknown_locale_falls_back() {
        let mut config = Config::default();
        config.formatting.locale = "tlh".to_string();
        assert_eq!(config.formatting.locale(), Locale::ZhCn);
    }
}
