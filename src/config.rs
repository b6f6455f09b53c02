//! Configuration management and validation.
//!
//! Provides the settings of an interactive session: where reports go, how
//! they are named, which input ends the order loop and how batch failures
//! are handled.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::cli::args::Args;
use crate::constants::{DEFAULT_EXIT_WORD, DEFAULT_LOG_LEVEL, DEFAULT_REPORT_PREFIX, TXT_EXTENSION};
use crate::{Error, Result};

/// Session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory for generated reports; `None` writes next to each order file
    pub output_dir: Option<PathBuf>,

    /// Prefix prepended to report file names
    pub report_prefix: String,

    /// Extension of report files (without the dot)
    pub report_extension: String,

    /// Input that ends the order loop
    pub exit_word: String,

    /// Continue the order loop after a failed batch instead of aborting
    pub keep_going: bool,

    /// Log level used when RUST_LOG is not set
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: None,
            report_prefix: DEFAULT_REPORT_PREFIX.to_string(),
            report_extension: TXT_EXTENSION.to_string(),
            exit_word: DEFAULT_EXIT_WORD.to_string(),
            keep_going: false,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Build a validated configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self> {
        let mut config = Self::default()
            .with_exit_word(args.exit_word.clone())
            .with_log_level(args.get_log_level());

        if let Some(dir) = &args.output_dir {
            config = config.with_output_dir(dir.clone());
        }
        if args.keep_going {
            config = config.with_keep_going();
        }

        config.validate()?;
        debug!("Configuration: {:?}", config);
        Ok(config)
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn with_report_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.report_prefix = prefix.into();
        self
    }

    pub fn with_exit_word(mut self, word: impl Into<String>) -> Self {
        self.exit_word = word.into();
        self
    }

    pub fn with_keep_going(mut self) -> Self {
        self.keep_going = true;
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Check that the configuration can produce usable file names and prompts
    pub fn validate(&self) -> Result<()> {
        if self.exit_word.trim().is_empty() {
            return Err(Error::configuration("exit word must not be empty"));
        }
        if self.report_prefix.is_empty() {
            return Err(Error::configuration("report prefix must not be empty"));
        }
        if self.report_extension.is_empty() || self.report_extension.starts_with('.') {
            return Err(Error::configuration(format!(
                "report extension '{}' must be non-empty and given without a dot",
                self.report_extension
            )));
        }
        if let Some(dir) = &self.output_dir {
            if dir.exists() && !dir.is_dir() {
                return Err(Error::configuration(format!(
                    "output path {} is not a directory",
                    dir.display()
                )));
            }
        }
        Ok(())
    }

    /// Report path for an order file: `<dir>/<prefix><stem>.<extension>`
    ///
    /// `<dir>` is the output directory when configured, otherwise the
    /// directory holding the order file.
    pub fn report_path(&self, order_file: &Path) -> PathBuf {
        let stem = order_file
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let file_name = format!("{}{}.{}", self.report_prefix, stem, self.report_extension);

        match &self.output_dir {
            Some(dir) => dir.join(file_name),
            None => order_file
                .parent()
                .map_or_else(|| PathBuf::from(&file_name), |parent| parent.join(&file_name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.exit_word, "exit");
        assert_eq!(config.report_prefix, "processed_");
        assert!(!config.keep_going);
    }

    #[test]
    fn test_report_path_next_to_order_file() {
        let config = Config::default();

        assert_eq!(
            config.report_path(Path::new("data/orders_monday.csv")),
            PathBuf::from("data/processed_orders_monday.txt")
        );
        assert_eq!(
            config.report_path(Path::new("orders.csv")),
            PathBuf::from("processed_orders.txt")
        );
    }

    #[test]
    fn test_report_path_in_output_dir() {
        let config = Config::default().with_output_dir("reports");

        assert_eq!(
            config.report_path(Path::new("data/orders.csv")),
            PathBuf::from("reports/processed_orders.txt")
        );
    }

    #[test]
    fn test_validation_rejects_blank_exit_word() {
        let config = Config::default().with_exit_word("  ");
        assert!(matches!(config.validate(), Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_validation_rejects_file_as_output_dir() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = Config::default().with_output_dir(file.path());

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_args() {
        let args = Args::parse_from([
            "order-processor",
            "items.csv",
            "--exit-word",
            "quit",
            "--keep-going",
            "-v",
        ]);
        let config = Config::from_args(&args).unwrap();

        assert_eq!(config.exit_word, "quit");
        assert!(config.keep_going);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.output_dir, None);
    }
}
