//! Command-line argument definitions for the order processor
//!
//! This module defines the CLI interface using the clap derive API.

use crate::constants::DEFAULT_EXIT_WORD;
use crate::{Error, Result};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// CLI arguments for the order processor
///
/// Loads the item and discount catalogs, then prices order files one by one
/// and writes a fixed-width report for each.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "order-processor",
    version,
    about = "Price retail order batches against item and discount catalogs",
    long_about = "Loads semicolon-delimited item and discount catalogs, then repeatedly asks for \
                  order files. Every order file is priced with tax and discount applied and a \
                  fixed-width report named processed_<order file>.txt is written. Enter the exit \
                  word at the order prompt to finish."
)]
pub struct Args {
    /// Items catalog file (ean13;name;price_excl_tax;tax_percent)
    ///
    /// Prompted for interactively when omitted.
    #[arg(value_name = "ITEMS_CSV")]
    pub items: Option<PathBuf>,

    /// Discounts catalog file (ean13;discount_percent)
    ///
    /// Prompted for interactively when omitted.
    #[arg(value_name = "DISCOUNTS_CSV")]
    pub discounts: Option<PathBuf>,

    /// Directory for generated reports
    ///
    /// Defaults to the directory of each order file.
    #[arg(short = 'o', long = "output-dir", value_name = "PATH")]
    pub output_dir: Option<PathBuf>,

    /// Input that ends the order loop
    #[arg(long = "exit-word", value_name = "WORD", default_value = DEFAULT_EXIT_WORD)]
    pub exit_word: String,

    /// Keep prompting for order files after a batch fails
    ///
    /// By default the first failing order file aborts the run. Reports written
    /// for earlier batches stay on disk either way.
    #[arg(long = "keep-going")]
    pub keep_going: bool,

    /// Increase logging verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Log level derived from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "warn";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    /// Check argument combinations clap cannot express
    pub fn validate(&self) -> Result<()> {
        if self.exit_word.trim().is_empty() {
            return Err(Error::configuration("--exit-word must not be blank"));
        }
        if self.discounts.is_some() && self.items.is_none() {
            return Err(Error::configuration(
                "discounts catalog given without an items catalog",
            ));
        }
        Ok(())
    }
}
