//! Command runner for the order processor
//!
//! Sets up logging and configuration, then drives an interactive
//! [`Session`] on stdin/stdout and prints a summary once it ends.

use anyhow::Context;
use colored::Colorize;
use std::fs;
use std::time::Instant;
use tracing::{debug, info};

use crate::cli::args::Args;
use crate::cli::input::Prompter;
use crate::cli::session::{Session, SessionStats};
use crate::config::Config;
use crate::{Error, Result};

/// Run the order processor
///
/// 1. Set up logging and validate arguments
/// 2. Build the configuration and prepare the output directory
/// 3. Load the catalogs, then process order files until the user exits
/// 4. Print a summary of the session
pub fn run(args: Args) -> anyhow::Result<SessionStats> {
    let start_time = Instant::now();

    setup_logging(&args).context("Failed to initialize logging")?;

    info!("Starting order processor");
    debug!("Command line arguments: {:?}", args);

    args.validate().context("Invalid arguments")?;
    let config = Config::from_args(&args).context("Invalid configuration")?;
    prepare_output_dir(&config)?;

    let mut prompter = Prompter::stdio();
    let mut session = Session::new(config);

    session
        .load_catalogs(args.items.as_deref(), args.discounts.as_deref(), &mut prompter)
        .context("Failed to load catalogs")?;
    session
        .run_order_loop(&mut prompter)
        .context("Order processing aborted")?;

    let stats = session.into_stats();
    if !args.quiet {
        print_summary(&stats, start_time);
    }

    info!(
        "Finished: {} report(s) in {:.2?}",
        stats.batches_processed,
        start_time.elapsed()
    );
    Ok(stats)
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("order_processor={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
            .map_err(|e| Error::configuration(format!("logging already initialized: {}", e)))?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .map_err(|e| Error::configuration(format!("logging already initialized: {}", e)))?;
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Create the configured output directory if it does not exist yet
fn prepare_output_dir(config: &Config) -> anyhow::Result<()> {
    if let Some(dir) = &config.output_dir {
        if !dir.exists() {
            fs::create_dir_all(dir).with_context(|| {
                format!("Failed to create output directory {}", dir.display())
            })?;
            info!("Created output directory {}", dir.display());
        }
    }
    Ok(())
}

fn print_summary(stats: &SessionStats, start_time: Instant) {
    println!();
    println!("{}", "Session summary".bold());
    println!(
        "  Reports written: {}",
        stats.batches_processed.to_string().green()
    );
    if stats.batches_failed > 0 {
        println!(
            "  Batches failed:  {}",
            stats.batches_failed.to_string().red()
        );
    }
    println!("  Lines priced:    {}", stats.lines_priced);
    for report in &stats.reports {
        println!("    {}", report.display());
    }
    println!("  Elapsed:         {:.2?}", start_time.elapsed());
}
