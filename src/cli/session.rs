//! Interactive order session
//!
//! A [`Session`] owns the catalogs and the reader they are loaded through.
//! It loads the item and discount catalogs once, then prices order files one
//! batch at a time, writing a report per batch.

use colored::Colorize;
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

use crate::app::services::catalog::{Catalog, Discounts, Items, Orders};
use crate::app::services::file_reader::{CsvReader, FileReader};
use crate::app::services::order_processor::ProcessedOrders;
use crate::cli::input::Prompter;
use crate::config::Config;
use crate::constants::FIRST_BATCH;
use crate::{Error, Result};

/// Outcome counters of a session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionStats {
    /// Batches that produced a report
    pub batches_processed: usize,
    /// Batches abandoned on error (only non-zero with keep-going)
    pub batches_failed: usize,
    /// Priced lines across all reports
    pub lines_priced: usize,
    /// Report files written, in order
    pub reports: Vec<PathBuf>,
}

/// Catalog state and batch numbering of one interactive run
#[derive(Debug)]
pub struct Session {
    config: Config,
    reader: CsvReader,
    items: Items,
    discounts: Discounts,
    orders: Orders,
    processed: ProcessedOrders,
    next_batch: u64,
    stats: SessionStats,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            reader: CsvReader::new(),
            items: Items::new(),
            discounts: Discounts::new(),
            orders: Orders::new(),
            processed: ProcessedOrders::new(),
            next_batch: FIRST_BATCH,
            stats: SessionStats::default(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn items(&self) -> &Items {
        &self.items
    }

    pub fn discounts(&self) -> &Discounts {
        &self.discounts
    }

    /// Result of the most recent batch
    pub fn processed(&self) -> &ProcessedOrders {
        &self.processed
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn into_stats(self) -> SessionStats {
        self.stats
    }

    /// Load the item catalog, then the discount catalog
    ///
    /// Paths not given are prompted for. Any failure is reported to the user
    /// and returned; the session is not usable afterwards.
    pub fn load_catalogs<R: BufRead, W: Write>(
        &mut self,
        items_path: Option<&Path>,
        discounts_path: Option<&Path>,
        prompter: &mut Prompter<R, W>,
    ) -> Result<()> {
        let path = resolve_path(items_path, self.items.object_type(), prompter)?;
        report_stage(
            load_catalog(&mut self.reader, &mut self.items, &path),
            &format!("{} read", self.items.object_type()),
            prompter,
        )?;

        let path = resolve_path(discounts_path, self.discounts.object_type(), prompter)?;
        report_stage(
            load_catalog(&mut self.reader, &mut self.discounts, &path),
            &format!("{} read", self.discounts.object_type()),
            prompter,
        )?;

        info!(
            "Catalogs ready: {} items, {} discounts",
            self.items.len(),
            self.discounts.len()
        );
        Ok(())
    }

    /// Prompt for order files until the exit word or end of input
    ///
    /// A failing batch ends the loop with its error unless keep-going is
    /// configured, in which case it is counted and the loop continues.
    pub fn run_order_loop<R: BufRead, W: Write>(
        &mut self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<()> {
        let message = format!("Enter {} CSV file: ", self.orders.object_type());

        loop {
            let answer = match prompter.prompt(&message)? {
                Some(answer) if answer != self.config.exit_word => answer,
                _ => break,
            };

            match self.run_batch(Path::new(&answer), prompter) {
                Ok(report) => {
                    prompter.say(format!(
                        "{} {}",
                        "Report written:".green(),
                        report.display()
                    ))?;
                }
                Err(e) if self.config.keep_going => {
                    warn!("Skipping {}: {}", answer, e);
                    self.stats.batches_failed += 1;
                }
                Err(e) => return Err(e),
            }
        }

        prompter.say("Exit the app.")?;
        Ok(())
    }

    /// Load, price and report one order file; returns the report path
    pub fn process_order_file(&mut self, path: &Path) -> Result<PathBuf> {
        let batch = self.load_orders(path)?;
        self.price_batch(batch)?;
        self.write_report(path)
    }

    /// Load an order file and assign it the next batch number
    pub fn load_orders(&mut self, path: &Path) -> Result<u64> {
        load_catalog(&mut self.reader, &mut self.orders, path)?;

        let batch = self.next_batch;
        self.next_batch += 1;
        debug!("{} assigned to batch #{}", path.display(), batch);
        Ok(batch)
    }

    /// Price the loaded orders as batch `batch`
    pub fn price_batch(&mut self, batch: u64) -> Result<()> {
        self.processed.process(
            Some(&self.orders),
            Some(&self.items),
            Some(&self.discounts),
            batch,
        )
    }

    /// Write the current batch report for `order_file`
    pub fn write_report(&mut self, order_file: &Path) -> Result<PathBuf> {
        let report_path = self.config.report_path(order_file);
        let file = File::create(&report_path).map_err(|e| {
            Error::io(
                format!("Failed to create report {}", report_path.display()),
                e,
            )
        })?;
        self.processed.write_report(BufWriter::new(file))?;

        self.stats.batches_processed += 1;
        self.stats.lines_priced += self.processed.len();
        self.stats.reports.push(report_path.clone());

        info!(
            "Wrote order #{} report to {}",
            self.processed.batch(),
            report_path.display()
        );
        Ok(report_path)
    }

    fn run_batch<R: BufRead, W: Write>(
        &mut self,
        path: &Path,
        prompter: &mut Prompter<R, W>,
    ) -> Result<PathBuf> {
        let stage = format!("{} read", self.orders.object_type());
        let batch = report_stage(self.load_orders(path), &stage, prompter)?;
        report_stage(self.price_batch(batch), "Processing", prompter)?;
        report_stage(self.write_report(path), "Report write", prompter)
    }
}

/// Open `path`, load it into `catalog` and release the file
fn load_catalog(reader: &mut CsvReader, catalog: &mut dyn Catalog, path: &Path) -> Result<()> {
    reader.open(path)?;
    let result = catalog.load(&mut *reader);
    reader.close();
    result
}

fn resolve_path<R: BufRead, W: Write>(
    given: Option<&Path>,
    object_type: &str,
    prompter: &mut Prompter<R, W>,
) -> Result<PathBuf> {
    if let Some(path) = given {
        return Ok(path.to_path_buf());
    }

    prompter
        .prompt(&format!("Enter {} CSV file: ", object_type))?
        .map(PathBuf::from)
        .ok_or_else(|| Error::missing_input(format!("no {} file given", object_type)))
}

/// Tell the user which stage failed before handing the error back
fn report_stage<T, R: BufRead, W: Write>(
    result: Result<T>,
    stage: &str,
    prompter: &mut Prompter<R, W>,
) -> Result<T> {
    if let Err(e) = &result {
        error!("{} failed: {}", stage, e);
        prompter.say(format!("{} -> {}", format!("{} failed", stage).red(), e))?;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    const ITEMS: &str = "5720092407427;Fanta;1.21;3.5\n\
                         4001686315329;Coca-Cola;1.50;3.5\n";
    const DISCOUNTS: &str = "5720092407427;5.12\n";

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn loaded_session(dir: &TempDir, config: Config) -> Session {
        let items = write(dir, "items.csv", ITEMS);
        let discounts = write(dir, "discounts.csv", DISCOUNTS);

        let mut session = Session::new(config);
        let mut prompter = Prompter::new(Cursor::new(""), Vec::new());
        session
            .load_catalogs(Some(&items), Some(&discounts), &mut prompter)
            .unwrap();
        session
    }

    fn output_of(prompter: Prompter<Cursor<String>, Vec<u8>>) -> String {
        String::from_utf8(prompter.into_output()).unwrap()
    }

    #[test]
    fn test_load_catalogs_prompts_for_missing_paths() {
        let dir = TempDir::new().unwrap();
        let items = write(&dir, "items.csv", ITEMS);
        let discounts = write(&dir, "discounts.csv", DISCOUNTS);

        let mut session = Session::new(Config::default());
        let mut prompter = Prompter::new(
            Cursor::new(format!("{}\n{}\n", items.display(), discounts.display())),
            Vec::new(),
        );
        session.load_catalogs(None, None, &mut prompter).unwrap();

        assert_eq!(session.items().len(), 2);
        assert_eq!(session.discounts().len(), 1);

        let output = output_of(prompter);
        assert!(output.contains("Enter Items CSV file: "));
        assert!(output.contains("Enter Discounts CSV file: "));
    }

    #[test]
    fn test_load_catalogs_reports_failing_catalog() {
        let dir = TempDir::new().unwrap();
        let items = write(&dir, "items.csv", "123;Fanta;1.21;3.5\n");
        let discounts = write(&dir, "discounts.csv", DISCOUNTS);

        let mut session = Session::new(Config::default());
        let mut prompter = Prompter::new(Cursor::new(String::new()), Vec::new());
        let err = session
            .load_catalogs(Some(&items), Some(&discounts), &mut prompter)
            .unwrap_err();

        assert!(err.is_validation());
        assert!(output_of(prompter).contains("Items read failed"));
    }

    #[test]
    fn test_load_catalogs_without_input() {
        let mut session = Session::new(Config::default());
        let mut prompter = Prompter::new(Cursor::new(String::new()), Vec::new());

        let err = session.load_catalogs(None, None, &mut prompter).unwrap_err();
        assert!(matches!(err, Error::MissingInput { .. }));
    }

    #[test]
    fn test_process_order_file_writes_report() {
        let dir = TempDir::new().unwrap();
        let mut session = loaded_session(&dir, Config::default());
        let orders = write(&dir, "orders.csv", "5720092407427;2\n");

        let report = session.process_order_file(&orders).unwrap();

        assert_eq!(report, dir.path().join("processed_orders.txt"));
        let content = fs::read_to_string(&report).unwrap();
        assert!(content.starts_with("Order #1\n"));
        assert!(content.contains("Fanta "));
        assert_eq!(session.stats().batches_processed, 1);
        assert_eq!(session.stats().lines_priced, 1);
    }

    #[test]
    fn test_batches_are_numbered_from_one() {
        let dir = TempDir::new().unwrap();
        let mut session = loaded_session(&dir, Config::default());
        let first = write(&dir, "first.csv", "5720092407427;1\n");
        let second = write(&dir, "second.csv", "4001686315329;1\n");

        session.process_order_file(&first).unwrap();
        let report = session.process_order_file(&second).unwrap();

        assert_eq!(session.processed().batch(), 2);
        assert!(
            fs::read_to_string(report)
                .unwrap()
                .starts_with("Order #2\n")
        );
    }

    #[test]
    fn test_order_loop_until_exit_word() {
        let dir = TempDir::new().unwrap();
        let mut session = loaded_session(&dir, Config::default());
        let orders = write(&dir, "orders.csv", "5720092407427;2\n");

        let mut prompter = Prompter::new(
            Cursor::new(format!("\n{}\nexit\nnever-read.csv\n", orders.display())),
            Vec::new(),
        );
        session.run_order_loop(&mut prompter).unwrap();

        let output = output_of(prompter);
        assert!(output.contains("Enter Orders CSV file: "));
        assert!(output.contains("Report written:"));
        assert!(output.ends_with("Exit the app.\n"));
        assert_eq!(session.stats().reports.len(), 1);
    }

    #[test]
    fn test_order_loop_ends_at_end_of_input() {
        let dir = TempDir::new().unwrap();
        let mut session = loaded_session(&dir, Config::default().with_exit_word("quit"));
        let mut prompter = Prompter::new(Cursor::new("exit\n".to_string()), Vec::new());

        // "exit" is an ordinary (missing) file name once the exit word changes
        let err = session.run_order_loop(&mut prompter).unwrap_err();
        assert!(matches!(err, Error::InvalidExtension { .. }));

        let mut prompter = Prompter::new(Cursor::new(String::new()), Vec::new());
        session.run_order_loop(&mut prompter).unwrap();
        assert!(output_of(prompter).contains("Exit the app."));
    }

    #[test]
    fn test_order_loop_fails_fast_on_missing_item() {
        let dir = TempDir::new().unwrap();
        let mut session = loaded_session(&dir, Config::default());
        let good = write(&dir, "good.csv", "5720092407427;1\n");
        let bad = write(&dir, "bad.csv", "1234567890123;1\n");

        let mut prompter = Prompter::new(
            Cursor::new(format!("{}\n{}\nexit\n", good.display(), bad.display())),
            Vec::new(),
        );
        let err = session.run_order_loop(&mut prompter).unwrap_err();

        assert!(matches!(err, Error::MissingItem { ean13: 1234567890123 }));
        assert!(output_of(prompter).contains("Processing failed"));
        // the earlier report stays on disk
        assert!(dir.path().join("processed_good.txt").exists());
        assert!(!dir.path().join("processed_bad.txt").exists());
    }

    #[test]
    fn test_order_loop_keep_going() {
        let dir = TempDir::new().unwrap();
        let mut session = loaded_session(&dir, Config::default().with_keep_going());
        let bad = write(&dir, "bad.csv", "1234567890123;1\n");
        let good = write(&dir, "good.csv", "5720092407427;1\n");

        let mut prompter = Prompter::new(
            Cursor::new(format!(
                "{}\nmissing.csv\n{}\nexit\n",
                bad.display(),
                good.display()
            )),
            Vec::new(),
        );
        session.run_order_loop(&mut prompter).unwrap();

        let stats = session.stats();
        assert_eq!(stats.batches_failed, 2);
        assert_eq!(stats.batches_processed, 1);
        // the failed processing still consumed batch #1
        assert_eq!(session.processed().batch(), 2);
    }

    #[test]
    fn test_reports_go_to_output_dir() {
        let dir = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let mut session = loaded_session(&dir, Config::default().with_output_dir(out.path()));
        let orders = write(&dir, "orders.csv", "5720092407427;1\n");

        let report = session.process_order_file(&orders).unwrap();

        assert_eq!(report, out.path().join("processed_orders.txt"));
        assert!(report.exists());
    }
}
