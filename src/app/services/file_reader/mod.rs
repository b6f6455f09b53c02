//! Line-oriented file readers with cell extraction
//!
//! This module provides the shared parsing engine used by every catalog type.
//! A reader opens one file at a time, hands out its lines one by one and splits
//! the current line into a caller-configured number of cells.
//!
//! ## Architecture
//!
//! - [`cursor`] - File handle, current line and per-line offset state
//! - [`csv_reader`] - Semicolon-delimited reader for `.csv` catalog files
//! - [`text_reader`] - Whitespace-delimited reader for `.txt` report files
//! - [`cell_extractor`] - Trimming, shape validation and typed conversion of cells
//! - [`validators`] - Reusable predicates for [`CellExtractor`] calls
//!
//! ## Usage
//!
//! ```rust,no_run
//! use order_processor::app::services::file_reader::{validators, CellExtractor, CsvReader, FileReader};
//!
//! # fn example() -> order_processor::Result<()> {
//! let mut reader = CsvReader::new();
//! reader.open(std::path::Path::new("orders.csv"))?;
//! reader.set_columns(2);
//!
//! while reader.read_line()? {
//!     let ean13 = reader.extract_u64(Some(&validators::ean13))?;
//!     let quantity = reader.extract_f64(None)?;
//!     println!("{ean13}: {quantity}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod cell_extractor;
pub mod csv_reader;
pub mod cursor;
pub mod text_reader;
pub mod validators;

#[cfg(test)]
pub mod tests;

use std::path::Path;

use crate::Result;

// Re-export main types for easy access
pub use cell_extractor::{CellExtractor, Validator};
pub use csv_reader::CsvReader;
pub use text_reader::TextReader;

/// Sequential line source with cell extraction
///
/// Implementors differ only in the file extension they accept and in how a
/// line is split into cells. The column count must be set by the caller
/// before rows are read; the last expected column always consumes the rest
/// of the line.
pub trait FileReader {
    /// Extension (without the dot) a file must carry to be opened
    fn extension(&self) -> &'static str;

    /// Open a file, closing any previously opened one
    ///
    /// Fails before touching the file system when the extension does not match.
    fn open(&mut self, path: &Path) -> Result<()>;

    /// Release the current file handle, if any
    fn close(&mut self);

    fn is_open(&self) -> bool;

    /// Path of the currently open file
    fn path(&self) -> Option<&Path>;

    /// Read the next line and reset the cell offsets
    ///
    /// Returns `Ok(false)` at end of file.
    fn read_line(&mut self) -> Result<bool>;

    /// Raw text of the last line read, without its trailing newline
    fn current_line(&self) -> &str;

    /// 1-based number of the last line read, 0 before the first read
    fn line_number(&self) -> usize;

    /// Expected number of cells per line
    fn columns(&self) -> usize;

    fn set_columns(&mut self, columns: usize);

    /// Next raw cell of the current line
    fn next_cell(&mut self) -> Result<&str>;
}
