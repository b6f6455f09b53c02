//! Semicolon-delimited reader for catalog files

use std::path::Path;

use super::FileReader;
use super::cursor::LineCursor;
use crate::Result;
use crate::constants::{CSV_DELIMITER, CSV_EXTENSION};

/// Reader for `.csv` catalog files with `;` separated cells
///
/// Cells are located by scanning for the next `;` after the previous cell.
/// The last expected column runs to the end of the line, so it may itself
/// contain semicolons.
#[derive(Debug, Default)]
pub struct CsvReader {
    cursor: LineCursor,
}

impl CsvReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader already configured for `columns` cells per line
    pub fn with_columns(columns: usize) -> Self {
        let mut reader = Self::new();
        reader.set_columns(columns);
        reader
    }
}

impl FileReader for CsvReader {
    fn extension(&self) -> &'static str {
        CSV_EXTENSION
    }

    fn open(&mut self, path: &Path) -> Result<()> {
        self.cursor.open(path, CSV_EXTENSION)
    }

    fn close(&mut self) {
        self.cursor.close();
    }

    fn is_open(&self) -> bool {
        self.cursor.is_open()
    }

    fn path(&self) -> Option<&Path> {
        self.cursor.path()
    }

    fn read_line(&mut self) -> Result<bool> {
        self.cursor.read_line()
    }

    fn current_line(&self) -> &str {
        self.cursor.line()
    }

    fn line_number(&self) -> usize {
        self.cursor.line_number()
    }

    fn columns(&self) -> usize {
        self.cursor.columns()
    }

    fn set_columns(&mut self, columns: usize) {
        self.cursor.set_columns(columns);
    }

    fn next_cell(&mut self) -> Result<&str> {
        let start = self.cursor.begin_cell()?;
        let line = self.cursor.line();

        let end = if self.cursor.at_last_column() {
            Some(line.len())
        } else {
            line.get(start..)
                .and_then(|rest| rest.find(CSV_DELIMITER))
                .map(|pos| start + pos)
        };

        self.cursor.finish_cell(start, end)
    }
}
