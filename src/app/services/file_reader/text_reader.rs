//! Whitespace-delimited reader for report data files

use std::path::Path;

use super::FileReader;
use super::cursor::LineCursor;
use crate::Result;
use crate::constants::{TXT_DELIMITERS, TXT_EXTENSION};

/// Reader for `.txt` report data files with blank separated cells
///
/// Runs of spaces or tabs between cells count as one separator. As with
/// [`CsvReader`](super::CsvReader), the last expected column runs to the end
/// of the line.
#[derive(Debug, Default)]
pub struct TextReader {
    cursor: LineCursor,
}

impl TextReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_columns(columns: usize) -> Self {
        let mut reader = Self::new();
        reader.set_columns(columns);
        reader
    }
}

impl FileReader for TextReader {
    fn extension(&self) -> &'static str {
        TXT_EXTENSION
    }

    fn open(&mut self, path: &Path) -> Result<()> {
        self.cursor.open(path, TXT_EXTENSION)
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
        let offset = self.cursor.begin_cell()?;
        let line = self.cursor.line();

        // skip the separator run in front of the cell
        let rest = line.get(offset..).unwrap_or_default();
        let start = offset + (rest.len() - rest.trim_start_matches(TXT_DELIMITERS).len());

        let end = if self.cursor.at_last_column() {
            Some(line.len())
        } else {
            line.get(start..)
                .and_then(|rest| rest.find(TXT_DELIMITERS))
                .map(|pos| start + pos)
        };

        self.cursor.finish_cell(start, end)
    }
}
