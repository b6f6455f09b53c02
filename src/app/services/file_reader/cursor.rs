//! File handle and per-line offset state shared by the readers

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use crate::{Error, Result};

/// Open file plus the state of the line currently being split into cells
#[derive(Debug, Default)]
pub struct LineCursor {
    reader: Option<BufReader<File>>,
    path: Option<PathBuf>,
    line: String,
    line_number: usize,
    columns: usize,
    /// Cells handed out from the current line
    cells_read: usize,
    /// End offset of the last cell handed out, `None` at the start of a line
    end_offset: Option<usize>,
}

impl LineCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the extension, close the previous file and open `path`
    pub fn open(&mut self, path: &Path, extension: &str) -> Result<()> {
        if path.extension().and_then(|ext| ext.to_str()) != Some(extension) {
            return Err(Error::invalid_extension(
                path.display().to_string(),
                extension,
            ));
        }

        self.close();

        let file = File::open(path)
            .map_err(|e| Error::io(format!("Failed to open file {}", path.display()), e))?;

        debug!("Opened {}", path.display());
        self.reader = Some(BufReader::new(file));
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    pub fn close(&mut self) {
        if let Some(path) = self.path.take() {
            debug!("Closed {}", path.display());
        }
        self.reader = None;
        self.line.clear();
        self.line_number = 0;
        self.reset_offsets();
    }

    pub fn is_open(&self) -> bool {
        self.reader.is_some()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Read the next line, dropping its `\n` but keeping any `\r`
    pub fn read_line(&mut self) -> Result<bool> {
        let reader = self.reader.as_mut().ok_or(Error::FileNotOpen)?;

        self.cells_read = 0;
        self.end_offset = None;
        self.line.clear();

        let bytes = reader.read_line(&mut self.line).map_err(|e| {
            Error::io(
                format!("Failed to read line {}", self.line_number + 1),
                e,
            )
        })?;

        if bytes == 0 {
            return Ok(false);
        }

        if self.line.ends_with('\n') {
            self.line.pop();
        }
        self.line_number += 1;
        trace!("Line {}: {:?}", self.line_number, self.line);

        Ok(true)
    }

    pub fn line(&self) -> &str {
        &self.line
    }

    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn set_columns(&mut self, columns: usize) {
        self.columns = columns;
    }

    /// Check the column budget and return the start offset of the next cell
    pub fn begin_cell(&self) -> Result<usize> {
        if self.cells_read >= self.columns {
            return Err(Error::no_more_cells(self.line_number, self.columns));
        }
        Ok(self.end_offset.map_or(0, |end| end + 1))
    }

    /// Whether the next cell is the last expected column
    pub fn at_last_column(&self) -> bool {
        self.cells_read + 1 == self.columns
    }

    /// Commit the cell bounds found by a reader and return the cell text
    ///
    /// An absent or empty range means the cell could not be found.
    pub fn finish_cell(&mut self, start: usize, end: Option<usize>) -> Result<&str> {
        match end {
            Some(end) if end > start => {
                self.end_offset = Some(end);
                self.cells_read += 1;
                Ok(&self.line[start..end])
            }
            _ => Err(Error::cell_not_found(
                self.line_number,
                self.cells_read + 1,
            )),
        }
    }

    fn reset_offsets(&mut self) {
        self.cells_read = 0;
        self.end_offset = None;
    }
}
