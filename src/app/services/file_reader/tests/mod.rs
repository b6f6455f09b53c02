//! Test utilities for file reader testing
//!
//! Helpers here write scratch files with the suffix a reader expects so the
//! extension check passes.

use std::io::Write;
use tempfile::NamedTempFile;


/// Helper to create a temporary file with given content and suffix (e.g. ".csv")
pub fn create_temp_file(content: &str, suffix: &str) -> NamedTempFile {
    let mut temp_file = tempfile::Builder::new()
        .prefix("reader_test_")
        .suffix(suffix)
        .tempfile()
        .unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

/// Helper to create a temporary `.csv` file
pub fn create_temp_csv(content: &str) -> NamedTempFile {
    create_temp_file(content, ".csv")
}

/// Helper to create a temporary `.txt` file
pub fn create_temp_txt(content: &str) -> NamedTempFile {
    create_temp_file(content, ".txt")
}
