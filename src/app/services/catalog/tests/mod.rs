//! Test utilities for catalog loading
//!
//! Provides sample catalog contents and a helper that loads a catalog from
//! a scratch `.csv` file.

use std::io::Write;

use crate::Result;
use crate::app::services::catalog::Catalog;
use crate::app::services::file_reader::CsvReader;
use crate::app::services::file_reader::FileReader;

mod orders_tests;

/// EAN-13 used by the sample rows
pub const FANTA_EAN13: u64 = 5720092407427;

/// Sample items file with a CRLF line, padded cells and a trailing blank line
pub fn sample_items_csv() -> String {
    "5720092407427;Fanta;1.21;3.5\r\n\
     5000112637922; Coca-Cola 0.5l ;1.45;\t12.00\n\
     4008400401621;Kinder Bueno;0.99;8.8\n\
     \n"
    .to_string()
}

/// Write `content` to a scratch `.csv` file and load it into `catalog`
pub fn load_from_csv<C: Catalog>(catalog: &mut C, content: &str) -> Result<()> {
    let mut temp_file = tempfile::Builder::new()
        .prefix("catalog_test_")
        .suffix(".csv")
        .tempfile()
        .unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file.flush().unwrap();

    let mut reader = CsvReader::new();
    reader.open(temp_file.path())?;
    catalog.load(&mut reader)
}
