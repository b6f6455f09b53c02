//! Order Processor Library
//!
//! A Rust library for pricing retail order batches against item and discount
//! catalogs loaded from delimited text files.
//!
//! This library provides tools for:
//! - Reading semicolon-delimited catalog files and whitespace-delimited report files
//!   cell by cell, with column-count enforcement and offset tracking
//! - Typed cell extraction with shape validation and injectable predicates
//! - Loading item, discount and order catalogs keyed by EAN-13
//! - Joining orders with items and discounts into priced order lines
//! - Rendering fixed-width order reports

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod catalog;
        pub mod file_reader;
        pub mod order_processor;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
    pub mod session;
}

// Re-export commonly used types
pub use app::models::{Discount, Item, Order, ProcessedOrder};
pub use app::services::catalog::{Catalog, Discounts, Items, Orders};
pub use app::services::file_reader::{CellExtractor, CsvReader, FileReader, TextReader};
pub use app::services::order_processor::ProcessedOrders;
pub use cli::session::{Session, SessionStats};
pub use config::Config;

/// Result type alias for the order processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for catalog reading, order processing and report output
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// File name does not carry the extension the reader expects
    #[error("Bad format (extension) for file {path}: expected '.{expected}'")]
    InvalidExtension { path: String, expected: String },

    /// A line was requested while no file is open
    #[error("Can't read line because file is not opened")]
    FileNotOpen,

    /// More cells were requested than the configured column count
    #[error("There are no more cells within line {line}: {columns} column(s) expected")]
    NoMoreCells { line: usize, columns: usize },

    /// A cell could not be located within the current line
    #[error("Can't find cell {column} within line {line}")]
    CellNotFound { line: usize, column: usize },

    /// Cell text does not match the expected numeric shape
    #[error("\"{value}\" is not {expected}.")]
    Format { value: String, expected: String },

    /// Cell text failed a caller-supplied validation
    #[error("\"{value}\" is not valid. {message}")]
    Validation { value: String, message: String },

    /// An order references an identifier missing from the items catalog
    #[error("can't find order for item {ean13} within items.")]
    MissingItem { ean13: u64 },

    /// Processing was invoked without a required input catalog
    #[error("Missing input: {message}")]
    MissingInput { message: String },

    /// A report was requested before any order was processed
    #[error("Didn't process any order yet.")]
    NothingProcessed,

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an invalid extension error
    pub fn invalid_extension(path: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::InvalidExtension {
            path: path.into(),
            expected: expected.into(),
        }
    }

    /// Create a no-more-cells error
    pub fn no_more_cells(line: usize, columns: usize) -> Self {
        Self::NoMoreCells { line, columns }
    }

    /// Create a cell-not-found error
    pub fn cell_not_found(line: usize, column: usize) -> Self {
        Self::CellNotFound { line, column }
    }

    /// Create a format error
    pub fn format(value: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::Format {
            value: value.into(),
            expected: expected.into(),
        }
    }

    /// Create a validation error
    pub fn validation(value: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            value: value.into(),
            message: message.into(),
        }
    }

    /// Create a missing item error
    pub fn missing_item(ean13: u64) -> Self {
        Self::MissingItem { ean13 }
    }

    /// Create a missing input error
    pub fn missing_input(message: impl Into<String>) -> Self {
        Self::MissingInput {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether the error came from cell shape checking
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }

    /// Whether the error came from a caller-supplied validation
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
