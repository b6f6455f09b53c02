//! Application constants for the order processor
//!
//! This module contains file format constants, catalog column counts,
//! report layout widths and CLI defaults used throughout the crate.

// =============================================================================
// File Formats
// =============================================================================

/// Extension required by the semicolon-delimited catalog reader
pub const CSV_EXTENSION: &str = "csv";

/// Extension required by the whitespace-delimited report reader
pub const TXT_EXTENSION: &str = "txt";

/// Cell delimiter for catalog files
pub const CSV_DELIMITER: char = ';';

/// Characters that separate cells in report data files
pub const TXT_DELIMITERS: &[char] = &[' ', '\t'];

/// Characters trimmed from both ends of every cell
pub const CELL_BLANKS: &[char] = &[' ', '\t'];

/// Characters additionally trimmed from the end of every cell
pub const CELL_LINE_ENDINGS: &[char] = &['\r', '\n'];

// =============================================================================
// Catalog Layouts
// =============================================================================

/// Column counts for each catalog file type
pub mod columns {
    /// ean13;name;price_excl_tax;tax_percent
    pub const ITEMS: usize = 4;

    /// ean13;discount_percent
    pub const DISCOUNTS: usize = 2;

    /// ean13;quantity
    pub const ORDERS: usize = 2;

    /// name tax discount unit_price quantity final_price
    pub const PROCESSED_ORDERS: usize = 6;
}

/// Required length of an EAN-13 identifier
pub const EAN13_LEN: usize = 13;

// =============================================================================
// Report Layout
// =============================================================================

/// Fixed-width report table layout
pub mod report {
    /// Longest item name printed before truncation
    pub const NAME_MAX_LEN: usize = 20;

    /// Suffix appended to truncated names
    pub const ELLIPSIS: &str = "...";

    /// Width of the name column, up to the first vertical bar
    pub const NAME_WIDTH: usize = 22;

    /// Width of the tax and discount columns
    pub const PERCENT_WIDTH: usize = 8;

    /// Width of the unit price, quantity and final price columns
    pub const AMOUNT_WIDTH: usize = 11;

    /// Width of the total value following the "Total" label
    pub const TOTAL_WIDTH: usize = 79;

    /// Decimal places for every numeric column
    pub const PRECISION: usize = 2;

    /// Table header row
    pub const HEADER: &str =
        "Name                  |     Tax  |   Disc.  |    U.price  |     Quant.  |      Price";

    /// Full width of every table row
    pub const LINE_WIDTH: usize = 84;
}

// =============================================================================
// CLI Defaults
// =============================================================================

/// Input that ends the interactive order loop
pub const DEFAULT_EXIT_WORD: &str = "exit";

/// Prefix prepended to generated report file names
pub const DEFAULT_REPORT_PREFIX: &str = "processed_";

/// Sequence number of the first order batch
pub const FIRST_BATCH: u64 = 1;

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";
