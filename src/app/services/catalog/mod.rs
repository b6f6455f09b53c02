//! Keyed catalogs loaded wholesale from delimited files
//!
//! Each catalog owns an ordered map keyed by EAN-13. Loading clears the map,
//! configures the reader's column count and turns every non-blank line into
//! one record. Lookups return `Option`, so an absent discount is not an error
//! while callers can still treat an absent item as one.

pub mod discounts;
pub mod items;
pub mod orders;

#[cfg(test)]
pub mod tests;

use tracing::{debug, info, warn};

use crate::Result;
use crate::app::services::file_reader::FileReader;

// Re-export key types for convenience
pub use discounts::Discounts;
pub use items::Items;
pub use orders::Orders;

/// A collection that can be (re)loaded from a [`FileReader`]
pub trait Catalog {
    /// Human-readable catalog name used in prompts and log lines
    fn object_type(&self) -> &'static str;

    /// Replace the catalog contents with the rows of the reader's open file
    fn load(&mut self, reader: &mut dyn FileReader) -> Result<()>;
}

/// Drive `row` once per non-blank line of `reader` and return the row count
///
/// The reader is configured for `columns` cells before the first line.
/// A failing row stops the load; the error is logged with its line number
/// and propagated unchanged.
pub(crate) fn load_rows<F>(
    reader: &mut dyn FileReader,
    columns: usize,
    object_type: &str,
    mut row: F,
) -> Result<usize>
where
    F: FnMut(&mut dyn FileReader) -> Result<()>,
{
    reader.set_columns(columns);

    let mut rows = 0;
    while reader.read_line()? {
        if reader.current_line().trim().is_empty() {
            debug!("{}: skipping blank line {}", object_type, reader.line_number());
            continue;
        }

        row(&mut *reader).inspect_err(|e| {
            warn!(
                "{}: line {} rejected: {}",
                object_type,
                reader.line_number(),
                e
            );
        })?;
        rows += 1;
    }

    match reader.path() {
        Some(path) => info!("Loaded {} {} rows from {}", rows, object_type, path.display()),
        None => info!("Loaded {} {} rows", rows, object_type),
    }

    Ok(rows)
}
