//! Reading priced lines back from report data files
//!
//! Report data files are whitespace-delimited with six columns:
//! `name tax discount unit_price quantity final_price`.

use crate::Result;
use crate::app::models::ProcessedOrder;
use crate::app::services::catalog::{Catalog, load_rows};
use crate::app::services::file_reader::{CellExtractor, FileReader, validators};
use crate::constants::columns;

use super::ProcessedOrders;

const OBJECT_TYPE: &str = "ProcessedOrders";

impl Catalog for ProcessedOrders {
    fn object_type(&self) -> &'static str {
        OBJECT_TYPE
    }

    /// Replace the lines with those of a report data file
    ///
    /// The total is recomputed from the final prices; the batch number is
    /// left unchanged.
    fn load(&mut self, reader: &mut dyn FileReader) -> Result<()> {
        self.reset();

        let orders = &mut self.orders;
        let total = &mut self.total;
        load_rows(reader, columns::PROCESSED_ORDERS, OBJECT_TYPE, |reader| {
            let name = reader.extract_string(Some(&validators::non_empty))?;
            let line = ProcessedOrder {
                tax_percent: reader.extract_f64(None)?,
                discount_percent: reader.extract_f64(None)?,
                unit_price: reader.extract_f64(None)?,
                quantity: reader.extract_f64(None)?,
                final_price: reader.extract_f64(None)?,
            };

            *total += line.final_price;
            orders.insert(name, line);
            Ok(())
        })?;

        self.processed = true;
        Ok(())
    }
}
