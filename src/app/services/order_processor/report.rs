//! Fixed-width report rendering
//!
//! ```text
//! Order #1
//! ------------------------------------------------------------------------------------
//! Name                  |     Tax  |   Disc.  |    U.price  |     Quant.  |      Price
//! ------------------------------------------------------------------------------------
//! Fanta                 |    3.50  |    5.12  |       1.19  |       2.00  |       2.38
//! ------------------------------------------------------------------------------------
//! Total                                                                             2.38
//! ```

use std::fmt::Write as _;
use std::io::Write;

use super::ProcessedOrders;
use crate::app::models::ProcessedOrder;
use crate::constants::report::{
    AMOUNT_WIDTH, ELLIPSIS, HEADER, LINE_WIDTH, NAME_MAX_LEN, NAME_WIDTH, PERCENT_WIDTH,
    PRECISION, TOTAL_WIDTH,
};
use crate::{Error, Result};

impl ProcessedOrders {
    /// Render the report table
    ///
    /// # Errors
    ///
    /// [`Error::NothingProcessed`] when no batch was processed or loaded yet.
    pub fn render(&self) -> Result<String> {
        if !self.processed {
            return Err(Error::NothingProcessed);
        }

        let rule = "-".repeat(LINE_WIDTH);
        let mut out = String::new();

        // writing into a String cannot fail
        let _ = writeln!(out, "Order #{}", self.batch);
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "{HEADER}");
        let _ = writeln!(out, "{rule}");

        for (name, line) in &self.orders {
            let _ = writeln!(out, "{}", format_row(name, line));
        }

        let _ = writeln!(out, "{rule}");
        let _ = writeln!(
            out,
            "Total{:>width$.prec$}",
            self.total,
            width = TOTAL_WIDTH,
            prec = PRECISION
        );

        Ok(out)
    }

    /// Render the report and write it to `writer`
    pub fn write_report<W: Write>(&self, mut writer: W) -> Result<()> {
        let report = self.render()?;
        writer
            .write_all(report.as_bytes())
            .map_err(|e| Error::io("Failed to write report", e))?;
        writer
            .flush()
            .map_err(|e| Error::io("Failed to flush report", e))
    }
}

/// One table row; vertical bars land at offsets 22, 33, 44, 58 and 72
pub fn format_row(name: &str, line: &ProcessedOrder) -> String {
    format!(
        "{:<nw$}|{:>pw$.prec$}  |{:>pw$.prec$}  |{:>aw$.prec$}  |{:>aw$.prec$}  |{:>aw$.prec$}",
        truncate_name(name),
        line.tax_percent,
        line.discount_percent,
        line.unit_price,
        line.quantity,
        line.final_price,
        nw = NAME_WIDTH,
        pw = PERCENT_WIDTH,
        aw = AMOUNT_WIDTH,
        prec = PRECISION,
    )
}

/// Cut names longer than the column allows, marking the cut with an ellipsis
pub fn truncate_name(name: &str) -> String {
    if name.chars().count() <= NAME_MAX_LEN {
        return name.to_string();
    }

    let kept: String = name.chars().take(NAME_MAX_LEN - ELLIPSIS.len()).collect();
    format!("{kept}{ELLIPSIS}")
}
