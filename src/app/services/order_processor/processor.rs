//! Join and pricing of an order batch

use tracing::{debug, info};

use super::ProcessedOrders;
use crate::app::models::ProcessedOrder;
use crate::app::services::catalog::{Discounts, Items, Orders};
use crate::{Error, Result};

impl ProcessedOrders {
    /// Price every order of the batch against `items` and `discounts`
    ///
    /// Previous results are discarded first, so repeated calls with the same
    /// inputs give the same lines and total. `discounts` may be absent, in
    /// which case no line gets a discount. Two keys sharing an item name
    /// collapse into one line, the later key in EAN-13 order winning.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingInput`] when `orders` or `items` is absent
    /// - [`Error::MissingItem`] when an order key is not in `items`
    pub fn process(
        &mut self,
        orders: Option<&Orders>,
        items: Option<&Items>,
        discounts: Option<&Discounts>,
        batch: u64,
    ) -> Result<()> {
        let (Some(orders), Some(items)) = (orders, items) else {
            return Err(Error::missing_input("orders & items can't be empty."));
        };

        self.reset();

        for (ean13, order) in orders.iter() {
            let item = items.get(ean13).ok_or_else(|| Error::missing_item(ean13))?;
            let discount = discounts.and_then(|discounts| discounts.get(ean13));

            let line = ProcessedOrder::price(item, discount, order);
            debug!(
                "Priced {} ({}): unit {:.4}, final {:.4}",
                item.name, ean13, line.unit_price, line.final_price
            );

            self.total += line.final_price;
            self.orders.insert(item.name.clone(), line);
        }

        self.batch = batch;
        self.processed = true;

        info!(
            "Processed order #{}: {} lines, total {:.2}",
            batch,
            self.orders.len(),
            self.total
        );
        Ok(())
    }
}
