//! Order pricing and report generation
//!
//! [`ProcessedOrders`] joins one order batch with the item and discount
//! catalogs, keeps the priced lines keyed by item name together with the
//! batch total, and renders them as a fixed-width text table.
//!
//! ## Architecture
//!
//! - [`processor`] - Join and pricing of an order batch
//! - [`report`] - Fixed-width table rendering
//! - [`loader`] - Reading priced lines back from report data files
//!
//! ## Usage
//!
//! ```rust
//! use order_processor::{Discount, Discounts, Item, Items, Order, Orders, ProcessedOrders};
//!
//! # fn example() -> order_processor::Result<()> {
//! let items: Items = [(5720092407427, Item::new("Fanta", 1.21, 3.5))].into_iter().collect();
//! let discounts: Discounts = [(5720092407427, Discount::new(5.12))].into_iter().collect();
//! let orders: Orders = [(5720092407427, Order::new(2.0))].into_iter().collect();
//!
//! let mut processed = ProcessedOrders::new();
//! processed.process(Some(&orders), Some(&items), Some(&discounts), 1)?;
//! println!("{}", processed.render()?);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod processor;
pub mod report;

#[cfg(test)]
pub mod tests;

use std::collections::BTreeMap;

use crate::app::models::ProcessedOrder;

/// Priced order lines of one batch, keyed by item name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessedOrders {
    /// Priced lines in lexicographic name order
    pub(crate) orders: BTreeMap<String, ProcessedOrder>,

    /// Sum of all final prices
    pub(crate) total: f64,

    /// Sequence number of the batch the lines belong to
    pub(crate) batch: u64,

    /// Whether a batch was processed or loaded since creation
    pub(crate) processed: bool,
}

impl ProcessedOrders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Priced line for an item name
    pub fn get(&self, name: &str) -> Option<&ProcessedOrder> {
        self.orders.get(name)
    }

    /// Priced lines in lexicographic name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProcessedOrder)> {
        self.orders.iter().map(|(name, order)| (name.as_str(), order))
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn batch(&self) -> u64 {
        self.batch
    }

    /// Label the current lines with a batch sequence number
    pub fn set_batch(&mut self, batch: u64) {
        self.batch = batch;
    }

    /// Whether a report can be rendered
    pub fn is_processed(&self) -> bool {
        self.processed
    }

    fn reset(&mut self) {
        self.orders.clear();
        self.total = 0.0;
        self.processed = false;
    }
}
