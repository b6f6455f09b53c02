//! Test utilities for order processing
//!
//! Builds small in-memory catalogs around the Fanta sample item.

use crate::app::models::{Discount, Item, Order};
use crate::app::services::catalog::{Discounts, Items, Orders};


pub const FANTA: u64 = 5720092407427;
pub const COLA: u64 = 5000112637922;
pub const BUENO: u64 = 4008400401621;

/// Helper to create the sample item catalog
pub fn sample_items() -> Items {
    [
        (FANTA, Item::new("Fanta", 1.21, 3.5)),
        (COLA, Item::new("Coca-Cola", 1.45, 12.0)),
        (BUENO, Item::new("Kinder Bueno", 0.99, 8.8)),
    ]
    .into_iter()
    .collect()
}

/// Helper to create a discount catalog with a single entry
pub fn fanta_discount() -> Discounts {
    [(FANTA, Discount::new(5.12))].into_iter().collect()
}

/// Helper to create an order batch from `(ean13, quantity)` pairs
pub fn orders_of(lines: &[(u64, f64)]) -> Orders {
    lines
        .iter()
        .map(|&(ean13, quantity)| (ean13, Order::new(quantity)))
        .collect()
}

/// Compare floats produced by the pricing formula
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
