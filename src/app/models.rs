//! Data models for order processing
//!
//! This module contains the record types stored in the catalogs and the
//! derived processed order produced by pricing.

use serde::{Deserialize, Serialize};

// =============================================================================
// Catalog Records
// =============================================================================

/// Catalog item keyed by EAN-13
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Item {
    /// Product name, also the key of processed orders
    pub name: String,

    /// Price excluding tax
    pub price_excl_tax: f64,

    /// Tax percentage applied on top of the price
    pub tax_percent: f64,
}

impl Item {
    pub fn new(name: impl Into<String>, price_excl_tax: f64, tax_percent: f64) -> Self {
        Self {
            name: name.into(),
            price_excl_tax,
            tax_percent,
        }
    }

    /// Price including tax, before any discount
    pub fn price_incl_tax(&self) -> f64 {
        self.price_excl_tax * (1.0 + self.tax_percent / 100.0)
    }
}

/// Discount for one EAN-13
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Discount {
    /// Discount percentage subtracted from the taxed price
    pub percent: f64,
}

impl Discount {
    pub fn new(percent: f64) -> Self {
        Self { percent }
    }
}

/// Ordered quantity for one EAN-13
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Order {
    pub quantity: f64,
}

impl Order {
    pub fn new(quantity: f64) -> Self {
        Self { quantity }
    }
}

// =============================================================================
// Derived Records
// =============================================================================

/// Priced order line, keyed by item name in [`ProcessedOrders`]
///
/// [`ProcessedOrders`]: crate::app::services::order_processor::ProcessedOrders
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct ProcessedOrder {
    pub tax_percent: f64,

    /// 0 when the item has no discount
    pub discount_percent: f64,

    pub quantity: f64,

    /// Price of one unit including tax and discount
    pub unit_price: f64,

    /// `unit_price * quantity`
    pub final_price: f64,
}

impl ProcessedOrder {
    /// Price an order line from its item, optional discount and order
    pub fn price(item: &Item, discount: Option<&Discount>, order: &Order) -> Self {
        let discount_percent = discount.map_or(0.0, |d| d.percent);
        let unit_price = item.price_excl_tax
            * (1.0 + item.tax_percent / 100.0)
            * (1.0 - discount_percent / 100.0);

        Self {
            tax_percent: item.tax_percent,
            discount_percent,
            quantity: order.quantity,
            unit_price,
            final_price: unit_price * order.quantity,
        }
    }
}
