//! Order batch: `ean13;quantity`

use std::collections::BTreeMap;

use super::{Catalog, load_rows};
use crate::Result;
use crate::app::models::Order;
use crate::app::services::file_reader::{CellExtractor, FileReader, validators};
use crate::constants::columns;

const OBJECT_TYPE: &str = "Orders";

/// One order batch indexed by EAN-13
///
/// Keys are not checked against the item catalog here; that happens when
/// the batch is processed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Orders {
    orders: BTreeMap<u64, Order>,
}

impl Orders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, ean13: u64) -> Option<&Order> {
        self.orders.get(&ean13)
    }

    pub fn insert(&mut self, ean13: u64, order: Order) -> Option<Order> {
        self.orders.insert(ean13, order)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Orders in ascending EAN-13 order
    pub fn iter(&self) -> impl Iterator<Item = (u64, &Order)> {
        self.orders.iter().map(|(ean13, order)| (*ean13, order))
    }
}

impl FromIterator<(u64, Order)> for Orders {
    fn from_iter<I: IntoIterator<Item = (u64, Order)>>(iter: I) -> Self {
        Self {
            orders: iter.into_iter().collect(),
        }
    }
}

impl Catalog for Orders {
    fn object_type(&self) -> &'static str {
        OBJECT_TYPE
    }

    fn load(&mut self, reader: &mut dyn FileReader) -> Result<()> {
        self.orders.clear();

        let orders = &mut self.orders;
        load_rows(reader, columns::ORDERS, OBJECT_TYPE, |reader| {
            let ean13 = reader.extract_u64(Some(&validators::ean13))?;
            let quantity = reader.extract_f64(None)?;

            orders.insert(ean13, Order::new(quantity));
            Ok(())
        })?;

        Ok(())
    }
}
