//! Discount catalog: `ean13;discount_percent`

use std::collections::BTreeMap;

use super::{Catalog, load_rows};
use crate::Result;
use crate::app::models::Discount;
use crate::app::services::file_reader::{CellExtractor, FileReader, validators};
use crate::constants::columns;

const OBJECT_TYPE: &str = "Discounts";

/// Discounts indexed by EAN-13
///
/// A key without an entry has no discount.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Discounts {
    discounts: BTreeMap<u64, Discount>,
}

impl Discounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, ean13: u64) -> Option<&Discount> {
        self.discounts.get(&ean13)
    }

    /// Discount percentage for `ean13`, 0 when there is none
    pub fn percent_for(&self, ean13: u64) -> f64 {
        self.get(ean13).map_or(0.0, |discount| discount.percent)
    }

    pub fn insert(&mut self, ean13: u64, discount: Discount) -> Option<Discount> {
        self.discounts.insert(ean13, discount)
    }

    pub fn len(&self) -> usize {
        self.discounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.discounts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, &Discount)> {
        self.discounts.iter().map(|(ean13, discount)| (*ean13, discount))
    }
}

impl FromIterator<(u64, Discount)> for Discounts {
    fn from_iter<I: IntoIterator<Item = (u64, Discount)>>(iter: I) -> Self {
        Self {
            discounts: iter.into_iter().collect(),
        }
    }
}

impl Catalog for Discounts {
    fn object_type(&self) -> &'static str {
        OBJECT_TYPE
    }

    fn load(&mut self, reader: &mut dyn FileReader) -> Result<()> {
        self.discounts.clear();

        let discounts = &mut self.discounts;
        load_rows(reader, columns::DISCOUNTS, OBJECT_TYPE, |reader| {
            let ean13 = reader.extract_u64(Some(&validators::ean13))?;
            let percent = reader.extract_f64(None)?;

            discounts.insert(ean13, Discount::new(percent));
            Ok(())
        })?;

        Ok(())
    }
}
