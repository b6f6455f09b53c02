//! Item catalog: `ean13;name;price_excl_tax;tax_percent`

use std::collections::BTreeMap;

use super::{Catalog, load_rows};
use crate::Result;
use crate::app::models::Item;
use crate::app::services::file_reader::{CellExtractor, FileReader, validators};
use crate::constants::columns;

const OBJECT_TYPE: &str = "Items";

/// Items indexed by EAN-13
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Items {
    items: BTreeMap<u64, Item>,
}

impl Items {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an item; `None` when the key is unknown
    pub fn get(&self, ean13: u64) -> Option<&Item> {
        self.items.get(&ean13)
    }

    pub fn contains(&self, ean13: u64) -> bool {
        self.items.contains_key(&ean13)
    }

    /// Insert or replace an item, returning the replaced one
    pub fn insert(&mut self, ean13: u64, item: Item) -> Option<Item> {
        self.items.insert(ean13, item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in ascending EAN-13 order
    pub fn iter(&self) -> impl Iterator<Item = (u64, &Item)> {
        self.items.iter().map(|(ean13, item)| (*ean13, item))
    }
}

impl FromIterator<(u64, Item)> for Items {
    fn from_iter<I: IntoIterator<Item = (u64, Item)>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl Catalog for Items {
    fn object_type(&self) -> &'static str {
        OBJECT_TYPE
    }

    fn load(&mut self, reader: &mut dyn FileReader) -> Result<()> {
        self.items.clear();

        let items = &mut self.items;
        load_rows(reader, columns::ITEMS, OBJECT_TYPE, |reader| {
            let ean13 = reader.extract_u64(Some(&validators::ean13))?;
            let name = reader.extract_string(None)?;
            let price_excl_tax = reader.extract_f64(None)?;
            let tax_percent = reader.extract_f64(None)?;

            items.insert(ean13, Item::new(name, price_excl_tax, tax_percent));
            Ok(())
        })?;

        Ok(())
    }
}
