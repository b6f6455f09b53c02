//! Tests for order batch loading

use super::*;
use crate::Error;
use crate::app::models::Order;
use crate::app::services::catalog::{Catalog, Orders};
use crate::app::services::file_reader::{CsvReader, FileReader, TextReader};

#[test]
fn test_load_orders() {
    let mut orders = Orders::new();
    load_from_csv(&mut orders, "5720092407427;1.00\r\n4008400401621;+3\n").unwrap();

    assert_eq!(orders.len(), 2);
    assert_eq!(orders.get(FANTA_EAN13), Some(&Order::new(1.0)));
    assert_eq!(orders.get(4008400401621), Some(&Order::new(3.0)));
}

#[test]
fn test_unknown_keys_are_accepted_at_load_time() {
    let mut orders = Orders::new();
    load_from_csv(&mut orders, "9999999999999;2\n").unwrap();

    assert_eq!(orders.get(9999999999999), Some(&Order::new(2.0)));
}

#[test]
fn test_empty_file_gives_empty_batch() {
    let mut orders = Orders::new();
    load_from_csv(&mut orders, "").unwrap();

    assert!(orders.is_empty());
}

#[test]
fn test_letters_in_quantity_fail() {
    let mut orders = Orders::new();
    let err = load_from_csv(&mut orders, "5720092407427;one\n").unwrap_err();

    assert!(err.is_format());
}

#[test]
fn test_load_requires_open_reader() {
    let mut orders = Orders::new();
    let mut reader = CsvReader::new();

    assert!(matches!(orders.load(&mut reader), Err(Error::FileNotOpen)));
}

#[test]
fn test_load_sets_column_count() {
    let mut orders = Orders::new();
    let mut reader = TextReader::with_columns(6);
    assert_eq!(reader.columns(), 6);

    let _ = orders.load(&mut reader);
    assert_eq!(reader.columns(), 2);
}
