//! Reusable cell predicates for [`CellExtractor`](super::CellExtractor)

use crate::constants::EAN13_LEN;

/// EAN-13 keys must be exactly 13 characters long
pub fn ean13(cell: &str) -> Result<(), String> {
    if cell.len() != EAN13_LEN {
        return Err(format!("EAN13 shall be {EAN13_LEN} digits long."));
    }
    Ok(())
}

/// Reject text cells that are empty after trimming
pub fn non_empty(cell: &str) -> Result<(), String> {
    if cell.is_empty() {
        return Err("Value shall not be empty.".to_string());
    }
    Ok(())
}
