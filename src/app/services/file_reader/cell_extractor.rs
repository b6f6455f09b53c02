//! Typed cell extraction on top of [`FileReader`]
//!
//! Every typed read follows the same steps: take the next raw cell, trim
//! blanks and trailing line endings, check the numeric shape, run the
//! caller's predicate and convert.

use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

use super::FileReader;
use crate::constants::{CELL_BLANKS, CELL_LINE_ENDINGS};
use crate::{Error, Result};

/// Extra check run on a trimmed cell; `Err` carries the reason shown to the user
pub type Validator<'a> = &'a dyn Fn(&str) -> std::result::Result<(), String>;

static NATURAL_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("natural number pattern"));

static POSITIVE_DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+]?[0-9]*(?:\.[0-9]*)?$").expect("decimal pattern"));

const NATURAL_NUMBER_SHAPE: &str = "a natural number";
const DECIMAL_SHAPE: &str = "a decimal number";

/// Typed accessors available on every [`FileReader`]
pub trait CellExtractor: FileReader {
    /// Extract an unsigned integer made of digits only
    fn extract_u64(&mut self, validate: Option<Validator<'_>>) -> Result<u64> {
        let cell = clean_cell(self.next_cell()?);
        convert(cell, &NATURAL_NUMBER, NATURAL_NUMBER_SHAPE, validate)
    }

    /// Extract a non-negative decimal as `f32`
    fn extract_f32(&mut self, validate: Option<Validator<'_>>) -> Result<f32> {
        let cell = clean_cell(self.next_cell()?);
        convert(cell, &POSITIVE_DECIMAL, DECIMAL_SHAPE, validate)
    }

    /// Extract a non-negative decimal as `f64`
    fn extract_f64(&mut self, validate: Option<Validator<'_>>) -> Result<f64> {
        let cell = clean_cell(self.next_cell()?);
        convert(cell, &POSITIVE_DECIMAL, DECIMAL_SHAPE, validate)
    }

    /// Extract trimmed text; no shape check is applied
    fn extract_string(&mut self, validate: Option<Validator<'_>>) -> Result<String> {
        let cell = clean_cell(self.next_cell()?);
        run_validator(cell, validate)?;
        Ok(cell.to_string())
    }
}

impl<R: FileReader + ?Sized> CellExtractor for R {}

/// Trim blanks on both ends and stray `\r`/`\n` at the end
pub fn clean_cell(cell: &str) -> &str {
    let mut cell = cell.trim_start_matches(CELL_BLANKS);
    loop {
        let trimmed = cell
            .trim_end_matches(CELL_BLANKS)
            .trim_end_matches(CELL_LINE_ENDINGS);
        if trimmed.len() == cell.len() {
            return cell;
        }
        cell = trimmed;
    }
}

fn convert<T: FromStr>(
    cell: &str,
    shape: &Regex,
    shape_name: &str,
    validate: Option<Validator<'_>>,
) -> Result<T> {
    if !shape.is_match(cell) {
        return Err(Error::format(cell, shape_name));
    }

    run_validator(cell, validate)?;

    // the shape admits "", "+" and "." as well as integers too wide for the target type
    cell.parse::<T>().map_err(|_| Error::format(cell, shape_name))
}

fn run_validator(cell: &str, validate: Option<Validator<'_>>) -> Result<()> {
    match validate {
        Some(validate) => validate(cell).map_err(|message| Error::validation(cell, message)),
        None => Ok(()),
    }
}
