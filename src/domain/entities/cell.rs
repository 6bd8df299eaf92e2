use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDateTime, Timelike};

/// Spreadsheet coordinate such as `A6` or `CN6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellAddress {
    /// Zero-based row index.
    pub row: u32,
    /// Zero-based column index.
    pub col: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("empty cell address")]
    Empty,
    #[error("cell address `{0}` has no column letters")]
    MissingColumn(String),
    #[error("cell address `{0}` has no row number")]
    MissingRow(String),
    #[error("cell address `{0}` contains unexpected characters")]
    Malformed(String),
    #[error("cell address `{0}` is out of range")]
    OutOfRange(String),
}

impl CellAddress {
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    pub fn parse(text: &str) -> Result<Self, AddressError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AddressError::Empty);
        }

        let letters_end = text
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(text.len());
        let (letters, digits) = text.split_at(letters_end);
        if letters.is_empty() {
            return Err(AddressError::MissingColumn(text.to_string()));
        }
        if digits.is_empty() {
            return Err(AddressError::MissingRow(text.to_string()));
        }
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(AddressError::Malformed(text.to_string()));
        }

        let mut col: u32 = 0;
        for c in letters.chars() {
            let digit = (c.to_ascii_uppercase() as u8 - b'A') as u32 + 1;
            col = col
                .checked_mul(26)
                .and_then(|v| v.checked_add(digit))
                .ok_or_else(|| AddressError::OutOfRange(text.to_string()))?;
        }

        let row: u32 = digits
            .parse()
            .map_err(|_| AddressError::OutOfRange(text.to_string()))?;
        if row == 0 {
            return Err(AddressError::OutOfRange(text.to_string()));
        }

        Ok(Self::new(row - 1, col - 1))
    }

    pub fn column_letters(&self) -> String {
        let mut n = self.col + 1;
        let mut letters = Vec::new();
        while n > 0 {
            let rem = ((n - 1) % 26) as u8;
            letters.push((b'A' + rem) as char);
            n = (n - 1) / 26;
        }
        letters.iter().rev().collect()
    }
}

impl FromStr for CellAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column_letters(), self.row + 1)
    }
}

/// Typed view of a single cell as read from the workbook.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    Date(NaiveDateTime),
}

impl CellValue {
    /// Flattens the value into the string form carried by an extracted record.
    pub fn to_record_string(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(v) => v.clone(),
            CellValue::Number(v) => v.to_string(),
            CellValue::Bool(v) => v.to_string(),
            CellValue::Date(v) => {
                if v.time().num_seconds_from_midnight() == 0 {
                    v.format("%Y-%m-%d").to_string()
                } else {
                    v.format("%Y-%m-%dT%H:%M:%S").to_string()
                }
            }
        }
    }
}
