use chrono::{DateTime, Local};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::entities::cell::{CellAddress, CellValue};

/// Addresses read from row 6 of the first sheet, in submission order.
pub const CELL_ADDRESSES: [&str; 27] = [
    "A6", "F6", "H6", "I6", "CN6", "CO6", "CP6", "CR6", "CS6", "CT6", "DA6", "DD6", "DE6", "DI6",
    "DQ6", "EG6", "EM6", "EN6", "EO6", "EP6", "FB6", "FL6", "FV6", "FY6", "FZ6", "GE6", "GF6",
];

/// Flat address/value mapping produced from one uploaded workbook.
///
/// Always holds every entry of [`CELL_ADDRESSES`] in that order. Values are
/// fixed once the record is built.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedRecord {
    entries: Vec<(&'static str, String)>,
    extracted_at: DateTime<Local>,
}

impl ExtractedRecord {
    /// Builds a record by asking `lookup` for each fixed address in order.
    pub fn from_lookup<F>(mut lookup: F) -> Self
    where
        F: FnMut(CellAddress) -> CellValue,
    {
        let entries = fixed_addresses()
            .map(|(label, address)| (label, lookup(address).to_record_string()))
            .collect();
        Self {
            entries,
            extracted_at: Local::now(),
        }
    }

    #[allow(dead_code)]
    pub fn get(&self, address: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(label, _)| label.eq_ignore_ascii_case(address))
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(label, value)| (*label, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn extracted_at(&self) -> DateTime<Local> {
        self.extracted_at
    }

    /// Count of addresses that produced a non-empty value.
    pub fn filled_count(&self) -> usize {
        self.entries.iter().filter(|(_, v)| !v.is_empty()).count()
    }
}

impl Serialize for ExtractedRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, value) in &self.entries {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

fn fixed_addresses() -> impl Iterator<Item = (&'static str, CellAddress)> {
    CELL_ADDRESSES.iter().map(|label| {
        let address = match CellAddress::parse(label) {
            Ok(address) => address,
            Err(err) => unreachable!("fixed address table is invalid: {err}"),
        };
        (*label, address)
    })
}
