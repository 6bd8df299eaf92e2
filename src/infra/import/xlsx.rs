use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};

use crate::domain::entities::cell::{CellAddress, CellValue};
use crate::domain::entities::record::ExtractedRecord;

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("failed to parse workbook: {0}")]
    Parse(String),
    #[error("workbook has no sheets")]
    NoSheet,
}

impl From<calamine::Error> for ExtractError {
    fn from(err: calamine::Error) -> Self {
        ExtractError::Parse(err.to_string())
    }
}

pub fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::String(v) => CellValue::Text(v.clone()),
        Data::Float(v) => CellValue::Number(*v),
        Data::Int(v) => CellValue::Number(*v as f64),
        Data::Bool(v) => CellValue::Bool(*v),
        Data::DateTime(v) => match v.as_datetime() {
            Some(dt) if v.is_datetime() => CellValue::Date(dt),
            _ => CellValue::Number(v.as_f64()),
        },
        Data::DateTimeIso(v) => CellValue::Text(v.clone()),
        Data::DurationIso(v) => CellValue::Text(v.clone()),
        Data::Error(v) => CellValue::Text(v.to_string()),
        Data::Empty => CellValue::Empty,
    }
}

/// Reads the fixed addresses from the first sheet of an in-memory workbook.
///
/// Accepts any format calamine detects (xlsx, xlsm, xlsb, xls, ods). Cells
/// outside the used range come back as empty strings.
pub fn extract_record(bytes: &[u8]) -> Result<ExtractedRecord, ExtractError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ExtractError::NoSheet)??;

    Ok(record_from_range(&range))
}

pub fn record_from_range(range: &Range<Data>) -> ExtractedRecord {
    ExtractedRecord::from_lookup(|address: CellAddress| {
        range
            .get_value((address.row, address.col))
            .map(cell_value)
            .unwrap_or(CellValue::Empty)
    })
}
