use crate::domain::entities::record::ExtractedRecord;

/// In-memory state shared by the import and submit flows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    record: Option<ExtractedRecord>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) -> Option<&ExtractedRecord> {
        self.record.as_ref()
    }

    pub fn has_record(&self) -> bool {
        self.record.is_some()
    }

    /// Swaps in a freshly extracted record, discarding the previous one whole.
    pub fn replace_record(&mut self, record: ExtractedRecord) -> Option<ExtractedRecord> {
        self.record.replace(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::cell::{CellAddress, CellValue};

    fn record_with_a6(value: &str) -> ExtractedRecord {
        let value = value.to_string();
        ExtractedRecord::from_lookup(move |address| {
            if address == CellAddress::new(5, 0) {
                CellValue::Text(value.clone())
            } else {
                CellValue::Empty
            }
        })
    }

    #[test]
    fn new_session_has_no_record() {
        let session = Session::new();
        assert!(!session.has_record());
        assert!(session.record().is_none());
    }

    #[test]
    fn replace_returns_previous_record() {
        let mut session = Session::new();
        assert!(session.replace_record(record_with_a6("first")).is_none());

        let previous = session
            .replace_record(record_with_a6("second"))
            .expect("previous record should be returned");

        assert_eq!(previous.get("A6"), Some("first"));
        assert_eq!(
            session.record().and_then(|r| r.get("A6")),
            Some("second")
        );
    }
}
