use std::future::Future;

use crate::domain::entities::record::ExtractedRecord;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("no extracted data to send")]
    NoData,
    #[error("request failed: {0}")]
    Transport(String),
    #[error("endpoint answered with status {0}")]
    Status(u16),
}

/// Destination for extracted records.
pub trait RecordSink {
    /// Makes exactly one delivery attempt.
    fn deliver(&self, record: &ExtractedRecord) -> impl Future<Output = Result<(), SubmitError>>;
}
