use std::io;
use std::path::PathBuf;

use dioxus::logger::tracing::info;

use crate::domain::entities::session::Session;
use crate::infra::import::file::read_workbook_bytes;
use crate::infra::import::xlsx::{extract_record, ExtractError};
use crate::platform::desktop::blocking::run_blocking;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("no file selected")]
    NoFileSelected,
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Extract(#[from] ExtractError),
}

#[derive(Debug, Clone, Default)]
pub struct ImportService;

impl ImportService {
    pub fn new() -> Self {
        Self
    }

    /// Reads `path`, extracts the fixed cells and stores the new record in
    /// `session`. On any failure the session is left as it was.
    pub async fn import(
        &self,
        session: &mut Session,
        path: Option<PathBuf>,
    ) -> Result<(), ImportError> {
        let Some(path) = path else {
            return Err(ImportError::NoFileSelected);
        };

        let bytes = read_workbook_bytes(&path)
            .await
            .map_err(|source| ImportError::Read {
                path: path.clone(),
                source,
            })?;

        let record = run_blocking(move || extract_record(&bytes))
            .await
            .map_err(|err| ExtractError::Parse(err.to_string()))??;

        info!(
            path = %path.display(),
            filled = record.filled_count(),
            total = record.len(),
            "extracted record from workbook"
        );
        session.replace_record(record);
        Ok(())
    }
}
