use std::io;
use std::path::Path;

/// Reads the whole file into memory; the handle is closed before returning.
pub async fn read_workbook_bytes(path: &Path) -> io::Result<Vec<u8>> {
    tokio::fs::read(path).await
}
