use tokio::task::JoinError;

/// Runs CPU-bound work on the blocking pool so the UI thread keeps rendering.
pub async fn run_blocking<F, T>(f: F) -> Result<T, JoinError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await
}
