use std::path::PathBuf;

/// Errors raised while running a batch.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// Writing the report failed.
    #[error("failed to write report to {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
