use std::path::PathBuf;
use thiserror::Error;

/// Per-file analysis failures. None of these abort a scan: the batch driver
/// logs the failure, drops the file's data and moves on to the next file.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("no class, interface or enum found in {}", path.display())]
    NoEntityFound { path: PathBuf },

    #[error("failed to read {}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
