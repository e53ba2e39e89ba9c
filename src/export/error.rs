use std::path::PathBuf;
use thiserror::Error;

/// Fatal export failures - anything that aborts the whole call rather
/// than a single file's copy. Per-file copy failures are recorded in the
/// [`ExportReport`](super::ExportReport) instead.
#[derive(Debug, Error)]
pub enum ExportError {
    /// No usable tag was selected (empty after trimming).
    #[error("No tag selected for export")]
    NoTagSelected,
    /// The destination subfolder could not be created.
    #[error("Failed to create export folder '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Type alias for cleaner function signatures
pub type Result<T> = std::result::Result<T, ExportError>;
