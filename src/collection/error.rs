use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by collection operations.
///
/// Validation failures (bad rating, duplicate tag) and boundary conditions
/// (navigating past either end) are reported as `bool` returns, never as
/// errors; only I/O during import lands here.
#[derive(Debug, Error)]
pub enum CollectionError {
    /// The import folder could not be enumerated. The previous collection
    /// state is left intact - import is all-or-nothing at the enumeration
    /// step.
    #[error("Failed to read photo folder '{}': {source}", path.display())]
    Import {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Type alias for cleaner function signatures
pub type Result<T> = std::result::Result<T, CollectionError>;
