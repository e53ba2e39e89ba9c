//! Phototag - photo rating, tagging, and grouped export
//!
//! This library provides the engine behind the `phototag` review tool: an
//! in-memory model of imported photos with per-photo ratings and tag sets,
//! a derived collection-wide tag index, a curated quick-apply criteria
//! list, and a tag-based export that copies matching files into a
//! deterministically named folder.
//!
//! Nothing persists across runs: state is rebuilt from the photo folder on
//! each import.

use thiserror::Error;

pub mod cli;
pub mod collection;
pub mod export;
pub mod output;
pub mod session;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum PhototagError {
    /// Collection error
    #[error("Collection error: {0}")]
    Collection(#[from] collection::CollectionError),
    /// Export error
    #[error("Export error: {0}")]
    Export(#[from] export::ExportError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
