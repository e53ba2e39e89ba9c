//! Tag-based export - copy every photo carrying a chosen tag into a
//! deterministically named subfolder of a destination root.
//!
//! Copies carry both content and file times, like `cp -p`. Each copy is
//! independent: one unreadable source or full disk is recorded in the
//! report and the rest of the batch continues.

pub mod error;

pub use error::ExportError;

use std::fs;
use std::path::{Path, PathBuf};

use filetime::FileTime;

use crate::collection::{Collection, normalize_tag};
use error::Result;

/// Fixed prefix for export subfolder names.
pub const FOLDER_PREFIX: &str = "COLLECTION_";

/// One file that could not be copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFailure {
    pub filename: String,
    pub reason: String,
}

/// Aggregate outcome of an export run.
///
/// `attempted == 0` means nothing matched the tag; that is distinct from
/// `attempted > 0` with `succeeded == 0`, where every copy failed. The
/// caller decides how to word each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    /// The subfolder files were copied into.
    pub destination: PathBuf,
    /// Number of items whose tag set matched the target.
    pub attempted: usize,
    /// Number of files copied successfully.
    pub succeeded: usize,
    /// Per-file copy failures, in collection order.
    pub failures: Vec<ExportFailure>,
}

/// Derive the export subfolder name for a tag.
///
/// Characters other than alphanumerics, spaces, and underscores are
/// stripped, trailing whitespace is dropped, the remainder is uppercased
/// with spaces turned into underscores, and [`FOLDER_PREFIX`] is applied.
/// Distinct raw tags can collide on the same folder name; that is accepted
/// as-is, the later export lands in the same folder.
#[must_use]
pub fn folder_name_for_tag(tag: &str) -> String {
    let safe: String = tag
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ' || *c == '_')
        .collect();
    let safe = safe.trim_end();
    format!("{FOLDER_PREFIX}{}", safe.to_uppercase().replace(' ', "_"))
}

/// Copy every photo carrying `tag` into `COLLECTION_<TAG>` under
/// `destination_root`.
///
/// The subfolder is created if absent and reused if it already exists.
/// Matching uses the normalized form of `tag`; each matching file is
/// copied under its original filename, overwriting any same-named file
/// already there, with content and file times carried over.
///
/// # Errors
/// * [`ExportError::NoTagSelected`] if `tag` is empty after trimming -
///   the precondition failure for the "no selection" placeholder, checked
///   before any filesystem work.
/// * [`ExportError::CreateDir`] if the subfolder cannot be created; this
///   aborts the whole export. Per-file copy failures never abort - they
///   are recorded in the report and the batch continues.
pub fn export_by_tag(
    collection: &Collection,
    tag: &str,
    destination_root: &Path,
) -> Result<ExportReport> {
    if tag.trim().is_empty() {
        return Err(ExportError::NoTagSelected);
    }

    let destination = destination_root.join(folder_name_for_tag(tag));
    fs::create_dir_all(&destination).map_err(|source| ExportError::CreateDir {
        path: destination.clone(),
        source,
    })?;

    let target = normalize_tag(tag);
    let mut report = ExportReport {
        destination,
        attempted: 0,
        succeeded: 0,
        failures: Vec::new(),
    };

    for item in collection.items() {
        if !item.has_tag(&target) {
            continue;
        }
        report.attempted += 1;
        let dest_path = report.destination.join(item.filename());
        match copy_with_times(item.source_path(), &dest_path) {
            Ok(()) => report.succeeded += 1,
            Err(e) => report.failures.push(ExportFailure {
                filename: item.filename().to_string(),
                reason: e.to_string(),
            }),
        }
    }

    Ok(report)
}

/// Copy file contents, then re-apply the source's accessed/modified times
/// to the destination. `fs::copy` alone does not carry timestamps.
fn copy_with_times(src: &Path, dst: &Path) -> std::io::Result<()> {
    fs::copy(src, dst)?;
    let meta = fs::metadata(src)?;
    filetime::set_file_times(
        dst,
        FileTime::from_last_access_time(&meta),
        FileTime::from_last_modification_time(&meta),
    )
}
