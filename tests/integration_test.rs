//! Integration tests for phototag
//!
//! These tests drive the complete review workflow over real temporary
//! directories: import, rating, tagging, cascading deletion, and export.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use phototag::collection::{Collection, CollectionError};
use phototag::export::{self, ExportError};
use tempfile::tempdir;

/// Helper function to create a photo file with the given content
fn create_photo(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(content).unwrap();
    path
}

/// Move the cursor to the item with the given filename
fn seek_to(collection: &mut Collection, filename: &str) {
    while collection.retreat() {}
    loop {
        if collection.current().unwrap().filename() == filename {
            return;
        }
        assert!(collection.advance(), "no item named {filename}");
    }
}

#[test]
fn test_import_tag_and_export_workflow() {
    let source = tempdir().unwrap();
    let dest = tempdir().unwrap();

    create_photo(source.path(), "beach1.jpg", b"beach one");
    create_photo(source.path(), "beach2.png", b"beach two");
    create_photo(source.path(), "forest.gif", b"forest");
    create_photo(source.path(), "readme.md", b"not a photo");

    let mut collection = Collection::new();
    assert_eq!(collection.import_dir(source.path()).unwrap(), 3);

    // Curate criteria and tag photos
    assert!(collection.add_criteria("beach"));
    assert!(collection.add_criteria("forest"));

    seek_to(&mut collection, "beach1.jpg");
    assert!(collection.rate_current(5));
    assert!(collection.apply_tag_to_current("Beach"));

    seek_to(&mut collection, "beach2.png");
    assert!(collection.apply_tag_to_current("beach"));

    seek_to(&mut collection, "forest.gif");
    assert!(collection.apply_tag_to_current("forest"));

    assert_eq!(collection.tag_index().to_sorted_vec(), ["Beach", "Forest"]);

    // Export the beach group
    let report = export::export_by_tag(&collection, "Beach", dest.path()).unwrap();
    assert_eq!(report.attempted, 2);
    assert_eq!(report.succeeded, 2);
    assert!(report.failures.is_empty());

    let folder = dest.path().join("COLLECTION_BEACH");
    assert_eq!(fs::read(folder.join("beach1.jpg")).unwrap(), b"beach one");
    assert_eq!(fs::read(folder.join("beach2.png")).unwrap(), b"beach two");
    assert!(!folder.join("forest.gif").exists());

    // Exported copies carry the source's modified time
    let src_mtime = fs::metadata(source.path().join("beach1.jpg"))
        .unwrap()
        .modified()
        .unwrap();
    let dst_mtime = fs::metadata(folder.join("beach1.jpg"))
        .unwrap()
        .modified()
        .unwrap();
    assert_eq!(src_mtime, dst_mtime);
}

#[test]
fn test_cascading_deletion_keeps_index_consistent() {
    let source = tempdir().unwrap();
    for i in 0..5 {
        create_photo(source.path(), &format!("p{i}.jpg"), b"x");
    }

    let mut collection = Collection::new();
    assert_eq!(collection.import_dir(source.path()).unwrap(), 5);
    assert!(collection.add_criteria("sunset"));

    for name in ["p0.jpg", "p2.jpg", "p4.jpg"] {
        seek_to(&mut collection, name);
        assert!(collection.apply_tag_to_current("sunset"));
    }
    for name in ["p1.jpg", "p3.jpg"] {
        seek_to(&mut collection, name);
        assert!(collection.apply_tag_to_current("keeper"));
    }

    seek_to(&mut collection, "p2.jpg");
    let report = collection.delete_tag_everywhere("Sunset");

    assert_eq!(report.items_affected, 3);
    assert!(report.current_item_affected);
    assert!(!collection.tag_index().contains("Sunset"));
    assert!(!collection.criteria().contains("Sunset"));
    assert_eq!(collection.tag_index().to_sorted_vec(), ["Keeper"]);
}

#[test]
fn test_reimport_rebuilds_from_scratch() {
    let first = tempdir().unwrap();
    let second = tempdir().unwrap();
    create_photo(first.path(), "old.jpg", b"old");
    create_photo(second.path(), "new.jpg", b"new");

    let mut collection = Collection::new();
    assert_eq!(collection.import_dir(first.path()).unwrap(), 1);
    assert!(collection.add_criteria("legacy"));
    assert!(collection.apply_tag_to_current("legacy"));
    assert!(collection.rate_current(2));

    assert_eq!(collection.import_dir(second.path()).unwrap(), 1);

    assert_eq!(collection.len(), 1);
    assert_eq!(collection.current().unwrap().filename(), "new.jpg");
    assert_eq!(collection.current().unwrap().rating(), 0);
    assert!(collection.tag_index().is_empty());
    assert!(collection.criteria().is_empty());
}

#[test]
fn test_import_unreadable_folder_fails_cleanly() {
    let mut collection = Collection::new();
    let missing = PathBuf::from("/nonexistent/phototag-integration");

    let result = collection.import_dir(&missing);
    assert!(matches!(result, Err(CollectionError::Import { .. })));
    assert!(collection.is_empty());
}

#[test]
fn test_export_twice_overwrites_without_duplicating() {
    let source = tempdir().unwrap();
    let dest = tempdir().unwrap();
    create_photo(source.path(), "a.jpg", b"first");

    let mut collection = Collection::new();
    assert_eq!(collection.import_dir(source.path()).unwrap(), 1);
    assert!(collection.apply_tag_to_current("trip"));

    let first = export::export_by_tag(&collection, "Trip", dest.path()).unwrap();
    assert_eq!(first.succeeded, 1);

    // Source content changes between exports; second run overwrites
    create_photo(source.path(), "a.jpg", b"second");
    let second = export::export_by_tag(&collection, "Trip", dest.path()).unwrap();
    assert_eq!(second.succeeded, 1);

    let folder = dest.path().join("COLLECTION_TRIP");
    assert_eq!(fs::read_dir(&folder).unwrap().count(), 1);
    assert_eq!(fs::read(folder.join("a.jpg")).unwrap(), b"second");
}

#[test]
fn test_export_rejects_placeholder_tag() {
    let dest = tempdir().unwrap();
    let collection = Collection::new();

    let result = export::export_by_tag(&collection, "  ", dest.path());
    assert!(matches!(result, Err(ExportError::NoTagSelected)));

    // Precondition failure means no folder was created
    assert_eq!(fs::read_dir(dest.path()).unwrap().count(), 0);
}

#[test]
fn test_export_partial_failure_reports_and_continues() {
    let source = tempdir().unwrap();
    let dest = tempdir().unwrap();
    create_photo(source.path(), "gone.jpg", b"will vanish");
    create_photo(source.path(), "stays.jpg", b"stays");

    let mut collection = Collection::new();
    assert_eq!(collection.import_dir(source.path()).unwrap(), 2);
    seek_to(&mut collection, "gone.jpg");
    assert!(collection.apply_tag_to_current("trip"));
    seek_to(&mut collection, "stays.jpg");
    assert!(collection.apply_tag_to_current("trip"));

    fs::remove_file(source.path().join("gone.jpg")).unwrap();

    let report = export::export_by_tag(&collection, "Trip", dest.path()).unwrap();
    assert_eq!(report.attempted, 2);
    assert_eq!(report.succeeded, 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].filename, "gone.jpg");
    assert!(report.destination.join("stays.jpg").exists());
}
