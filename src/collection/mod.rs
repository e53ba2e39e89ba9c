//! Photo collection engine - ordered items, navigation cursor, and the
//! tag index / criteria registry kept synchronized with every mutation.
//!
//! The collection owns all review state for one imported folder. A new
//! import replaces everything; nothing persists across runs. The single
//! invariant worth stating once: after every mutating operation, the
//! [`TagIndex`] equals the union of all items' tag sets.

pub mod error;
pub mod index;
pub mod item;

pub use error::CollectionError;
pub use index::{CriteriaRegistry, TagIndex};
pub use item::{Item, normalize_tag};

use std::fs;
use std::path::{Path, PathBuf};

use error::Result;

/// File extensions accepted by the importer, matched case-insensitively.
/// Content is never sniffed.
pub const PHOTO_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "tif"];

/// Whether a path carries one of the allow-listed photo extensions.
#[must_use]
pub fn is_photo_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            PHOTO_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
}

/// Outcome of a cascading tag deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletionReport {
    /// Number of items that actually carried the tag and lost it.
    pub items_affected: usize,
    /// Whether the item under the cursor was among them, so the caller
    /// knows to refresh a displayed view.
    pub current_item_affected: bool,
}

/// The photo collection: ordered items in import enumeration order, a
/// clamped navigation cursor, and the derived/curated tag sets.
#[derive(Debug, Default)]
pub struct Collection {
    items: Vec<Item>,
    cursor: usize,
    tag_index: TagIndex,
    criteria: CriteriaRegistry,
}

impl Collection {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Import every photo file directly inside `folder`, replacing all
    /// previous state (items, tag index, criteria, cursor).
    ///
    /// The directory is enumerated in full before any state is touched, so
    /// an unreadable folder aborts with the old collection intact. Entries
    /// are taken in enumeration order, not re-sorted, and filtered by
    /// [`PHOTO_EXTENSIONS`]; subdirectories are not descended into.
    ///
    /// Returns the number of items created. `Ok(0)` is the distinct
    /// "nothing imported" outcome - the folder was readable but held no
    /// photo files, and the collection is left empty.
    ///
    /// # Errors
    /// Returns [`CollectionError::Import`] if the folder cannot be read.
    pub fn import_dir(&mut self, folder: &Path) -> Result<usize> {
        let entries = fs::read_dir(folder).map_err(|source| CollectionError::Import {
            path: folder.to_path_buf(),
            source,
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| CollectionError::Import {
                path: folder.to_path_buf(),
                source,
            })?;
            paths.push(entry.path());
        }

        Ok(self.import_paths(paths))
    }

    /// Import from a pre-enumerated list of paths, replacing all previous
    /// state. Paths without an allow-listed extension are skipped. Returns
    /// the number of items created.
    pub fn import_paths<I>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = PathBuf>,
    {
        self.items.clear();
        self.cursor = 0;
        self.tag_index.clear();
        self.criteria.clear();

        for path in paths {
            if !is_photo_file(&path) {
                continue;
            }
            let Some(filename) = path.file_name() else {
                continue;
            };
            let filename = filename.to_string_lossy().into_owned();
            self.items.push(Item::new(filename, path));
        }
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Current cursor position. Meaningless when the collection is empty.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// All items in import order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn tag_index(&self) -> &TagIndex {
        &self.tag_index
    }

    #[must_use]
    pub fn criteria(&self) -> &CriteriaRegistry {
        &self.criteria
    }

    /// The item under the cursor, or `None` when the collection is empty.
    #[must_use]
    pub fn current(&self) -> Option<&Item> {
        self.items.get(self.cursor)
    }

    /// Move the cursor forward one item.
    ///
    /// Returns whether movement occurred; `false` at the last item is a
    /// boundary notice, not an error. The cursor saturates, it never wraps.
    pub fn advance(&mut self) -> bool {
        if self.cursor + 1 < self.items.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Move the cursor back one item. `false` at the first item.
    pub fn retreat(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Rate the item under the cursor.
    ///
    /// `false` when the collection is empty or the value is outside 1-5.
    pub fn rate_current(&mut self, value: u8) -> bool {
        match self.items.get_mut(self.cursor) {
            Some(item) => item.set_rating(value),
            None => false,
        }
    }

    /// Register a quick-apply criteria name. See [`CriteriaRegistry::add`].
    pub fn add_criteria(&mut self, raw: &str) -> bool {
        self.criteria.add(raw)
    }

    /// Apply a tag to the item under the cursor.
    ///
    /// On success the tag index is updated incrementally - the union can
    /// only grow on an add, so no full rebuild is needed. Applying a tag
    /// that is not in the criteria registry is legal.
    pub fn apply_tag_to_current(&mut self, raw: &str) -> bool {
        let Some(item) = self.items.get_mut(self.cursor) else {
            return false;
        };
        if item.add_tag(raw) {
            self.tag_index.insert(normalize_tag(raw));
            true
        } else {
            false
        }
    }

    /// Remove a tag (exact stored form) from the item under the cursor.
    ///
    /// A successful removal triggers a full index rebuild: the tag may
    /// still be carried by other items, so an incremental removal from the
    /// index would be unsafe.
    pub fn remove_tag_from_current(&mut self, exact: &str) -> bool {
        let Some(item) = self.items.get_mut(self.cursor) else {
            return false;
        };
        if item.remove_tag(exact) {
            self.tag_index.rebuild(&self.items);
            true
        } else {
            false
        }
    }

    /// Delete `tag` everywhere: drop its criteria entry (unconditionally)
    /// and strip it from every item in one pass, then rebuild the index
    /// exactly once.
    ///
    /// A per-item miss is not an error; the report counts only items that
    /// actually carried the tag, and records whether the item under the
    /// cursor was among them. `tag` must be in its stored form, as criteria
    /// names and item tags always are.
    pub fn delete_tag_everywhere(&mut self, tag: &str) -> DeletionReport {
        self.criteria.remove(tag);

        let mut items_affected = 0;
        let mut current_item_affected = false;
        for (i, item) in self.items.iter_mut().enumerate() {
            if item.remove_tag(tag) {
                items_affected += 1;
                if i == self.cursor {
                    current_item_affected = true;
                }
            }
        }
        self.tag_index.rebuild(&self.items);

        DeletionReport {
            items_affected,
            current_item_affected,
        }
    }
}
