//! Photo item model - a single imported photograph with its mutable
//! rating and tag set.

use std::path::{Path, PathBuf};

/// Normalize raw tag input to its canonical stored form.
///
/// Surrounding whitespace is trimmed and the first character is uppercased;
/// the rest of the string is left unchanged. Two inputs differing only by
/// this normalization are the same tag.
#[must_use]
pub fn normalize_tag(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A single photo in the collection: display name, backing file location,
/// and the rating/tag state attached during review.
///
/// The filename is not guaranteed unique across an import; the source path
/// is immutable after construction. Items live for one import - a new
/// import rebuilds the collection from scratch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    filename: String,
    source_path: PathBuf,
    rating: u8,
    tags: Vec<String>,
}

impl Item {
    /// Create a new unrated, untagged item.
    #[must_use]
    pub fn new(filename: impl Into<String>, source_path: impl Into<PathBuf>) -> Self {
        Self {
            filename: filename.into(),
            source_path: source_path.into(),
            rating: 0,
            tags: Vec::new(),
        }
    }

    /// Display name of the backing file.
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Absolute location of the backing file.
    #[must_use]
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Current rating: 0 when unrated, otherwise 1-5.
    #[must_use]
    pub const fn rating(&self) -> u8 {
        self.rating
    }

    /// Tags in sorted order.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Set the rating.
    ///
    /// Only values 1 through 5 are accepted; anything else leaves the item
    /// untouched. There is no operation to reset a rating to 0 - unrated is
    /// only the initial state.
    pub fn set_rating(&mut self, value: u8) -> bool {
        if (1..=5).contains(&value) {
            self.rating = value;
            true
        } else {
            false
        }
    }

    /// Add a tag, normalizing the input first.
    ///
    /// Fails without mutating if the input is empty after trimming or the
    /// normalized tag is already present. The tag list stays sorted.
    pub fn add_tag(&mut self, raw: &str) -> bool {
        let tag = normalize_tag(raw);
        if tag.is_empty() {
            return false;
        }
        match self.tags.binary_search(&tag) {
            Ok(_) => false,
            Err(pos) => {
                self.tags.insert(pos, tag);
                true
            }
        }
    }

    /// Remove a tag by its exact stored form.
    ///
    /// No normalization is applied here: removal is case-sensitive against
    /// the canonical form produced by [`add_tag`](Self::add_tag), so
    /// `remove_tag("forest")` misses an item holding `"Forest"`. Callers
    /// must pass tags as stored.
    pub fn remove_tag(&mut self, exact: &str) -> bool {
        match self.tags.binary_search_by(|t| t.as_str().cmp(exact)) {
            Ok(pos) => {
                self.tags.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    /// Whether the item carries `tag` in its exact stored form.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.binary_search_by(|t| t.as_str().cmp(tag)).is_ok()
    }
}
