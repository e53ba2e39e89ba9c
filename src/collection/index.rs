//! Derived and curated tag sets for the collection.

use std::collections::BTreeSet;

use super::item::{Item, normalize_tag};

/// The set of tags currently in use by at least one item in the collection.
///
/// Kept equal to the union of all items' tag sets at all times; this is
/// what populates the grouping selector. Sorted iteration falls out of the
/// underlying `BTreeSet`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagIndex {
    tags: BTreeSet<String>,
}

impl TagIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the index as the union of all items' tags.
    ///
    /// The new union is built in full and then swapped in, so observers
    /// never see a partial index. Must run after import and after any
    /// successful tag removal (single-item or cascading).
    pub fn rebuild(&mut self, items: &[Item]) {
        let mut union = BTreeSet::new();
        for item in items {
            union.extend(item.tags().iter().cloned());
        }
        self.tags = union;
    }

    /// Incremental update after a single successful tag addition.
    ///
    /// Safe because the union only grows on an add; removals go through
    /// [`rebuild`](Self::rebuild) since the tag may survive on other items.
    pub fn insert(&mut self, tag: impl Into<String>) {
        self.tags.insert(tag.into());
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// All indexed tags in lexicographic order.
    #[must_use]
    pub fn to_sorted_vec(&self) -> Vec<String> {
        self.tags.iter().cloned().collect()
    }

    /// Iterate tags in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }
}

/// User-curated list of quick-apply tag names.
///
/// Independent of [`TagIndex`]: a name may sit here without any item
/// bearing it, and a tag may remain on items after its criteria entry was
/// deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CriteriaRegistry {
    names: BTreeSet<String>,
}

impl CriteriaRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a criteria name, normalizing the input first.
    ///
    /// Fails if the input is empty after trimming or already registered.
    pub fn add(&mut self, raw: &str) -> bool {
        let name = normalize_tag(raw);
        if name.is_empty() {
            return false;
        }
        self.names.insert(name)
    }

    /// Remove a criteria name by its exact stored form.
    ///
    /// Removing an absent name is a no-op, not an error; the return value
    /// reports whether it was present.
    pub fn remove(&mut self, exact: &str) -> bool {
        self.names.remove(exact)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Registered names in lexicographic order, for deterministic rendering.
    #[must_use]
    pub fn list_sorted(&self) -> Vec<String> {
        self.names.iter().cloned().collect()
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }
}
