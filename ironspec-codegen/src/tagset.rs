/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 7/2/26
******************************************************************************/

//! Used-tag accumulator.
//!
//! The header and message renderers record every tag they reference into one
//! [`TagSet`], passed explicitly by mutable reference. Only tags present in
//! the set appear in the tags artifact, so unreferenced dictionary entries
//! are never emitted.

use ironspec_dictionary::Tag;
use std::collections::BTreeSet;

/// Deduplicated set of referenced tags, iterated in ascending tag-number
/// order.
///
/// Deduplication follows [`Tag`] identity: the `(number, name)` pair. The
/// backing ordered set makes iteration deterministic for identical input.
#[derive(Debug, Clone, Default)]
pub struct TagSet {
    tags: BTreeSet<Tag>,
}

impl TagSet {
    /// Creates an empty tag set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a referenced tag. Re-inserting an equal tag is a no-op.
    pub fn insert(&mut self, tag: &Tag) {
        self.tags.insert(tag.clone());
    }

    /// Returns true if the tag has been recorded.
    #[must_use]
    pub fn contains(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    /// Iterates the recorded tags in ascending tag-number order.
    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter()
    }

    /// Returns the number of distinct recorded tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns true if no tags have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
