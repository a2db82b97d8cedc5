//! Category filtering of the gallery's item list.

use std::fmt;

use crate::gallery::GalleryItem;

/// Tag of the selector that shows every item.
pub const ALL_CATEGORIES: &str = "all";

/// Active category selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// Every item.
    #[default]
    All,
    /// Only items whose category equals the tag exactly.
    Category(String),
}

impl CategoryFilter {
    /// Interpret a selector tag; `"all"` selects every item.
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        if tag == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Category(tag.to_owned())
        }
    }

    /// Whether `item` passes this filter.
    #[must_use]
    pub fn matches(&self, item: &GalleryItem) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => item.category == *category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_CATEGORIES),
            Self::Category(category) => f.write_str(category),
        }
    }
}

/// Derives the filtered subset of the source items.
///
/// The subset is held as indices into the caller's item list, in source
/// order; the items themselves are never copied or mutated.
#[derive(Debug, Clone)]
pub struct FilterEngine {
    active: CategoryFilter,
    filtered: Vec<usize>,
}

impl FilterEngine {
    /// Start with every item selected.
    #[must_use]
    pub fn new(items: &[GalleryItem]) -> Self {
        Self {
            active: CategoryFilter::All,
            filtered: (0..items.len()).collect(),
        }
    }

    /// Active selector.
    #[must_use]
    pub fn active(&self) -> &CategoryFilter {
        &self.active
    }

    /// Indices of the items that pass the active filter.
    #[must_use]
    pub fn filtered(&self) -> &[usize] {
        &self.filtered
    }

    /// Switch to `filter` and recompute the subset from `items`.
    pub fn apply(
        &mut self,
        filter: CategoryFilter,
        items: &[GalleryItem],
    ) -> &[usize] {
        self.filtered = items
            .iter()
            .enumerate()
            .filter(|(_, item)| filter.matches(item))
            .map(|(index, _)| index)
            .collect();
        log::debug!(
            "filter '{filter}' selected {} of {} items",
            self.filtered.len(),
            items.len()
        );
        self.active = filter;
        &self.filtered
    }
}

/// Clamp a tracked position into a ring of `count` slots.
#[must_use]
pub fn clamp_index(index: usize, count: usize) -> Option<usize> {
    count.checked_sub(1).map(|last| index.min(last))
}
