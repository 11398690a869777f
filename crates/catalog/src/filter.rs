//! Selection filter: free-text query + category facet over a catalog.

use serde::{Deserialize, Serialize};

use crate::item::{Artwork, MuseumEvent, ShopProduct};

/// Sentinel value of the category facet that disables the predicate.
pub const ALL_CATEGORIES: &str = "all";

/// Records that can be narrowed by the selection filter.
pub trait Searchable {
    /// Facet value of the record (exact-match compared).
    fn category(&self) -> &str;

    /// Text fields the free-text query is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match over `search_fields`.
    ///
    /// `needle` must already be lowercased.
    fn matches_query(&self, needle: &str) -> bool {
        needle.is_empty()
            || self
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(needle))
    }
}

impl Searchable for Artwork {
    fn category(&self) -> &str {
        &self.category
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.origin.as_str()]
    }
}

impl Searchable for ShopProduct {
    fn category(&self) -> &str {
        &self.category
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

impl Searchable for MuseumEvent {
    fn category(&self) -> &str {
        &self.category
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }
}

/// Category facet: either everything or one exact category.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn parse(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    pub fn admits(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value)
        }
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        match value {
            CategoryFilter::All => ALL_CATEGORIES.to_string(),
            CategoryFilter::Only(c) => c,
        }
    }
}

/// Ordered subsequence of `items` matching both `query` and `category`.
///
/// The query is a case-insensitive substring; an empty query matches every
/// record. Relative order of the catalog is preserved. An empty result is a
/// valid answer.
pub fn filter_catalog<'a, T: Searchable>(
    items: &'a [T],
    query: &str,
    category: &CategoryFilter,
) -> Vec<&'a T> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| category.admits(item.category()) && item.matches_query(&needle))
        .collect()
}
