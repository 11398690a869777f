//! Read-only catalog store.

use serde::Serialize;

use musee_core::{Entity, ItemId, Money};

use crate::filter::{ALL_CATEGORIES, CategoryFilter, Searchable, filter_catalog};
use crate::item::ShopProduct;

/// Records that carry a unit price.
pub trait Priced {
    fn price(&self) -> Money;
}

impl Priced for ShopProduct {
    fn price(&self) -> Money {
        self.price
    }
}

/// An ordered, read-only collection of records plus the facet values a page
/// offers for it.
///
/// Facets are listed explicitly rather than derived: a page may order them
/// differently from first appearance in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog<T> {
    items: Vec<T>,
    categories: Vec<String>,
}

impl<T> Catalog<T> {
    pub fn new(items: Vec<T>, categories: Vec<String>) -> Self {
        Self { items, categories }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Facet values offered to the visitor, starting with the `all` sentinel.
    pub fn facets(&self) -> Vec<&str> {
        std::iter::once(ALL_CATEGORIES)
            .chain(self.categories.iter().map(String::as_str))
            .collect()
    }
}

impl<T> Catalog<T>
where
    T: Entity<Id = ItemId>,
{
    pub fn get(&self, id: ItemId) -> Option<&T> {
        self.items.iter().find(|item| *item.id() == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Records whose ids appear in `ids`, in `ids` order; unknown ids are skipped.
    pub fn pick(&self, ids: &[ItemId]) -> Vec<&T> {
        ids.iter().filter_map(|id| self.get(*id)).collect()
    }
}

impl<T> Catalog<T>
where
    T: Entity<Id = ItemId> + Priced,
{
    /// Unit price of `id`, or `None` when the id is not in this catalog.
    pub fn price_of(&self, id: ItemId) -> Option<Money> {
        self.get(id).map(Priced::price)
    }
}

impl<T: Searchable> Catalog<T> {
    pub fn filter(&self, query: &str, category: &CategoryFilter) -> Vec<&T> {
        filter_catalog(&self.items, query, category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn facets_start_with_sentinel() {
        let shop = seed::shop_products();
        let facets = shop.facets();
        assert_eq!(facets[0], "all");
        assert_eq!(facets.len(), 9);
    }

    #[test]
    fn get_and_price_of() {
        let shop = seed::shop_products();
        assert_eq!(shop.get(ItemId::new(7)).unwrap().name, "Djembé Traditionnel");
        assert_eq!(shop.price_of(ItemId::new(8)), Some(Money::xof(3000)));
        assert_eq!(shop.price_of(ItemId::new(99)), None);
    }

    #[test]
    fn pick_keeps_requested_order_and_skips_unknown() {
        let artworks = seed::artworks();
        let picked = artworks.pick(&[ItemId::new(3), ItemId::new(42), ItemId::new(1)]);
        let titles: Vec<&str> = picked.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Tissage Kente", "Masque Dan"]);
    }
}
