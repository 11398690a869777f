//! Cart aggregator: totals derived from the cart and a priced catalog.
//!
//! Recomputed on every call; catalogs are a few dozen records.

use serde::Serialize;

use musee_catalog::{Catalog, Priced};
use musee_core::{Entity, ItemId, Money};

use crate::interaction::InteractionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CartTotals {
    /// Sum of all quantities.
    pub count: u32,
    /// Sum of `price * quantity`; ids missing from the catalog count as free.
    pub price: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub item_id: ItemId,
    pub quantity: u32,
    /// `None` when the id is not in the catalog.
    pub unit_price: Option<Money>,
    pub line_total: Money,
}

pub fn cart_totals<T>(state: &InteractionState, catalog: &Catalog<T>) -> CartTotals
where
    T: Entity<Id = ItemId> + Priced,
{
    state
        .cart()
        .iter()
        .fold(CartTotals::default(), |acc, (id, qty)| CartTotals {
            count: acc.count.saturating_add(*qty),
            price: acc.price + catalog.price_of(*id).unwrap_or(Money::ZERO).times(*qty),
        })
}

/// One line per cart entry, in item id order.
pub fn cart_lines<T>(state: &InteractionState, catalog: &Catalog<T>) -> Vec<CartLine>
where
    T: Entity<Id = ItemId> + Priced,
{
    state
        .cart()
        .iter()
        .map(|(id, qty)| {
            let unit_price = catalog.price_of(*id);
            CartLine {
                item_id: *id,
                quantity: *qty,
                unit_price,
                line_total: unit_price.unwrap_or(Money::ZERO).times(*qty),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use musee_catalog::{ShopProduct, seed};
    use musee_core::SessionId;

    use crate::interaction::{add_to_cart, remove_from_cart};

    fn single_product_catalog() -> Catalog<ShopProduct> {
        Catalog::new(
            vec![ShopProduct {
                id: ItemId::new(1),
                name: "Carte Postale Set".to_string(),
                category: "Papeterie".to_string(),
                price: Money::xof(3000),
                image: String::new(),
                description: String::new(),
            }],
            vec!["Papeterie".to_string()],
        )
    }

    #[test]
    fn empty_cart_has_zero_totals() {
        let state = InteractionState::new(SessionId::new());
        let totals = cart_totals(&state, &seed::shop_products());
        assert_eq!(totals, CartTotals::default());
    }

    #[test]
    fn two_additions_of_one_product() {
        let catalog = single_product_catalog();
        let state = InteractionState::new(SessionId::new());
        let state = add_to_cart(state, ItemId::new(1));
        let state = add_to_cart(state, ItemId::new(1));

        let totals = cart_totals(&state, &catalog);
        assert_eq!(totals.count, 2);
        assert_eq!(totals.price, Money::xof(6000));
    }

    #[test]
    fn unknown_ids_count_but_cost_nothing() {
        let catalog = single_product_catalog();
        let state = InteractionState::new(SessionId::new());
        let state = add_to_cart(state, ItemId::new(1));
        let state = add_to_cart(state, ItemId::new(77));

        let totals = cart_totals(&state, &catalog);
        assert_eq!(totals.count, 2);
        assert_eq!(totals.price, Money::xof(3000));

        let lines = cart_lines(&state, &catalog);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].unit_price, None);
        assert_eq!(lines[1].line_total, Money::ZERO);
    }

    #[test]
    fn mixed_cart_against_shop() {
        let shop = seed::shop_products();
        let mut state = InteractionState::new(SessionId::new());
        // Djembé (55 000) x2, cartes postales (3 000) x1
        state = add_to_cart(state, ItemId::new(7));
        state = add_to_cart(state, ItemId::new(7));
        state = add_to_cart(state, ItemId::new(8));
        state = remove_from_cart(state, ItemId::new(7));
        state = add_to_cart(state, ItemId::new(7));

        let totals = cart_totals(&state, &shop);
        assert_eq!(totals.count, 3);
        assert_eq!(totals.price, Money::xof(113_000));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: totals scale linearly with the quantity of a line.
            #[test]
            fn totals_scale_linearly(raw in 1u32..=8, k in 1u32..40) {
                let shop = seed::shop_products();
                let id = ItemId::new(raw);
                let unit = shop.price_of(id).unwrap();

                let mut state = InteractionState::new(SessionId::new());
                for _ in 0..k {
                    state = add_to_cart(state, id);
                }

                let totals = cart_totals(&state, &shop);
                prop_assert_eq!(totals.count, k);
                prop_assert_eq!(totals.price, unit.times(k));
            }
        }
    }
}
