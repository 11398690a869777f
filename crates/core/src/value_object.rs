//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

use serde::{Deserialize, Serialize};

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// Example:
/// - `Money(3000)` is a value object
/// - `Artwork { id: ItemId(1), .. }` is an entity
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// An amount of CFA francs (XOF).
///
/// The franc has no minor unit, so the amount is a whole number of francs.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn xof(amount: u64) -> Self {
        Self(amount)
    }

    pub fn amount(self) -> u64 {
        self.0
    }

    /// Price of `quantity` units at this unit price.
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }
}

impl core::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl core::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

/// Formats as `45 000 FCFA` (space-grouped thousands).
impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(' ');
            }
            grouped.push(ch);
        }
        write!(f, "{grouped} FCFA")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_groups_thousands() {
        assert_eq!(Money::xof(500).to_string(), "500 FCFA");
        assert_eq!(Money::xof(3000).to_string(), "3 000 FCFA");
        assert_eq!(Money::xof(1_234_567).to_string(), "1 234 567 FCFA");
        assert_eq!(Money::ZERO.to_string(), "0 FCFA");
    }

    #[test]
    fn times_and_sum() {
        let total: Money = [Money::xof(3000).times(2), Money::xof(500).times(3)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::xof(7500));
    }
}
