//! Ticket desk: per-tariff counters and the purchase gate.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use musee_catalog::{TicketKind, TicketType};
use musee_core::{DomainError, DomainResult, Money};
use musee_events::Notice;

const MONTHS_FR: [&str; 12] = [
    "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
    "octobre", "novembre", "décembre",
];

/// Long French date, e.g. `20 octobre 2025`.
pub fn french_long_date(date: NaiveDate) -> String {
    format!("{} {} {}", date.day(), MONTHS_FR[date.month0() as usize], date.year())
}

/// Tickets being assembled by one visitor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TicketOrder {
    counts: BTreeMap<TicketKind, u32>,
    visit_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PurchaseOutcome {
    Confirmed {
        tickets: u32,
        visit_date: NaiveDate,
        total: Money,
        notice: Notice,
    },
    /// The order is incomplete; nothing changed.
    Refused { notice: Notice },
}

impl PurchaseOutcome {
    pub fn notice(&self) -> &Notice {
        match self {
            PurchaseOutcome::Confirmed { notice, .. } | PurchaseOutcome::Refused { notice } => notice,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, PurchaseOutcome::Confirmed { .. })
    }
}

impl TicketOrder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, kind: TicketKind) -> u32 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn visit_date(&self) -> Option<NaiveDate> {
        self.visit_date
    }

    /// Add or take one ticket of `kind`; counts never go below zero.
    pub fn update_count(&mut self, kind: TicketKind, increment: bool) -> u32 {
        let current = self.count(kind);
        let next = if increment {
            current.saturating_add(1)
        } else {
            current.saturating_sub(1)
        };
        if next == 0 {
            self.counts.remove(&kind);
        } else {
            self.counts.insert(kind, next);
        }
        next
    }

    /// Pick the day of the visit. Only days after `today` can be booked.
    pub fn select_visit_date(&mut self, date: NaiveDate, today: NaiveDate) -> DomainResult<()> {
        if date <= today {
            return Err(DomainError::validation(format!(
                "visit date {date} must be after {today}"
            )));
        }
        self.visit_date = Some(date);
        Ok(())
    }

    /// No tickets and no date.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty() && self.visit_date.is_none()
    }

    pub fn total_tickets(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Price of the tickets of one tariff; tariffs missing from `tariffs` are free.
    pub fn subtotal(&self, kind: TicketKind, tariffs: &[TicketType]) -> Money {
        tariffs
            .iter()
            .find(|t| t.kind == kind)
            .map(|t| t.price.times(self.count(kind)))
            .unwrap_or(Money::ZERO)
    }

    pub fn total_price(&self, tariffs: &[TicketType]) -> Money {
        TicketKind::ALL.iter().map(|k| self.subtotal(*k, tariffs)).sum()
    }

    /// Purchase gate. A date and at least one ticket are required; a refusal
    /// is advisory and leaves the order untouched.
    pub fn purchase(&self, tariffs: &[TicketType]) -> PurchaseOutcome {
        let Some(visit_date) = self.visit_date else {
            return PurchaseOutcome::Refused {
                notice: Notice::destructive("Date requise")
                    .with_description("Veuillez sélectionner une date de visite"),
            };
        };

        let tickets = self.total_tickets();
        if tickets == 0 {
            return PurchaseOutcome::Refused {
                notice: Notice::destructive("Billets requis")
                    .with_description("Veuillez sélectionner au moins un billet"),
            };
        }

        PurchaseOutcome::Confirmed {
            tickets,
            visit_date,
            total: self.total_price(tariffs),
            notice: Notice::info("Réservation confirmée !").with_description(format!(
                "{tickets} billet(s) réservé(s) pour le {}",
                french_long_date(visit_date)
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use musee_catalog::seed;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn counts_clamp_at_zero() {
        let mut order = TicketOrder::new();
        assert_eq!(order.update_count(TicketKind::Student, false), 0);
        assert_eq!(order.update_count(TicketKind::Student, true), 1);
        assert_eq!(order.update_count(TicketKind::Student, false), 0);
        assert_eq!(order.update_count(TicketKind::Student, false), 0);
        assert_eq!(order, TicketOrder::new());
        assert!(order.is_empty());
    }

    #[test]
    fn totals_follow_tariffs() {
        let tariffs = seed::ticket_types();
        let mut order = TicketOrder::new();
        order.update_count(TicketKind::Full, true);
        order.update_count(TicketKind::Full, true);
        order.update_count(TicketKind::Student, true);
        order.update_count(TicketKind::Group, true);

        assert_eq!(order.total_tickets(), 4);
        assert_eq!(order.subtotal(TicketKind::Full, &tariffs), Money::xof(6000));
        assert_eq!(order.total_price(&tariffs), Money::xof(9000));
    }

    #[test]
    fn purchase_requires_date_first() {
        let tariffs = seed::ticket_types();
        let order = TicketOrder::new();
        let outcome = order.purchase(&tariffs);
        assert!(!outcome.is_confirmed());
        assert_eq!(outcome.notice().title, "Date requise");
        assert!(outcome.notice().is_destructive());
    }

    #[test]
    fn purchase_requires_a_ticket() {
        let tariffs = seed::ticket_types();
        let mut order = TicketOrder::new();
        order.select_visit_date(date(2025, 10, 20), date(2025, 10, 19)).unwrap();
        let before = order.clone();

        let outcome = order.purchase(&tariffs);
        assert_eq!(outcome.notice().title, "Billets requis");
        assert_eq!(order, before);
    }

    #[test]
    fn purchase_confirms_with_french_date() {
        let tariffs = seed::ticket_types();
        let mut order = TicketOrder::new();
        order.select_visit_date(date(2025, 10, 20), date(2025, 10, 1)).unwrap();
        order.update_count(TicketKind::Full, true);
        order.update_count(TicketKind::Student, true);

        match order.purchase(&tariffs) {
            PurchaseOutcome::Confirmed {
                tickets,
                total,
                notice,
                ..
            } => {
                assert_eq!(tickets, 2);
                assert_eq!(total, Money::xof(3500));
                assert_eq!(notice.title, "Réservation confirmée !");
                assert_eq!(
                    notice.description.as_deref(),
                    Some("2 billet(s) réservé(s) pour le 20 octobre 2025")
                );
            }
            other => panic!("expected confirmation, got {other:?}"),
        }
    }

    #[test]
    fn past_and_same_day_dates_are_rejected() {
        let mut order = TicketOrder::new();
        let today = date(2025, 10, 19);
        assert!(order.select_visit_date(today, today).is_err());
        assert!(order.select_visit_date(date(2025, 1, 1), today).is_err());
        assert_eq!(order.visit_date(), None);
    }

    #[test]
    fn french_month_names() {
        assert_eq!(french_long_date(date(2025, 8, 1)), "1 août 2025");
        assert_eq!(french_long_date(date(2025, 2, 28)), "28 février 2025");
    }
}
