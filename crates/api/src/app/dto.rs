use chrono::NaiveDate;
use serde::Deserialize;

use musee_catalog::{
    Artwork, ArtworkDetail, CategoryFilter, Locale, MuseumEvent, ShopProduct, TicketType,
};
use musee_core::{DomainResult, Money};
use musee_events::Notice;
use musee_session::{CartLine, CartTotals, InteractionState, LikeSurface, TicketOrder};

// -------------------------
// Request DTOs
// -------------------------

/// `?q=&category=` of the listing pages.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
    pub category: Option<String>,
}

impl ListQuery {
    pub fn query(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }

    pub fn category(&self) -> CategoryFilter {
        self.category
            .as_deref()
            .map(CategoryFilter::parse)
            .unwrap_or_default()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LangQuery {
    pub lang: Option<String>,
}

/// `?from=collection|home|detail` of the like endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct LikeQuery {
    pub from: Option<String>,
}

impl LikeQuery {
    pub fn surface(&self) -> DomainResult<LikeSurface> {
        match self.from.as_deref() {
            Some(from) => from.parse(),
            None => Ok(LikeSurface::default()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub answer_index: usize,
}

#[derive(Debug, Default, Deserialize)]
pub struct PurchaseRequest {
    /// `YYYY-MM-DD`.
    pub visit_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct VisitDateRequest {
    pub visit_date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct NewsletterRequest {
    #[serde(default)]
    pub email: String,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn money_to_json(m: Money) -> serde_json::Value {
    serde_json::json!({
        "amount": m.amount(),
        "currency": "XOF",
        "display": m.to_string(),
    })
}

pub fn notice_to_json(notice: Option<&Notice>) -> serde_json::Value {
    serde_json::to_value(notice).unwrap_or(serde_json::Value::Null)
}

/// Artwork card; `liked` is the requesting visitor's like, if any.
pub fn artwork_to_json(a: &Artwork, liked: bool) -> serde_json::Value {
    serde_json::json!({
        "id": a.id,
        "title": a.title,
        "origin": a.origin,
        "category": a.category,
        "period": a.period,
        "image": a.image,
        "liked": liked,
        "likes": a.effective_likes(liked),
    })
}

pub fn artwork_detail_to_json(d: &ArtworkDetail, locale: Locale) -> serde_json::Value {
    let description = d.description(locale);
    serde_json::json!({
        "artwork": artwork_to_json(&d.artwork, false),
        "image": d.image,
        "video": d.video,
        "locale": locale,
        "available_locales": d.locales(),
        "description": description,
    })
}

pub fn product_to_json(p: &ShopProduct, state: &InteractionState) -> serde_json::Value {
    serde_json::json!({
        "id": p.id,
        "name": p.name,
        "category": p.category,
        "price": money_to_json(p.price),
        "image": p.image,
        "description": p.description,
        "wishlisted": state.is_wishlisted(p.id),
        "in_cart": state.quantity(p.id),
    })
}

pub fn event_to_json(e: &MuseumEvent, registered: bool) -> serde_json::Value {
    serde_json::json!({
        "id": e.id,
        "title": e.title,
        "description": e.description,
        "date": e.date,
        "time": e.time,
        "location": e.location,
        "capacity": e.capacity,
        "capacity_label": e.capacity.to_string(),
        "image": e.image,
        "category": e.category,
        "registered": registered,
    })
}

pub fn cart_totals_to_json(t: CartTotals) -> serde_json::Value {
    serde_json::json!({
        "count": t.count,
        "price": money_to_json(t.price),
    })
}

/// Cart line with the product name when the product is known.
pub fn cart_line_to_json(line: &CartLine, product: Option<&ShopProduct>) -> serde_json::Value {
    serde_json::json!({
        "item_id": line.item_id,
        "name": product.map(|p| p.name.as_str()),
        "quantity": line.quantity,
        "unit_price": line.unit_price.map(money_to_json),
        "line_total": money_to_json(line.line_total),
    })
}

pub fn ticket_order_to_json(order: &TicketOrder, tariffs: &[TicketType]) -> serde_json::Value {
    serde_json::json!({
        "types": tariffs.iter().map(|t| serde_json::json!({
            "kind": t.kind,
            "name": t.name,
            "description": t.description,
            "price": money_to_json(t.price),
            "count": order.count(t.kind),
            "subtotal": money_to_json(order.subtotal(t.kind, tariffs)),
        })).collect::<Vec<_>>(),
        "visit_date": order.visit_date(),
        "total_tickets": order.total_tickets(),
        "total_price": money_to_json(order.total_price(tariffs)),
    })
}
