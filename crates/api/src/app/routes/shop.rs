use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    routing::{get, post},
};

use musee_core::{DomainError, ItemId};
use musee_session::{InteractionCommand, InteractionState, cart_lines, cart_totals};

use crate::app::dto;
use crate::app::errors::ApiError;
use crate::app::services::AppServices;
use crate::context::SessionContext;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/:id/wishlist", post(toggle_wishlist))
        .route("/cart", get(get_cart))
        .route("/cart/:id", post(add_to_cart).delete(remove_from_cart))
}

/// GET /shop?q=&category=
pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Query(query): Query<dto::ListQuery>,
) -> Json<serde_json::Value> {
    let shop = &services.content().shop;
    let visitor = services.snapshot(session.session_id());
    let category = query.category();

    let items: Vec<_> = shop
        .filter(query.query(), &category)
        .into_iter()
        .map(|p| dto::product_to_json(p, &visitor.interaction))
        .collect();

    Json(serde_json::json!({
        "categories": shop.facets(),
        "query": query.query(),
        "category": category,
        "count": items.len(),
        "items": items,
        "cart": dto::cart_totals_to_json(cart_totals(&visitor.interaction, shop)),
    }))
}

/// POST /shop/:id/wishlist
pub async fn toggle_wishlist(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id = known_product(&services, &id)?;
    let out = services.interact(session.session_id(), InteractionCommand::ToggleWishlist(id))?;

    Ok(Json(serde_json::json!({
        "id": id,
        "wishlisted": out.state.is_wishlisted(id),
        "notice": dto::notice_to_json(out.notice.as_ref()),
    })))
}

/// GET /shop/cart
pub async fn get_cart(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
) -> Json<serde_json::Value> {
    let visitor = services.snapshot(session.session_id());
    Json(cart_to_json(&services, &visitor.interaction))
}

/// POST /shop/cart/:id
pub async fn add_to_cart(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id = known_product(&services, &id)?;
    let out = services.interact(session.session_id(), InteractionCommand::AddToCart(id))?;

    let mut body = cart_to_json(&services, &out.state);
    body["notice"] = dto::notice_to_json(out.notice.as_ref());
    Ok(Json(body))
}

/// DELETE /shop/cart/:id
///
/// Takes one unit off the line; a line reaching zero disappears.
pub async fn remove_from_cart(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id = known_product(&services, &id)?;
    let out = services.interact(session.session_id(), InteractionCommand::RemoveFromCart(id))?;

    let mut body = cart_to_json(&services, &out.state);
    body["notice"] = dto::notice_to_json(out.notice.as_ref());
    Ok(Json(body))
}

fn known_product(services: &AppServices, raw: &str) -> Result<ItemId, ApiError> {
    let id: ItemId = raw.parse()?;
    if !services.content().shop.contains(id) {
        return Err(DomainError::NotFound.into());
    }
    Ok(id)
}

fn cart_to_json(services: &AppServices, state: &InteractionState) -> serde_json::Value {
    let shop = &services.content().shop;
    serde_json::json!({
        "lines": cart_lines(state, shop)
            .iter()
            .map(|line| dto::cart_line_to_json(line, shop.get(line.item_id)))
            .collect::<Vec<_>>(),
        "totals": dto::cart_totals_to_json(cart_totals(state, shop)),
    })
}
