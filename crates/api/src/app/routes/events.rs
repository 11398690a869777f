use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    routing::{get, post},
};

use musee_core::{DomainError, ItemId};
use musee_session::InteractionCommand;

use crate::app::dto;
use crate::app::errors::ApiError;
use crate::app::services::AppServices;
use crate::context::SessionContext;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_events))
        .route("/:id/registration", post(toggle_registration))
}

/// GET /events?q=&category=
pub async fn list_events(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Query(query): Query<dto::ListQuery>,
) -> Json<serde_json::Value> {
    let events = &services.content().events;
    let visitor = services.snapshot(session.session_id());
    let category = query.category();

    let items: Vec<_> = events
        .filter(query.query(), &category)
        .into_iter()
        .map(|e| dto::event_to_json(e, visitor.interaction.is_registered(e.id)))
        .collect();

    Json(serde_json::json!({
        "categories": events.facets(),
        "count": items.len(),
        "items": items,
    }))
}

/// POST /events/:id/registration
pub async fn toggle_registration(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id: ItemId = id.parse()?;
    if !services.content().events.contains(id) {
        return Err(DomainError::NotFound.into());
    }

    let out = services.interact(session.session_id(), InteractionCommand::ToggleRegistration(id))?;

    Ok(Json(serde_json::json!({
        "id": id,
        "registered": out.state.is_registered(id),
        "notice": dto::notice_to_json(out.notice.as_ref()),
    })))
}
