use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path, Query},
};

use musee_catalog::{Locale, seed};
use musee_core::{DomainError, ItemId};

use crate::app::dto;
use crate::app::errors::ApiError;
use crate::app::services::AppServices;
use crate::context::SessionContext;

/// GET /collections?q=&category=
pub async fn list_artworks(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Query(query): Query<dto::ListQuery>,
) -> Json<serde_json::Value> {
    let content = services.content();
    let visitor = services.snapshot(session.session_id());
    let category = query.category();

    let items: Vec<_> = content
        .artworks
        .filter(query.query(), &category)
        .into_iter()
        .map(|a| dto::artwork_to_json(a, visitor.interaction.is_liked(a.id)))
        .collect();

    Json(serde_json::json!({
        "categories": content.artworks.facets(),
        "query": query.query(),
        "category": category,
        "count": items.len(),
        "items": items,
    }))
}

/// GET /artworks/:id?lang=fr|en|wo
pub async fn artwork_detail(
    Path(id): Path<String>,
    Query(lang): Query<dto::LangQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id: ItemId = id.parse()?;
    let locale: Locale = match lang.lang.as_deref() {
        Some(code) => code.parse()?,
        None => Locale::default(),
    };

    let detail = seed::artwork_detail(id).ok_or(DomainError::NotFound)?;
    Ok(Json(dto::artwork_detail_to_json(&detail, locale)))
}

/// POST /artworks/:id/like?from=collection|home|detail
pub async fn toggle_like(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Path(id): Path<String>,
    Query(query): Query<dto::LikeQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id: ItemId = id.parse()?;
    let surface = query.surface()?;
    let artwork = services
        .content()
        .artworks
        .get(id)
        .ok_or(DomainError::NotFound)?;

    let out = services.toggle_like(session.session_id(), id, surface)?;
    let liked = out.state.is_liked(id);

    Ok(Json(serde_json::json!({
        "id": id,
        "liked": liked,
        "likes": artwork.effective_likes(liked),
        "notice": dto::notice_to_json(out.notice.as_ref()),
    })))
}
