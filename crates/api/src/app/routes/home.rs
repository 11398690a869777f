use std::sync::Arc;

use axum::{Json, extract::Extension};

use musee_catalog::home::CAROUSEL_INTERVAL;

use crate::app::dto;
use crate::app::services::AppServices;

/// GET /home
pub async fn home(Extension(services): Extension<Arc<AppServices>>) -> Json<serde_json::Value> {
    let content = services.content();
    let page = &content.home;

    Json(serde_json::json!({
        "featured": page
            .featured(&content.artworks)
            .into_iter()
            .map(|a| dto::artwork_to_json(a, false))
            .collect::<Vec<_>>(),
        "preview": page
            .preview(&content.artworks)
            .into_iter()
            .map(|a| dto::artwork_to_json(a, false))
            .collect::<Vec<_>>(),
        "carousel": {
            "interval_ms": CAROUSEL_INTERVAL.as_millis() as u64,
            "events": page
                .carousel(&content.events)
                .into_iter()
                .map(|e| dto::event_to_json(e, false))
                .collect::<Vec<_>>(),
        },
    }))
}
