use std::sync::Arc;

use axum::{Json, extract::Extension};

use musee_catalog::seed::TOUR_VIDEO;

use crate::app::services::AppServices;

/// GET /tour
pub async fn tour(Extension(services): Extension<Arc<AppServices>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "video": TOUR_VIDEO,
        "sections": services.content().tour,
    }))
}
