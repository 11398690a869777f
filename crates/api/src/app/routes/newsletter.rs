use std::sync::Arc;

use axum::{Json, extract::Extension};

use crate::app::dto;
use crate::app::services::AppServices;
use crate::context::SessionContext;

/// POST /newsletter
///
/// A blank address is not an HTTP error: the outcome carries the advisory.
pub async fn signup(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Json(body): Json<dto::NewsletterRequest>,
) -> Json<serde_json::Value> {
    let outcome = services.newsletter_signup(session.session_id(), &body.email);
    Json(serde_json::to_value(&outcome).unwrap_or(serde_json::Value::Null))
}
