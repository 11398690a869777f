use std::sync::Arc;

use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, sse::Event as SseEvent},
};

use crate::app::services::{self, AppServices};
use crate::context::SessionContext;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// POST /sessions
pub async fn create_session(Extension(services): Extension<Arc<AppServices>>) -> impl IntoResponse {
    let id = services.start_session();
    (
        StatusCode::CREATED,
        Json(serde_json::json!({ "session_id": id.to_string() })),
    )
}

/// GET /stream
///
/// Notices of the requesting session, as they happen.
pub async fn stream(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
) -> axum::response::Sse<impl tokio_stream::Stream<Item = Result<SseEvent, std::convert::Infallible>>> {
    services::session_sse_stream(services, session.session_id())
}
