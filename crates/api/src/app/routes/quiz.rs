use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    routing::{get, post},
};

use musee_quiz::QuizCommand;

use crate::app::dto;
use crate::app::errors::ApiError;
use crate::app::services::AppServices;
use crate::context::SessionContext;

pub fn router() -> Router {
    Router::new()
        .route("/", get(current))
        .route("/answer", post(answer))
        .route("/advance", post(advance))
        .route("/restart", post(restart))
}

/// GET /quiz
pub async fn current(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
) -> Json<serde_json::Value> {
    let visitor = services.snapshot(session.session_id());
    Json(serde_json::json!({ "view": visitor.quiz.view(), "notice": null }))
}

/// POST /quiz/answer
pub async fn answer(
    services: Extension<Arc<AppServices>>,
    session: Extension<SessionContext>,
    Json(body): Json<dto::AnswerRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    step(services, session, QuizCommand::SelectAnswer(body.answer_index))
}

/// POST /quiz/advance
pub async fn advance(
    services: Extension<Arc<AppServices>>,
    session: Extension<SessionContext>,
) -> Result<Json<serde_json::Value>, ApiError> {
    step(services, session, QuizCommand::Advance)
}

/// POST /quiz/restart
pub async fn restart(
    services: Extension<Arc<AppServices>>,
    session: Extension<SessionContext>,
) -> Result<Json<serde_json::Value>, ApiError> {
    step(services, session, QuizCommand::Restart)
}

fn step(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    command: QuizCommand,
) -> Result<Json<serde_json::Value>, ApiError> {
    let out = services.quiz(session.session_id(), command)?;
    Ok(Json(serde_json::json!({
        "view": out.view,
        "notice": dto::notice_to_json(out.notice.as_ref()),
    })))
}
