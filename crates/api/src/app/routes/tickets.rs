use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    routing::{get, post},
};
use chrono::Utc;

use musee_catalog::TicketKind;

use crate::app::dto;
use crate::app::errors::ApiError;
use crate::app::services::AppServices;
use crate::context::SessionContext;

pub fn router() -> Router {
    Router::new()
        .route("/", get(get_tickets))
        .route("/visit-date", post(select_visit_date))
        .route("/purchase", post(purchase))
        .route("/:kind/increment", post(increment))
        .route("/:kind/decrement", post(decrement))
}

/// GET /tickets
pub async fn get_tickets(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
) -> Json<serde_json::Value> {
    let visitor = services.snapshot(session.session_id());
    Json(dto::ticket_order_to_json(
        &visitor.tickets,
        &services.content().ticket_types,
    ))
}

pub async fn increment(
    services: Extension<Arc<AppServices>>,
    session: Extension<SessionContext>,
    kind: Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    update_count(services, session, kind, true)
}

pub async fn decrement(
    services: Extension<Arc<AppServices>>,
    session: Extension<SessionContext>,
    kind: Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    update_count(services, session, kind, false)
}

fn update_count(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Path(kind): Path<String>,
    increment: bool,
) -> Result<Json<serde_json::Value>, ApiError> {
    let kind: TicketKind = kind.parse()?;
    let order = services.update_ticket_count(session.session_id(), kind, increment);
    Ok(Json(dto::ticket_order_to_json(
        &order,
        &services.content().ticket_types,
    )))
}

/// POST /tickets/visit-date
pub async fn select_visit_date(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Json(request): Json<dto::VisitDateRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let today = Utc::now().date_naive();
    let order = services.select_visit_date(session.session_id(), request.visit_date, today)?;
    Ok(Json(dto::ticket_order_to_json(
        &order,
        &services.content().ticket_types,
    )))
}

/// POST /tickets/purchase
///
/// An incomplete order answers 200 with a `refused` status and an advisory
/// and is left as it was; only a date that cannot be booked is a client error.
pub async fn purchase(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    body: Option<Json<dto::PurchaseRequest>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let request = body.map(|Json(b)| b).unwrap_or_default();
    let today = Utc::now().date_naive();

    let outcome = services.purchase_tickets(session.session_id(), request.visit_date, today)?;
    Ok(Json(
        serde_json::to_value(&outcome).unwrap_or(serde_json::Value::Null),
    ))
}
