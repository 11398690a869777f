//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: site content, the session store and the notice channel
//! - `routes/`: HTTP routes + handlers (one file per site page)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

use musee_core::DomainResult;

use crate::config::SiteConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: &SiteConfig) -> DomainResult<Router> {
    let content = services::SiteContent::load()?;
    let services = Arc::new(services::AppServices::new(content, config));
    Ok(build_router(services))
}

/// Router over already-built services.
pub fn build_router(services: Arc<services::AppServices>) -> Router {
    // Session routes: require an `x-session-id` header.
    let visitor = routes::session_router()
        .layer(axum::middleware::from_fn(middleware::session_middleware));

    Router::new()
        .merge(routes::public_router())
        .merge(visitor)
        .layer(ServiceBuilder::new().layer(Extension(services)))
}
