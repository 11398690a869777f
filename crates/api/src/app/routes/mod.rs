use axum::{
    Router,
    routing::{get, post},
};

pub mod collections;
pub mod events;
pub mod home;
pub mod newsletter;
pub mod quiz;
pub mod shop;
pub mod system;
pub mod tickets;
pub mod tour;

/// Endpoints that need no visitor session.
pub fn public_router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route("/sessions", post(system::create_session))
        .route("/home", get(home::home))
        .route("/artworks/:id", get(collections::artwork_detail))
        .route("/tour", get(tour::tour))
}

/// Endpoints scoped to the `x-session-id` visitor.
pub fn session_router() -> Router {
    Router::new()
        .route("/stream", get(system::stream))
        .route("/collections", get(collections::list_artworks))
        .route("/artworks/:id/like", post(collections::toggle_like))
        .route("/newsletter", post(newsletter::signup))
        .nest("/shop", shop::router())
        .nest("/events", events::router())
        .nest("/tickets", tickets::router())
        .nest("/quiz", quiz::router())
}
