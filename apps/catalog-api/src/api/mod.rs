//! API routes module

pub mod categories;
pub mod health;
pub mod products;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create all API routes (nested under `/api` by `create_router`)
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/products", products::router(state))
        .nest("/categories", categories::router(state))
}

/// Readiness probe backed by a database round-trip
pub fn ready_router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
