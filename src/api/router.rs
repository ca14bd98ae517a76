use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::accounts;
use super::health;
use super::middleware::{cors_layer, logging_middleware, security_headers_middleware};
use super::state::AppState;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Registration endpoints
        .merge(accounts::create_account_router())
        .with_state(state)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        // Outermost so preflight requests are answered before anything else runs
        .layer(cors_layer())
}
