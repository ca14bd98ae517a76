//! Cross-origin policy

use axum::http::{header, Method};
use tower_http::cors::{Any, CorsLayer};

/// Any origin may call the API with `POST`, `GET` or `OPTIONS` and a
/// `Content-Type` header. Preflight requests are answered here with an
/// empty 200 and never reach a handler.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
