//! API middleware components

pub mod cors;
pub mod logging;
pub mod security;

pub use cors::cors_layer;
pub use logging::logging_middleware;
pub use security::security_headers_middleware;
