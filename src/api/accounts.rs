//! Account registration endpoints

use axum::{extract::State, routing::post, Router};
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::infrastructure::account::RegisterAccountRequest;

/// Create the registration router
pub fn create_account_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/check-username", post(check_username))
}

/// Registration request. Unknown fields are ignored; server-assigned
/// fields such as ids, timestamps and balances are never read from it.
#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub role: Option<String>,
}

/// Username availability request
#[derive(Debug, Deserialize)]
pub struct CheckUsernameRequest {
    pub username: String,
}

/// Plain acknowledgement
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Register a new account
///
/// POST /register
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .registration_service
        .register(RegisterAccountRequest {
            username: request.username,
            password: request.password,
            role: request.role,
        })
        .await?;

    Ok(Json(MessageResponse {
        message: "User registered successfully".to_string(),
    }))
}

/// Check whether a username is valid and not yet taken
///
/// POST /check-username
pub async fn check_username(
    State(state): State<AppState>,
    Json(request): Json<CheckUsernameRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .registration_service
        .check_username(&request.username)
        .await?;

    Ok(Json(MessageResponse {
        message: "Username is available".to_string(),
    }))
}
