//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::account::RegistrationService;

/// Application state shared by all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub registration_service: Arc<RegistrationService>,
}

impl AppState {
    pub fn new(registration_service: Arc<RegistrationService>) -> Self {
        Self {
            registration_service,
        }
    }
}
