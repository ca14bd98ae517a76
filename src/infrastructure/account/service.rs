//! Registration service: the account creation and username availability workflows

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::domain::account::{
    Account, AccountRepository, AccountRole, RegistrationError, RegistrationPolicy, Username,
};
use crate::domain::DomainError;

use super::password::PasswordHasher;

/// Request for registering a new account
#[derive(Clone)]
pub struct RegisterAccountRequest {
    pub username: String,
    pub password: String,
    /// Requested role; only empty or the default role is accepted
    pub role: Option<String>,
}

impl std::fmt::Debug for RegisterAccountRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterAccountRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("role", &self.role)
            .finish()
    }
}

/// Orchestrates validation, the uniqueness check, hashing and persistence
pub struct RegistrationService {
    repository: Arc<dyn AccountRepository>,
    hasher: Arc<dyn PasswordHasher>,
    policy: RegistrationPolicy,
}

impl std::fmt::Debug for RegistrationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationService")
            .field("hasher", &self.hasher)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl RegistrationService {
    /// Create a new registration service
    pub fn new(
        repository: Arc<dyn AccountRepository>,
        hasher: Arc<dyn PasswordHasher>,
        policy: RegistrationPolicy,
    ) -> Self {
        Self {
            repository,
            hasher,
            policy,
        }
    }

    pub fn policy(&self) -> &RegistrationPolicy {
        &self.policy
    }

    /// Check that the underlying store is reachable
    pub async fn store_ready(&self) -> Result<(), DomainError> {
        self.repository.ping().await
    }

    /// Register a new account.
    ///
    /// The first failing step ends the workflow. A uniqueness violation
    /// raised by the store on insert is reported the same way as a
    /// duplicate found by the pre-check.
    pub async fn register(
        &self,
        request: RegisterAccountRequest,
    ) -> Result<Account, RegistrationError> {
        let username = self.policy.validate_username(&request.username)?;
        self.policy.validate_password(&request.password)?;

        if !AccountRole::is_self_assignable(request.role.as_deref()) {
            let role = request.role.unwrap_or_default();
            warn!(
                username = %username,
                role = %role,
                "Rejected registration requesting a privileged role"
            );
            return Err(RegistrationError::ForbiddenRole(role));
        }

        self.ensure_available(&username).await?;

        let password_hash = self.hasher.hash(&request.password).map_err(|e| {
            error!(username = %username, error = %e, "Password hashing failed");
            RegistrationError::HashingFailed(e.to_string())
        })?;

        let account = Account::new(username.clone(), password_hash);

        let account = self.repository.insert(account).await.map_err(|e| {
            if e.is_conflict() {
                info!(username = %username, "Username taken by a concurrent registration");
                RegistrationError::DuplicateIdentifier(username.to_string())
            } else {
                error!(username = %username, error = %e, "Failed to persist account");
                RegistrationError::StoreUnavailable(e.to_string())
            }
        })?;

        info!(
            username = %account.username(),
            account_id = ?account.id().map(|id| id.value()),
            "Account registered"
        );

        Ok(account)
    }

    /// Report whether a username could be registered right now.
    ///
    /// Usernames that fail validation never reach the store.
    pub async fn check_username(&self, raw: &str) -> Result<Username, RegistrationError> {
        let username = self.policy.validate_username(raw)?;
        self.ensure_available(&username).await?;
        Ok(username)
    }

    async fn ensure_available(&self, username: &Username) -> Result<(), RegistrationError> {
        let exists = self.repository.username_exists(username).await.map_err(|e| {
            error!(username = %username, error = %e, "Username lookup failed");
            RegistrationError::StoreUnavailable(e.to_string())
        })?;

        if exists {
            return Err(RegistrationError::DuplicateIdentifier(username.to_string()));
        }

        Ok(())
    }
}
