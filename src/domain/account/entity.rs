//! Account entity and related types

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Store-assigned surrogate key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(i64);

impl AccountId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated, normalized (trimmed and lowercased) username.
///
/// Only obtainable through `RegistrationPolicy::validate_username`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    pub(super) fn from_normalized(value: String) -> Self {
        Self(value)
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Role of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AccountRole {
    /// Regular account; the only role self-registration may create
    #[default]
    User,
    Admin,
}

impl AccountRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    /// Whether a caller-supplied role string may be used at registration.
    ///
    /// An absent or empty value means "default role".
    pub fn is_self_assignable(requested: Option<&str>) -> bool {
        match requested {
            None => true,
            Some(role) => role.is_empty() || role == Self::default().as_str(),
        }
    }
}

impl std::fmt::Display for AccountRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered account
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    /// Assigned by the store on insert
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<AccountId>,
    username: Username,
    /// Argon2 PHC string - never exposed in serialization
    #[serde(skip_serializing)]
    password_hash: String,
    /// Unix timestamp (seconds)
    created_at: i64,
    points_balance: u64,
    role: AccountRole,
}

impl Account {
    /// Build a new, not yet persisted account with server-assigned defaults
    pub fn new(username: Username, password_hash: impl Into<String>) -> Self {
        Self {
            id: None,
            username,
            password_hash: password_hash.into(),
            created_at: Utc::now().timestamp(),
            points_balance: 0,
            role: AccountRole::default(),
        }
    }

    /// Attach the id assigned by the store
    pub fn with_id(mut self, id: AccountId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn id(&self) -> Option<AccountId> {
        self.id
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    pub fn points_balance(&self) -> u64 {
        self.points_balance
    }

    pub fn role(&self) -> AccountRole {
        self.role
    }
}
