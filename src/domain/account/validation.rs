//! Username and password policy

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::entity::Username;
use crate::domain::DomainError;

/// Raw usernames may only contain ASCII letters and digits
static USERNAME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9]+$").unwrap());

pub const DEFAULT_USERNAME_MIN_LENGTH: usize = 4;
pub const DEFAULT_USERNAME_MAX_LENGTH: usize = 16;
pub const DEFAULT_PASSWORD_MIN_LENGTH: usize = 8;
pub const DEFAULT_PASSWORD_MAX_LENGTH: usize = 32;

/// Errors that can occur while validating registration input
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    #[error("Username can only contain letters and numbers")]
    InvalidUsernameFormat,

    #[error("Username must start with a letter")]
    UsernameMustStartWithLetter,

    #[error("Username should be between {min} - {max} characters in length")]
    InvalidUsernameLength { min: usize, max: usize },

    #[error("Password should be between {min} - {max} characters in length")]
    InvalidPasswordLength { min: usize, max: usize },
}

/// Trim and lowercase a username.
///
/// Idempotent: normalizing an already normalized value returns it unchanged.
pub fn normalize_username(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Length bounds applied to usernames and passwords at registration time.
///
/// Both bounds are inclusive and counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationPolicy {
    username_min_length: usize,
    username_max_length: usize,
    password_min_length: usize,
    password_max_length: usize,
}

impl Default for RegistrationPolicy {
    fn default() -> Self {
        Self {
            username_min_length: DEFAULT_USERNAME_MIN_LENGTH,
            username_max_length: DEFAULT_USERNAME_MAX_LENGTH,
            password_min_length: DEFAULT_PASSWORD_MIN_LENGTH,
            password_max_length: DEFAULT_PASSWORD_MAX_LENGTH,
        }
    }
}

impl RegistrationPolicy {
    /// Build a policy, rejecting empty or inverted ranges
    pub fn new(
        username_min_length: usize,
        username_max_length: usize,
        password_min_length: usize,
        password_max_length: usize,
    ) -> Result<Self, DomainError> {
        check_bounds("username", username_min_length, username_max_length)?;
        check_bounds("password", password_min_length, password_max_length)?;

        Ok(Self {
            username_min_length,
            username_max_length,
            password_min_length,
            password_max_length,
        })
    }

    pub fn username_min_length(&self) -> usize {
        self.username_min_length
    }

    pub fn username_max_length(&self) -> usize {
        self.username_max_length
    }

    pub fn password_min_length(&self) -> usize {
        self.password_min_length
    }

    pub fn password_max_length(&self) -> usize {
        self.password_max_length
    }

    /// Validate a raw username and return its normalized form
    ///
    /// Rules (first failure wins):
    /// - Only ASCII letters and digits
    /// - Trimmed and lowercased
    /// - Must start with a letter
    /// - Length within the configured bound
    pub fn validate_username(&self, raw: &str) -> Result<Username, AccountValidationError> {
        if !USERNAME_PATTERN.is_match(raw) {
            return Err(AccountValidationError::InvalidUsernameFormat);
        }

        let normalized = normalize_username(raw);

        match normalized.chars().next() {
            Some(c) if c.is_ascii_alphabetic() => {}
            _ => return Err(AccountValidationError::UsernameMustStartWithLetter),
        }

        let length = normalized.chars().count();

        if length < self.username_min_length || length > self.username_max_length {
            return Err(AccountValidationError::InvalidUsernameLength {
                min: self.username_min_length,
                max: self.username_max_length,
            });
        }

        Ok(Username::from_normalized(normalized))
    }

    /// Validate a plaintext password. Case and whitespace are significant.
    pub fn validate_password(&self, raw: &str) -> Result<(), AccountValidationError> {
        let length = raw.chars().count();

        if length < self.password_min_length || length > self.password_max_length {
            return Err(AccountValidationError::InvalidPasswordLength {
                min: self.password_min_length,
                max: self.password_max_length,
            });
        }

        Ok(())
    }
}

fn check_bounds(field: &str, min: usize, max: usize) -> Result<(), DomainError> {
    if min == 0 {
        return Err(DomainError::configuration(format!(
            "{} minimum length must be at least 1",
            field
        )));
    }

    if min > max {
        return Err(DomainError::configuration(format!(
            "{} minimum length {} exceeds maximum length {}",
            field, min, max
        )));
    }

    Ok(())
}
