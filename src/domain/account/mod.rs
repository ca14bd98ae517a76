//! Account domain
//!
//! Domain types and traits for self-service account registration: the
//! account entity, username/password policy, registration outcomes and the
//! repository trait.

mod entity;
mod error;
mod repository;
mod validation;

pub use entity::{Account, AccountId, AccountRole, Username};
pub use error::RegistrationError;
pub use repository::AccountRepository;
pub use validation::{
    normalize_username, AccountValidationError, RegistrationPolicy, DEFAULT_PASSWORD_MAX_LENGTH,
    DEFAULT_PASSWORD_MIN_LENGTH, DEFAULT_USERNAME_MAX_LENGTH, DEFAULT_USERNAME_MIN_LENGTH,
};

#[cfg(test)]
pub use repository::MockAccountRepository;
