//! Domain layer - Core business logic and entities

pub mod account;
pub mod error;

pub use account::{
    Account, AccountId, AccountRepository, AccountRole, AccountValidationError,
    RegistrationError, RegistrationPolicy, Username,
};
pub use error::DomainError;
