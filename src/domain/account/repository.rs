//! Account repository trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::{Account, Username};
use crate::domain::DomainError;

/// Persistence boundary for accounts.
///
/// Implementations must back `insert` with a uniqueness constraint on the
/// username and report a violation as `DomainError::Conflict`; transport and
/// query failures are reported as `DomainError::Storage`.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Point lookup by normalized username
    async fn username_exists(&self, username: &Username) -> Result<bool, DomainError>;

    /// Insert a new account, returning it with the store-assigned id
    async fn insert(&self, account: Account) -> Result<Account, DomainError>;

    /// Check that the store is reachable
    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
