//! In-memory account repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::account::{Account, AccountId, AccountRepository, Username};
use crate::domain::DomainError;

#[derive(Debug, Default)]
struct Inner {
    /// Keyed by normalized username, which is the unique key
    accounts: HashMap<String, Account>,
    next_id: i64,
}

/// In-memory implementation of AccountRepository
#[derive(Debug, Default, Clone)]
pub struct InMemoryAccountRepository {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryAccountRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts
    pub async fn len(&self) -> usize {
        self.inner.read().await.accounts.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Look up a stored account by normalized username
    pub async fn get(&self, username: &str) -> Option<Account> {
        self.inner.read().await.accounts.get(username).cloned()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn username_exists(&self, username: &Username) -> Result<bool, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner.accounts.contains_key(username.as_str()))
    }

    async fn insert(&self, account: Account) -> Result<Account, DomainError> {
        let mut inner = self.inner.write().await;
        let key = account.username().as_str().to_string();

        if inner.accounts.contains_key(&key) {
            return Err(DomainError::conflict(format!(
                "Username '{}' already exists",
                key
            )));
        }

        inner.next_id += 1;
        let account = account.with_id(AccountId::new(inner.next_id));
        inner.accounts.insert(key, account.clone());

        Ok(account)
    }
}
