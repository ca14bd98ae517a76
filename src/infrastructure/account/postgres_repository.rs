//! PostgreSQL account repository implementation

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::account::{Account, AccountId, AccountRepository, Username};
use crate::domain::DomainError;

/// PostgreSQL implementation of AccountRepository
///
/// Every query borrows a connection from the pool for its own duration, so
/// connections go back to the pool on every exit path.
#[derive(Debug, Clone)]
pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn username_exists(&self, username: &Username) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
            .bind(username.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to check username: {}", e)))
    }

    async fn insert(&self, account: Account) -> Result<Account, DomainError> {
        let points_balance = points_to_db(account.points_balance())?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO users (username, password_hash, created_at, points_balance, role)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(account.username().as_str())
        .bind(account.password_hash())
        .bind(account.created_at())
        .bind(points_balance)
        .bind(account.role().as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| insert_error(account.username(), e))?;

        Ok(account.with_id(AccountId::new(id)))
    }

    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Database ping failed: {}", e)))?;

        Ok(())
    }
}

fn insert_error(username: &Username, error: sqlx::Error) -> DomainError {
    match &error {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            DomainError::conflict(format!("Username '{}' already exists", username))
        }
        _ => DomainError::storage(format!("Failed to insert account: {}", error)),
    }
}

fn points_to_db(points: u64) -> Result<i64, DomainError> {
    i64::try_from(points)
        .map_err(|_| DomainError::validation(format!("Points balance {} out of range", points)))
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;
    use std::error::Error as StdError;

    use sqlx::error::{DatabaseError, ErrorKind};

    use super::*;
    use crate::domain::account::RegistrationPolicy;

    /// Minimal driver error reporting either a unique violation or a generic failure
    #[derive(Debug, thiserror::Error)]
    #[error("{message}")]
    struct ConstraintError {
        message: &'static str,
        unique: bool,
    }

    impl DatabaseError for ConstraintError {
        fn message(&self) -> &str {
            self.message
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(if self.unique { "23505" } else { "XX000" }))
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn constraint(&self) -> Option<&str> {
            self.unique.then_some("users_username_key")
        }

        fn kind(&self) -> ErrorKind {
            if self.unique {
                ErrorKind::UniqueViolation
            } else {
                ErrorKind::Other
            }
        }
    }

    fn database_error(unique: bool) -> sqlx::Error {
        sqlx::Error::Database(Box::new(ConstraintError {
            message: "duplicate key value violates unique constraint \"users_username_key\"",
            unique,
        }))
    }

    #[test]
    fn test_points_conversion() {
        assert_eq!(points_to_db(0).unwrap(), 0);
        assert_eq!(points_to_db(i64::MAX as u64).unwrap(), i64::MAX);
        assert!(points_to_db(u64::MAX).is_err());
    }

    #[test]
    fn test_non_constraint_errors_are_storage() {
        let username = RegistrationPolicy::default().validate_username("alice1").unwrap();

        let err = insert_error(&username, sqlx::Error::PoolTimedOut);
        assert!(matches!(err, DomainError::Storage { .. }));

        let err = insert_error(&username, sqlx::Error::RowNotFound);
        assert!(!err.is_conflict());
    }

    #[test]
    fn test_unique_violation_is_conflict() {
        let username = RegistrationPolicy::default().validate_username("alice1").unwrap();

        let err = insert_error(&username, database_error(true));

        assert!(err.is_conflict());
        assert_eq!(err.to_string(), "Conflict: Username 'alice1' already exists");
    }

    #[test]
    fn test_other_database_errors_are_storage() {
        let username = RegistrationPolicy::default().validate_username("alice1").unwrap();

        let err = insert_error(&username, database_error(false));

        assert!(matches!(err, DomainError::Storage { .. }));
    }
}
