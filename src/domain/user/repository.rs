//! User repository and identifier generator traits

use async_trait::async_trait;

use super::entity::{User, UserId};
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Repository trait for user storage
///
/// Absence is a normal outcome (`None` / `false`). The `Err` arm is reserved
/// for internal faults such as an identifier collision.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user under a freshly generated identifier
    async fn insert(
        &self,
        first_name: &str,
        last_name: &str,
        biography: &str,
    ) -> Result<User, DomainError>;

    /// Snapshot of every stored user, in no particular order
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    /// Get a user by their ID
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Replace all text fields of an existing user
    async fn update(
        &self,
        id: &UserId,
        first_name: &str,
        last_name: &str,
        biography: &str,
    ) -> Result<Option<User>, DomainError>;

    /// Delete a user, returning whether it was present
    async fn delete(&self, id: &UserId) -> Result<bool, DomainError>;

    /// Count stored users
    async fn count(&self) -> Result<usize, DomainError>;
}

/// Source of new user identifiers
#[cfg_attr(test, automock)]
pub trait UserIdGenerator: Send + Sync {
    fn generate(&self) -> UserId;
}
