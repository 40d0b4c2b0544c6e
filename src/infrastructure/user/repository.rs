//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::error;

use super::generator::UuidV4Generator;
use crate::domain::user::{User, UserId, UserIdGenerator, UserRepository};
use crate::domain::DomainError;

/// In-memory implementation of UserRepository
///
/// Reads share the lock; `insert`, `update` and `delete` hold it exclusively
/// for a single map access.
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
    id_generator: Arc<dyn UserIdGenerator>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository that assigns random UUIDs
    pub fn new() -> Self {
        Self::with_generator(Arc::new(UuidV4Generator::new()))
    }

    /// Create a new empty repository with a custom identifier source
    pub fn with_generator(id_generator: Arc<dyn UserIdGenerator>) -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            id_generator,
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InMemoryUserRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryUserRepository").finish_non_exhaustive()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(
        &self,
        first_name: &str,
        last_name: &str,
        biography: &str,
    ) -> Result<User, DomainError> {
        let id = self.id_generator.generate();
        let mut users = self.users.write().await;

        if users.contains_key(&id) {
            error!(user_id = %id, "Generated user ID collides with an existing user");
            return Err(DomainError::internal(format!(
                "Generated user ID '{}' is already in use",
                id
            )));
        }

        let user = User::new(id, first_name, last_name, biography);
        users.insert(id, user.clone());

        Ok(user)
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn update(
        &self,
        id: &UserId,
        first_name: &str,
        last_name: &str,
        biography: &str,
    ) -> Result<Option<User>, DomainError> {
        let mut users = self.users.write().await;

        Ok(users.get_mut(id).map(|user| {
            user.replace_fields(first_name, last_name, biography);
            user.clone()
        }))
    }

    async fn delete(&self, id: &UserId) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        Ok(users.remove(id).is_some())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let users = self.users.read().await;
        Ok(users.len())
    }
}
