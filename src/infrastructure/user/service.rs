//! User service: validates requests and drives the user repository

use std::sync::Arc;

use tracing::debug;

use crate::domain::user::{User, UserId, UserRepository, UserRequest};
use crate::domain::DomainError;

/// User service for request-level user management
#[derive(Debug)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new user service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validate and store a new user
    pub async fn create(&self, request: UserRequest) -> Result<User, DomainError> {
        request
            .validate()
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let user = self
            .repository
            .insert(&request.first_name, &request.last_name, &request.biography)
            .await?;

        debug!(user_id = %user.id(), "Created user");
        Ok(user)
    }

    /// List all users
    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.repository.find_all().await
    }

    /// Get a user by ID
    pub async fn get(&self, id: &str) -> Result<Option<User>, DomainError> {
        let user_id = parse_id(id)?;
        self.repository.find_by_id(&user_id).await
    }

    /// Replace a user's fields
    pub async fn update(&self, id: &str, request: UserRequest) -> Result<User, DomainError> {
        let user_id = parse_id(id)?;

        request
            .validate()
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let user = self
            .repository
            .update(
                &user_id,
                &request.first_name,
                &request.last_name,
                &request.biography,
            )
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", id)))?;

        debug!(user_id = %user.id(), "Updated user");
        Ok(user)
    }

    /// Delete a user
    pub async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let user_id = parse_id(id)?;
        let deleted = self.repository.delete(&user_id).await?;

        if deleted {
            debug!(user_id = %user_id, "Deleted user");
        }

        Ok(deleted)
    }

    /// Count users
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }
}

fn parse_id(id: &str) -> Result<UserId, DomainError> {
    UserId::parse(id).map_err(|e| DomainError::invalid_id(e.to_string()))
}
