//! User entity and related types

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::validation::{validate_user_fields, UserValidationError};

/// A caller-supplied identifier that is not a UUID
#[derive(Debug, Error, Clone, PartialEq)]
#[error("Invalid ID: '{0}' is not a valid UUID")]
pub struct InvalidUserId(String);

/// User identifier - a UUID assigned by the store, never by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Parse a caller-supplied identifier string
    pub fn parse(id: &str) -> Result<Self, InvalidUserId> {
        Uuid::parse_str(id)
            .map(Self)
            .map_err(|_| InvalidUserId(id.to_string()))
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Unique identifier for the user
    id: UserId,
    first_name: String,
    last_name: String,
    biography: String,
}

impl User {
    /// Create a new user with an already-generated identifier
    pub fn new(
        id: UserId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        biography: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            biography: biography.into(),
        }
    }

    // Getters

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn biography(&self) -> &str {
        &self.biography
    }

    // Mutators

    /// Replace all text fields at once. The id is left untouched.
    pub fn replace_fields(
        &mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        biography: impl Into<String>,
    ) {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self.biography = biography.into();
    }
}

/// Field values for creating a user or replacing an existing user's fields
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserRequest {
    pub first_name: String,
    pub last_name: String,
    pub biography: String,
}

impl UserRequest {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        biography: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            biography: biography.into(),
        }
    }

    /// Check field lengths, reporting the first failing field
    pub fn validate(&self) -> Result<(), UserValidationError> {
        validate_user_fields(&self.first_name, &self.last_name, &self.biography)
    }
}
