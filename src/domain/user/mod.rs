//! User domain
//!
//! This module provides domain types and traits for user management,
//! including the user entity, field validation, and repository traits.

mod entity;
mod repository;
mod validation;

pub use entity::{InvalidUserId, User, UserId, UserRequest};
pub use repository::{UserIdGenerator, UserRepository};
pub use validation::{
    validate_biography, validate_first_name, validate_last_name, validate_user_fields,
    UserValidationError, MAX_BIOGRAPHY_LENGTH, MAX_NAME_LENGTH, MIN_BIOGRAPHY_LENGTH,
    MIN_NAME_LENGTH,
};

#[cfg(test)]
pub use repository::{MockUserIdGenerator, MockUserRepository};
