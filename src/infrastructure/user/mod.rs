//! User infrastructure module
//!
//! This module provides the in-memory user store, the UUID identifier
//! generator, and the user service that validates requests before they
//! reach the store.

mod generator;
mod repository;
mod service;

pub use generator::UuidV4Generator;
pub use repository::InMemoryUserRepository;
pub use service::UserService;
