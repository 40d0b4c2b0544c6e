//! User CRUD API
//!
//! A minimal HTTP service exposing create/read/update/delete operations over
//! users held in an in-memory store:
//! - Field validation before anything reaches the store
//! - UUID identifiers that are never reused
//! - A read/write lock around the shared user map

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::user::{InMemoryUserRepository, UserService};

/// Wire the in-memory store and user service into the shared application state
pub fn create_app_state() -> AppState {
    let repository = Arc::new(InMemoryUserRepository::new());
    let user_service = Arc::new(UserService::new(repository));

    tracing::info!("User service initialized with in-memory storage");

    AppState::new(user_service)
}
