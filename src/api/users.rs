//! User CRUD endpoints

use axum::{
    extract::{FromRequestParts, Path, State},
    http::{request::Parts, StatusCode},
    routing::get,
    Router,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::error::INVALID_ID_MESSAGE;
use crate::api::types::{ApiError, DataResponse, Json};
use crate::domain::{DomainError, User, UserId, UserRequest};

pub const USER_DELETED_MESSAGE: &str = "User Deleted";

/// Create the user router, mounted under `/api/users`
pub fn create_users_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_users)
                .post(create_user)
                .fallback(method_not_allowed),
        )
        .route(
            "/{user_id}",
            get(get_user)
                .put(update_user)
                .delete(delete_user)
                .fallback(method_not_allowed),
        )
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<UserRequest>,
) -> Result<(StatusCode, Json<DataResponse<User>>), ApiError> {
    debug!(first_name = %request.first_name, "Creating user");

    let user = state.user_service.create(request).await?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(user))))
}

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<User>>>, ApiError> {
    debug!("Listing all users");

    let users = state.user_service.list().await?;

    Ok(Json(DataResponse::new(users)))
}

/// GET /api/users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<DataResponse<User>>, ApiError> {
    debug!(user_id = %user_id, "Getting user");

    let user = state
        .user_service
        .get(&user_id)
        .await?
        .ok_or_else(ApiError::user_not_found)?;

    Ok(Json(DataResponse::new(user)))
}

/// Path identifier that has already been checked to be a UUID
///
/// Extracted from the request head, so a malformed id is rejected before
/// any body extractor reads the payload.
pub struct UserIdPath(pub String);

impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::bad_request(INVALID_ID_MESSAGE))?;

        UserId::parse(&raw).map_err(|e| DomainError::invalid_id(e.to_string()))?;

        Ok(Self(raw))
    }
}

/// PUT /api/users/{user_id}
pub async fn update_user(
    State(state): State<AppState>,
    UserIdPath(user_id): UserIdPath,
    Json(request): Json<UserRequest>,
) -> Result<Json<DataResponse<User>>, ApiError> {
    debug!(user_id = %user_id, "Updating user");

    let user = state.user_service.update(&user_id, request).await?;

    Ok(Json(DataResponse::new(user)))
}

/// DELETE /api/users/{user_id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<DataResponse<&'static str>>, ApiError> {
    debug!(user_id = %user_id, "Deleting user");

    if !state.user_service.delete(&user_id).await? {
        return Err(ApiError::user_not_found());
    }

    Ok(Json(DataResponse::new(USER_DELETED_MESSAGE)))
}

async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}
