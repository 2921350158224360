//! User REST API handlers
//!
//! Registration creates an identity; everything else about users is
//! read-only through this API.

use crate::{ApiError, ApiResult, AppState, CreateUserRequest, CurrentUser, UserResponse};

use fin_auth::hash_password;
use fin_core::ErrorLocation;
use fin_db::UserRepository;

use std::panic::Location;

use axum::{Json, extract::State};

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/v1/users
///
/// Register a new user. The password is stored as a hex SHA-256 digest.
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    if req.name.len() < 3 || req.name.len() > 100 {
        return Err(ApiError::Validation {
            message: "Name must be between 3 and 100 characters".to_string(),
            field: Some("name".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    if !req.email.contains('@') {
        return Err(ApiError::Validation {
            message: "Email must be a valid email address".to_string(),
            field: Some("email".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    if req.password.len() < 6 {
        return Err(ApiError::Validation {
            message: "Password must be at least 6 characters".to_string(),
            field: Some("password".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let repo = UserRepository::new(state.pool.clone());

    if repo.find_by_email(&req.email).await?.is_some() {
        return Err(ApiError::Validation {
            message: format!("Email '{}' is already registered", req.email),
            field: Some("email".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let user = repo
        .create(&req.name, &req.email, &hash_password(&req.password))
        .await?;

    log::info!("Registered user {} ({})", user.id, user.email);

    Ok(Json(UserResponse { user: user.into() }))
}

/// GET /api/v1/users/me
///
/// Return the identity resolved from the bearer token.
pub async fn get_current_user(CurrentUser(user): CurrentUser) -> ApiResult<Json<UserResponse>> {
    Ok(Json(UserResponse { user: user.into() }))
}
