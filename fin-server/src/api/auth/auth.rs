//! Authentication handlers
//!
//! Login is the only endpoint that reads the stored credential digest.
//! Unknown email and wrong password return the same response.

use crate::{ApiError, ApiResult, AppState, LoginRequest, TokenResponse};

use fin_auth::verify_password;
use fin_core::ErrorLocation;
use fin_db::UserRepository;

use std::panic::Location;

use axum::{Json, extract::State};

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/v1/auth/login
///
/// Exchange email and password for a bearer token.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let repo = UserRepository::new(state.pool.clone());
    let user = repo
        .find_by_email(&req.email)
        .await?
        .ok_or_else(invalid_credentials)?;

    if !verify_password(&req.password, &user.password_hash) {
        return Err(invalid_credentials());
    }

    let token = state
        .token_issuer
        .issue(&user.email, None)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to issue token: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    log::info!("User {} logged in", user.id);

    Ok(Json(TokenResponse {
        access_token: token,
        token_type: "bearer".to_string(),
    }))
}

#[track_caller]
fn invalid_credentials() -> ApiError {
    ApiError::Unauthorized {
        message: "Invalid email or password".to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
