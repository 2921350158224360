//! Axum extractors for REST API authentication

use crate::{ApiError, AppState};

use fin_auth::AuthError;
use fin_core::{ErrorLocation, User};
use fin_db::UserRepository;

use std::future::Future;
use std::panic::Location;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

/// Resolves the authenticated user from the request's bearer token.
///
/// A malformed token, a bad signature, an elapsed expiration, a missing
/// subject, and a subject with no matching user row all produce the same
/// rejection, so callers cannot probe which emails exist.
///
/// Resolution is request-scoped; nothing is cached across requests.
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header_value = parts
                .headers
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .ok_or_else(|| AuthError::MissingHeader {
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let token = header_value
                .strip_prefix("Bearer ")
                .ok_or_else(|| AuthError::InvalidScheme {
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let claims = state.token_issuer.verify(token)?;

            let repo = UserRepository::new(state.pool.clone());
            let user = repo
                .find_by_email(&claims.sub)
                .await?
                // Same rejection as an invalid token
                .ok_or_else(|| ApiError::Unauthorized {
                    message: "Not authenticated".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })?;

            Ok(CurrentUser(user))
        }
    }
}
