//! Account REST API handlers
//!
//! Every query is scoped to the authenticated user; an account id owned by
//! someone else is indistinguishable from a missing one.

use crate::{
    AccountDto, AccountListResponse, AccountResponse, ApiError, ApiResult, AppState,
    CreateAccountRequest, CurrentUser, DeleteResponse, ListQuery, UpdateAccountRequest,
};

use fin_core::{AccountKind, ErrorLocation};
use fin_db::AccountRepository;

use std::panic::Location;
use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, Query, State},
};

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/accounts
///
/// List the caller's accounts with skip/limit pagination
pub async fn list_accounts(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<AccountListResponse>> {
    let accounts = AccountRepository::list(&state.pool, user.id, query.skip, query.limit).await?;

    Ok(Json(AccountListResponse {
        accounts: accounts.into_iter().map(AccountDto::from).collect(),
    }))
}

/// GET /api/v1/accounts/{id}
///
/// Get a single account by ID
pub async fn get_account(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<AccountResponse>> {
    let account = AccountRepository::find_by_id(&state.pool, id, user.id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Account {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(AccountResponse {
        account: account.into(),
    }))
}

/// POST /api/v1/accounts
///
/// Create a new account owned by the caller
pub async fn create_account(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<CreateAccountRequest>,
) -> ApiResult<Json<AccountResponse>> {
    if req.name.trim().is_empty() {
        return Err(ApiError::Validation {
            message: "Account name cannot be empty".to_string(),
            field: Some("name".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let kind = parse_kind(&req.kind)?;

    if req.initial_balance < 0.0 {
        return Err(ApiError::Validation {
            message: "initial_balance cannot be negative".to_string(),
            field: Some("initial_balance".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let mut tx = state.pool.begin().await?;

    // Uniqueness is per user, not global
    if AccountRepository::find_by_name(&mut *tx, user.id, &req.name)
        .await?
        .is_some()
    {
        return Err(ApiError::Validation {
            message: format!("An account named '{}' already exists", req.name),
            field: Some("name".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let account =
        AccountRepository::create(&mut *tx, user.id, &req.name, kind, req.initial_balance).await?;
    tx.commit().await?;

    log::info!("User {} created account {}", user.id, account.id);

    Ok(Json(AccountResponse {
        account: account.into(),
    }))
}

/// PUT /api/v1/accounts/{id}
///
/// Partial update: only fields present in the payload are applied
pub async fn update_account(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateAccountRequest>,
) -> ApiResult<Json<AccountResponse>> {
    let mut account = AccountRepository::find_by_id(&state.pool, id, user.id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Account {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    if let Some(ref name) = req.name {
        if name.trim().is_empty() {
            return Err(ApiError::Validation {
                message: "Account name cannot be empty".to_string(),
                field: Some("name".into()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if name != &account.name
            && AccountRepository::find_by_name(&state.pool, user.id, name)
                .await?
                .is_some()
        {
            return Err(ApiError::Validation {
                message: format!("An account named '{}' already exists", name),
                field: Some("name".into()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        account.name = name.clone();
    }
    if let Some(ref kind) = req.kind {
        account.kind = parse_kind(kind)?;
    }

    AccountRepository::update(&state.pool, &account).await?;

    log::info!("User {} updated account {}", user.id, account.id);

    Ok(Json(AccountResponse {
        account: account.into(),
    }))
}

/// DELETE /api/v1/accounts/{id}
///
/// Remove an account and confirm what was deleted
pub async fn delete_account(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<DeleteResponse>> {
    let account = AccountRepository::find_by_id(&state.pool, id, user.id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Account {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    AccountRepository::delete(&state.pool, id, user.id).await?;

    log::info!("User {} deleted account {}", user.id, id);

    Ok(Json(DeleteResponse {
        message: "Account deleted".to_string(),
        detail: format!("Account '{}' (id {}) was removed", account.name, id),
    }))
}

/// Parse a kind string the way the request supplies it (case-insensitive).
#[track_caller]
fn parse_kind(value: &str) -> ApiResult<AccountKind> {
    AccountKind::from_str(&value.to_lowercase()).map_err(|_| ApiError::Validation {
        message: format!(
            "Invalid kind: {}. Valid values: checking, savings, investment, digital, wallet",
            value
        ),
        field: Some("kind".into()),
        location: ErrorLocation::from(Location::caller()),
    })
}
