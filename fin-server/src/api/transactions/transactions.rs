//! Transaction REST API handlers
//!
//! Creating a transaction checks that the referenced account and category
//! belong to the caller inside the same database transaction as the insert,
//! so a failed check rolls the whole operation back.

use crate::{
    ApiError, ApiResult, AppState, CreateTransactionRequest, CurrentUser, DeleteResponse,
    ListQuery, TransactionDto, TransactionListResponse, TransactionResponse,
    UpdateTransactionRequest,
};

use fin_core::{ErrorLocation, TransactionKind};
use fin_db::{AccountRepository, CategoryRepository, TransactionRepository};

use std::panic::Location;
use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::Utc;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/transactions
///
/// List the caller's transactions with skip/limit pagination
pub async fn list_transactions(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<TransactionListResponse>> {
    let transactions =
        TransactionRepository::list(&state.pool, user.id, query.skip, query.limit).await?;

    Ok(Json(TransactionListResponse {
        transactions: transactions
            .into_iter()
            .map(TransactionDto::from)
            .collect(),
    }))
}

/// GET /api/v1/transactions/{id}
///
/// Get a single transaction by ID
pub async fn get_transaction(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<TransactionResponse>> {
    let transaction = TransactionRepository::find_by_id(&state.pool, id, user.id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Transaction {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(TransactionResponse {
        transaction: transaction.into(),
    }))
}

/// POST /api/v1/transactions
///
/// Record a transaction against one of the caller's accounts
pub async fn create_transaction(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<CreateTransactionRequest>,
) -> ApiResult<Json<TransactionResponse>> {
    if req.description.trim().is_empty() {
        return Err(ApiError::Validation {
            message: "Description cannot be empty".to_string(),
            field: Some("description".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    if req.amount <= 0.0 {
        return Err(ApiError::Validation {
            message: "Amount must be greater than zero".to_string(),
            field: Some("amount".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let kind = parse_kind(&req.kind)?;
    let date = req.date.unwrap_or_else(|| Utc::now().date_naive());

    let mut tx = state.pool.begin().await?;

    // Both references must point at rows the caller owns
    if AccountRepository::find_by_id(&mut *tx, req.account_id, user.id)
        .await?
        .is_none()
    {
        return Err(ApiError::Validation {
            message: format!("Account {} not found", req.account_id),
            field: Some("account_id".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    if CategoryRepository::find_by_id(&mut *tx, req.category_id, user.id)
        .await?
        .is_none()
    {
        return Err(ApiError::Validation {
            message: format!("Category {} not found", req.category_id),
            field: Some("category_id".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let transaction = TransactionRepository::create(
        &mut *tx,
        user.id,
        req.account_id,
        req.category_id,
        &req.description,
        req.amount,
        kind,
        date,
    )
    .await?;
    tx.commit().await?;

    log::info!("User {} created transaction {}", user.id, transaction.id);

    Ok(Json(TransactionResponse {
        transaction: transaction.into(),
    }))
}

/// PUT /api/v1/transactions/{id}
///
/// Partial update: only fields present in the payload are applied
pub async fn update_transaction(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateTransactionRequest>,
) -> ApiResult<Json<TransactionResponse>> {
    let mut transaction = TransactionRepository::find_by_id(&state.pool, id, user.id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Transaction {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    if let Some(ref description) = req.description {
        if description.trim().is_empty() {
            return Err(ApiError::Validation {
                message: "Description cannot be empty".to_string(),
                field: Some("description".into()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        transaction.description = description.clone();
    }
    if let Some(amount) = req.amount {
        if amount <= 0.0 {
            return Err(ApiError::Validation {
                message: "Amount must be greater than zero".to_string(),
                field: Some("amount".into()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        transaction.amount = amount;
    }
    if let Some(ref kind) = req.kind {
        transaction.kind = parse_kind(kind)?;
    }
    if let Some(category_id) = req.category_id {
        if CategoryRepository::find_by_id(&state.pool, category_id, user.id)
            .await?
            .is_none()
        {
            return Err(ApiError::Validation {
                message: format!("Category {} not found", category_id),
                field: Some("category_id".into()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        transaction.category_id = category_id;
    }
    if let Some(date) = req.date {
        transaction.date = date;
    }

    TransactionRepository::update(&state.pool, &transaction).await?;

    log::info!("User {} updated transaction {}", user.id, transaction.id);

    Ok(Json(TransactionResponse {
        transaction: transaction.into(),
    }))
}

/// DELETE /api/v1/transactions/{id}
///
/// Remove a transaction and confirm what was deleted
pub async fn delete_transaction(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<DeleteResponse>> {
    let transaction = TransactionRepository::find_by_id(&state.pool, id, user.id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Transaction {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    TransactionRepository::delete(&state.pool, id, user.id).await?;

    log::info!("User {} deleted transaction {}", user.id, id);

    Ok(Json(DeleteResponse {
        message: "Transaction deleted".to_string(),
        detail: format!(
            "Transaction '{}' (id {}) was removed",
            transaction.description, id
        ),
    }))
}

#[track_caller]
fn parse_kind(value: &str) -> ApiResult<TransactionKind> {
    TransactionKind::from_str(&value.to_lowercase()).map_err(|_| ApiError::Validation {
        message: format!("Invalid kind: {}. Valid values: income, expense", value),
        field: Some("kind".into()),
        location: ErrorLocation::from(Location::caller()),
    })
}
