//! Category REST API handlers

use crate::{
    ApiError, ApiResult, AppState, CategoryDto, CategoryListResponse, CategoryResponse,
    CreateCategoryRequest, CurrentUser, DeleteResponse, ListQuery, UpdateCategoryRequest,
};

use fin_core::{CategoryKind, ErrorLocation};
use fin_db::CategoryRepository;

use std::panic::Location;
use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, Query, State},
};

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/categories
///
/// List the caller's categories with skip/limit pagination
pub async fn list_categories(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<CategoryListResponse>> {
    let categories =
        CategoryRepository::list(&state.pool, user.id, query.skip, query.limit).await?;

    Ok(Json(CategoryListResponse {
        categories: categories.into_iter().map(CategoryDto::from).collect(),
    }))
}

/// GET /api/v1/categories/{id}
///
/// Get a single category by ID
pub async fn get_category(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<CategoryResponse>> {
    let category = CategoryRepository::find_by_id(&state.pool, id, user.id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Category {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(CategoryResponse {
        category: category.into(),
    }))
}

/// POST /api/v1/categories
///
/// Create a new category owned by the caller
pub async fn create_category(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<CreateCategoryRequest>,
) -> ApiResult<Json<CategoryResponse>> {
    if req.name.trim().is_empty() {
        return Err(ApiError::Validation {
            message: "Category name cannot be empty".to_string(),
            field: Some("name".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let kind = parse_kind(&req.kind)?;

    let mut tx = state.pool.begin().await?;

    // Uniqueness is per user, not global
    if CategoryRepository::find_by_name(&mut *tx, user.id, &req.name)
        .await?
        .is_some()
    {
        return Err(ApiError::Validation {
            message: format!("A category named '{}' already exists", req.name),
            field: Some("name".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let category = CategoryRepository::create(&mut *tx, user.id, &req.name, kind).await?;
    tx.commit().await?;

    log::info!("User {} created category {}", user.id, category.id);

    Ok(Json(CategoryResponse {
        category: category.into(),
    }))
}

/// PUT /api/v1/categories/{id}
///
/// Partial update: only fields present in the payload are applied
pub async fn update_category(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateCategoryRequest>,
) -> ApiResult<Json<CategoryResponse>> {
    let mut category = CategoryRepository::find_by_id(&state.pool, id, user.id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Category {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    if let Some(ref name) = req.name {
        if name.trim().is_empty() {
            return Err(ApiError::Validation {
                message: "Category name cannot be empty".to_string(),
                field: Some("name".into()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if name != &category.name
            && CategoryRepository::find_by_name(&state.pool, user.id, name)
                .await?
                .is_some()
        {
            return Err(ApiError::Validation {
                message: format!("A category named '{}' already exists", name),
                field: Some("name".into()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        category.name = name.clone();
    }
    if let Some(ref kind) = req.kind {
        category.kind = parse_kind(kind)?;
    }

    CategoryRepository::update(&state.pool, &category).await?;

    log::info!("User {} updated category {}", user.id, category.id);

    Ok(Json(CategoryResponse {
        category: category.into(),
    }))
}

/// DELETE /api/v1/categories/{id}
///
/// Remove a category and confirm what was deleted
pub async fn delete_category(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<DeleteResponse>> {
    let category = CategoryRepository::find_by_id(&state.pool, id, user.id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Category {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    CategoryRepository::delete(&state.pool, id, user.id).await?;

    log::info!("User {} deleted category {}", user.id, id);

    Ok(Json(DeleteResponse {
        message: "Category deleted".to_string(),
        detail: format!("Category '{}' (id {}) was removed", category.name, id),
    }))
}

#[track_caller]
fn parse_kind(value: &str) -> ApiResult<CategoryKind> {
    CategoryKind::from_str(&value.to_lowercase()).map_err(|_| ApiError::Validation {
        message: format!("Invalid kind: {}. Valid values: income, expense", value),
        field: Some("kind".into()),
        location: ErrorLocation::from(Location::caller()),
    })
}
