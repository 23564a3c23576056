//! Handlers for the `/categories` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use taskdeck_core::types::DbId;
use taskdeck_db::models::category::Category;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /categories`.
#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    #[serde(default)]
    pub name: String,
}

/// GET /api/v1/categories
pub async fn list_categories(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Category>>>> {
    let categories = state.categories.list(auth_user.user_id).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// POST /api/v1/categories
pub async fn create_category(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateCategoryRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Category>>)> {
    let category = state
        .categories
        .create(auth_user.user_id, &input.name)
        .await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

/// DELETE /api/v1/categories/{id}
pub async fn delete_category(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    state.categories.delete(id, auth_user.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
