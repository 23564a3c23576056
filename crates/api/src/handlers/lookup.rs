//! Read-only handlers for the user's statuses and priorities.

use axum::extract::State;
use axum::Json;
use taskdeck_db::models::lookup::{Priority, Status};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/statuses
pub async fn list_statuses(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Status>>>> {
    let statuses = state.tasks.list_statuses(auth_user.user_id).await?;
    Ok(Json(DataResponse { data: statuses }))
}

/// GET /api/v1/priorities
pub async fn list_priorities(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Priority>>>> {
    let priorities = state.tasks.list_priorities(auth_user.user_id).await?;
    Ok(Json(DataResponse { data: priorities }))
}
