//! Handlers for the `/users` resource.

use axum::extract::State;
use axum::Json;
use taskdeck_db::models::user::UserResponse;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/users
///
/// List every account. Requires authentication; no pagination.
pub async fn list_users(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<UserResponse>>>> {
    let users = state.auth.list_users().await?;
    Ok(Json(DataResponse {
        data: users.into_iter().map(UserResponse::from).collect(),
    }))
}
