//! Handlers for the `/tasks` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Deserializer};
use taskdeck_core::types::DbId;
use taskdeck_core::validation::parse_due_date;
use taskdeck_db::models::task::Task;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::services::TaskInput;
use crate::state::AppState;

/// Request body for `POST /tasks` and `PUT /tasks/{id}`.
///
/// Blank id strings read as absent: no category, or a status/priority the
/// service will reject.
#[derive(Debug, Deserialize)]
pub struct TaskRequest {
    #[serde(default, deserialize_with = "blank_id_as_none")]
    pub category_id: Option<DbId>,
    pub category_name: Option<String>,
    #[serde(default, deserialize_with = "blank_id_as_none")]
    pub status_id: Option<DbId>,
    #[serde(default, deserialize_with = "blank_id_as_none")]
    pub priority_id: Option<DbId>,
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    /// `YYYY-MM-DD`; blank means none.
    pub due_date: Option<String>,
}

fn blank_id_as_none<'de, D>(deserializer: D) -> Result<Option<DbId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(id) => id.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

impl TaskRequest {
    fn into_input(self) -> AppResult<TaskInput> {
        let due_date = parse_due_date(self.due_date.as_deref())?;
        Ok(TaskInput {
            category_id: self.category_id,
            category_name: self.category_name,
            status_id: self.status_id,
            priority_id: self.priority_id,
            title: self.title,
            description: self.description,
            due_date,
        })
    }
}

/// GET /api/v1/tasks
pub async fn list_tasks(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Task>>>> {
    let tasks = state.tasks.list(auth_user.user_id).await?;
    Ok(Json(DataResponse { data: tasks }))
}

/// GET /api/v1/tasks/{id}
pub async fn get_task(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Task>>> {
    let task = state.tasks.get(id, auth_user.user_id).await?;
    Ok(Json(DataResponse { data: task }))
}

/// POST /api/v1/tasks
pub async fn create_task(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<TaskRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Task>>)> {
    let task = state
        .tasks
        .create(auth_user.user_id, input.into_input()?)
        .await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: task })))
}

/// PUT /api/v1/tasks/{id}
pub async fn update_task(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<TaskRequest>,
) -> AppResult<Json<DataResponse<Task>>> {
    let task = state
        .tasks
        .update(id, auth_user.user_id, input.into_input()?)
        .await?;
    Ok(Json(DataResponse { data: task }))
}

/// DELETE /api/v1/tasks/{id}
pub async fn delete_task(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    state.tasks.delete(id, auth_user.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
