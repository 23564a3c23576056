//! Handlers for the `/auth` resource (register, login, me).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use taskdeck_db::models::user::UserResponse;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Successful authentication response returned by login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Create an account. Returns 201 with the user (never the password hash).
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = state
        .auth
        .register(&input.name, &input.email, &input.password)
        .await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// POST /api/v1/auth/login
///
/// Authenticate with email + password. Returns a bearer token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let session = state.auth.login(&input.email, &input.password).await?;
    Ok(Json(AuthResponse {
        token: session.token,
        expires_in: session.expires_in,
        user: session.user.into(),
    }))
}

/// GET /api/v1/auth/me
pub async fn me(State(state): State<AppState>, auth_user: AuthUser) -> AppResult<Json<UserResponse>> {
    let user = state.auth.current_user(auth_user.user_id).await?;
    Ok(Json(user.into()))
}
