pub mod auth;
pub mod category;
pub mod health;
pub mod lookup;
pub mod task;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                                   register (public)
/// /auth/login                                      login (public)
/// /auth/me                                         current user
///
/// /users                                           list
///
/// /categories                                      list, create
/// /categories/{id}                                 delete
///
/// /statuses                                        list
/// /priorities                                      list
///
/// /tasks                                           list, create
/// /tasks/{id}                                      get, update, delete
/// ```
///
/// Everything except register and login requires a Bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", user::router())
        .nest("/categories", category::router())
        .nest("/tasks", task::router())
        .merge(lookup::router())
}
