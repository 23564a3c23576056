use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::category;
use crate::state::AppState;

/// Routes mounted at `/categories`.
///
/// ```text
/// GET    /     -> list_categories
/// POST   /     -> create_category
/// DELETE /{id} -> delete_category
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(category::list_categories).post(category::create_category),
        )
        .route("/{id}", delete(category::delete_category))
}
