use axum::routing::get;
use axum::Router;

use crate::handlers::task;
use crate::state::AppState;

/// Routes mounted at `/tasks`.
///
/// ```text
/// GET    /     -> list_tasks
/// POST   /     -> create_task
/// GET    /{id} -> get_task
/// PUT    /{id} -> update_task
/// DELETE /{id} -> delete_task
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(task::list_tasks).post(task::create_task))
        .route(
            "/{id}",
            get(task::get_task)
                .put(task::update_task)
                .delete(task::delete_task),
        )
}
