use axum::routing::get;
use axum::Router;

use crate::handlers::lookup;
use crate::state::AppState;

/// `/statuses` and `/priorities`, both read-only.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/statuses", get(lookup::list_statuses))
        .route("/priorities", get(lookup::list_priorities))
}
