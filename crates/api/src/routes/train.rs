//! Route definitions for the `/trains` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::train;
use crate::state::AppState;

/// Routes mounted at `/trains`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(train::list).post(train::create))
        .route(
            "/{id}",
            get(train::get_by_id)
                .put(train::update)
                .delete(train::delete),
        )
}
