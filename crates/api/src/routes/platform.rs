//! Route definitions for the `/platforms` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::platform;
use crate::state::AppState;

/// Routes mounted at `/platforms`.
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
        .route("/", get(platform::list).post(platform::create))
        .route(
            "/{id}",
            get(platform::get_by_id)
                .put(platform::update)
                .delete(platform::delete),
        )
}
