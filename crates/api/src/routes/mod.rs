pub mod assignment;
pub mod health;
pub mod platform;
pub mod station;
pub mod train;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /stations                          list, create
/// /stations/{id}                     get, update, delete
/// /stations/{id}/platforms           platforms at a station
///
/// /platforms                         list, create
/// /platforms/{id}                    get, update, delete
///
/// /trains                            list, create
/// /trains/{id}                       get, update, delete
///
/// /assignments                       list, create
/// /assignments/{id}                  get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/stations", station::router())
        .nest("/platforms", platform::router())
        .nest("/trains", train::router())
        .nest("/assignments", assignment::router())
}
