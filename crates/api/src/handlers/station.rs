//! Handlers for the `/stations` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use railyard_core::error::CoreError;
use railyard_core::types::DbId;
use railyard_core::validation::station::check_station;
use railyard_db::models::platform::Platform;
use railyard_db::models::station::{CreateStation, Station, UpdateStation};
use railyard_db::repositories::{PlatformRepo, StationRepo};
use railyard_db::PgScheduleLookup;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Station",
        id,
    })
}

/// POST /api/v1/stations
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateStation>,
) -> AppResult<(StatusCode, Json<Station>)> {
    let lookup = PgScheduleLookup::new(&state.pool);
    let record = check_station(&lookup, input.name.as_deref(), input.city.as_deref(), None).await?;
    let station = StationRepo::create(&state.pool, &record).await?;
    tracing::info!(station_id = station.id, name = %station.name, "Station created");
    Ok((StatusCode::CREATED, Json(station)))
}

/// GET /api/v1/stations
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Station>>> {
    let stations = StationRepo::list(&state.pool).await?;
    Ok(Json(stations))
}

/// GET /api/v1/stations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Station>> {
    let station = StationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(station))
}

/// PUT /api/v1/stations/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStation>,
) -> AppResult<Json<Station>> {
    let existing = StationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let lookup = PgScheduleLookup::new(&state.pool);
    let record = check_station(
        &lookup,
        Some(input.name.as_deref().unwrap_or(&existing.name)),
        input.city.as_deref().or(existing.city.as_deref()),
        Some(id),
    )
    .await?;

    let station = StationRepo::update(&state.pool, id, &record)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(station))
}

/// DELETE /api/v1/stations/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if StationRepo::delete(&state.pool, id).await? {
        tracing::info!(station_id = id, "Station deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

/// GET /api/v1/stations/{id}/platforms
pub async fn list_platforms(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Platform>>> {
    StationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let platforms = PlatformRepo::list_by_station(&state.pool, id).await?;
    Ok(Json(platforms))
}
