//! Handlers for the `/platforms` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use railyard_core::error::CoreError;
use railyard_core::types::DbId;
use railyard_core::validation::platform::check_platform;
use railyard_db::models::platform::{CreatePlatform, Platform, UpdatePlatform};
use railyard_db::repositories::PlatformRepo;
use railyard_db::PgScheduleLookup;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Platform",
        id,
    })
}

/// POST /api/v1/platforms
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePlatform>,
) -> AppResult<(StatusCode, Json<Platform>)> {
    let lookup = PgScheduleLookup::new(&state.pool);
    let record =
        check_platform(&lookup, input.platform_num.as_ref(), input.station_id, None).await?;
    let platform = PlatformRepo::create(&state.pool, &record).await?;
    tracing::info!(
        platform_id = platform.id,
        platform_num = platform.platform_num,
        "Platform created"
    );
    Ok((StatusCode::CREATED, Json(platform)))
}

/// GET /api/v1/platforms
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Platform>>> {
    let platforms = PlatformRepo::list(&state.pool).await?;
    Ok(Json(platforms))
}

/// GET /api/v1/platforms/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Platform>> {
    let platform = PlatformRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(platform))
}

/// PUT /api/v1/platforms/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePlatform>,
) -> AppResult<Json<Platform>> {
    let existing = PlatformRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let platform_num = input
        .platform_num
        .unwrap_or_else(|| Value::from(existing.platform_num));
    let lookup = PgScheduleLookup::new(&state.pool);
    let record = check_platform(
        &lookup,
        Some(&platform_num),
        input.station_id.or(existing.station_id),
        Some(id),
    )
    .await?;

    let platform = PlatformRepo::update(&state.pool, id, &record)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(platform))
}

/// DELETE /api/v1/platforms/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if PlatformRepo::delete(&state.pool, id).await? {
        tracing::info!(platform_id = id, "Platform deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
