//! Handlers for the `/trains` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use railyard_core::error::CoreError;
use railyard_core::types::DbId;
use railyard_core::validation::train::check_train;
use railyard_db::models::train::{CreateTrain, Train, UpdateTrain};
use railyard_db::repositories::TrainRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Train", id })
}

/// POST /api/v1/trains
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTrain>,
) -> AppResult<(StatusCode, Json<Train>)> {
    let record = check_train(
        input.train_num.as_deref(),
        input.service_type.as_deref(),
        input.origin.as_deref(),
        input.destination.as_deref(),
    )?;
    let train = TrainRepo::create(&state.pool, &record).await?;
    tracing::info!(train_id = train.id, service_type = %train.service_type, "Train created");
    Ok((StatusCode::CREATED, Json(train)))
}

/// GET /api/v1/trains
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Train>>> {
    let trains = TrainRepo::list(&state.pool).await?;
    Ok(Json(trains))
}

/// GET /api/v1/trains/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Train>> {
    let train = TrainRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(train))
}

/// PUT /api/v1/trains/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTrain>,
) -> AppResult<Json<Train>> {
    let existing = TrainRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let record = check_train(
        input.train_num.as_deref().or(existing.train_num.as_deref()),
        Some(input.service_type.as_deref().unwrap_or(&existing.service_type)),
        Some(input.origin.as_deref().unwrap_or(&existing.origin)),
        Some(input.destination.as_deref().unwrap_or(&existing.destination)),
    )?;

    let train = TrainRepo::update(&state.pool, id, &record)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(train))
}

/// DELETE /api/v1/trains/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if TrainRepo::delete(&state.pool, id).await? {
        tracing::info!(train_id = id, "Train deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
