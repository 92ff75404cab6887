//! Handlers for the `/assignments` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use railyard_core::error::CoreError;
use railyard_core::types::DbId;
use railyard_core::validation::assignment::check_assignment;
use railyard_db::models::assignment::{Assignment, CreateAssignment, UpdateAssignment};
use railyard_db::repositories::AssignmentRepo;
use railyard_db::PgScheduleLookup;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Assignment",
        id,
    })
}

/// POST /api/v1/assignments
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAssignment>,
) -> AppResult<(StatusCode, Json<Assignment>)> {
    let lookup = PgScheduleLookup::new(&state.pool);
    let record = check_assignment(
        &lookup,
        input.arrival_time,
        input.departure_time,
        input.train_id,
        input.platform_id,
        None,
    )
    .await?;
    let assignment = AssignmentRepo::create(&state.pool, &record).await?;
    tracing::info!(
        assignment_id = assignment.id,
        platform_id = assignment.platform_id,
        "Assignment created"
    );
    Ok((StatusCode::CREATED, Json(assignment)))
}

/// GET /api/v1/assignments
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Assignment>>> {
    let assignments = AssignmentRepo::list(&state.pool).await?;
    Ok(Json(assignments))
}

/// GET /api/v1/assignments/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Assignment>> {
    let assignment = AssignmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(assignment))
}

/// PUT /api/v1/assignments/{id}
///
/// The dwell window is re-checked as a whole, so either time may be
/// changed on its own as long as the resulting pair is valid.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAssignment>,
) -> AppResult<Json<Assignment>> {
    let existing = AssignmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let lookup = PgScheduleLookup::new(&state.pool);
    let record = check_assignment(
        &lookup,
        input.arrival_time.or(Some(existing.arrival_time)),
        input.departure_time.or(Some(existing.departure_time)),
        input.train_id.or(existing.train_id),
        input.platform_id.or(Some(existing.platform_id)),
        Some(id),
    )
    .await?;

    let assignment = AssignmentRepo::update(&state.pool, id, &record)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(assignment))
}

/// DELETE /api/v1/assignments/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if AssignmentRepo::delete(&state.pool, id).await? {
        tracing::info!(assignment_id = id, "Assignment deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
