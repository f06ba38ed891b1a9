//! Handlers for the `/projects/{project_id}/data` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::{json, Value};

use seedweb_core::error::CoreError;
use seedweb_core::json_text::validate_json_text;
use seedweb_core::types::DbId;
use seedweb_db::models::project_data::{CreateProjectData, ProjectData};
use seedweb_db::repositories::ProjectDataRepo;

use crate::error::{AppError, AppResult};
use crate::query::PageParams;
use crate::state::AppState;

fn validate(input: &CreateProjectData) -> Result<(), CoreError> {
    validate_json_text("sensor_data", &input.sensor_data).map_err(CoreError::Validation)
}

/// POST /projects/{project_id}/data
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateProjectData>,
) -> AppResult<Json<ProjectData>> {
    validate(&input)?;
    let reading = ProjectDataRepo::create(&state.pool, project_id, &input).await?;
    tracing::info!(project_id, data_id = reading.id, "Sensor reading recorded");
    Ok(Json(reading))
}

/// GET /projects/{project_id}/data?skip=&limit=
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Query(page): Query<PageParams>,
) -> AppResult<Json<Vec<ProjectData>>> {
    let readings =
        ProjectDataRepo::list_by_project(&state.pool, project_id, page.skip, page.limit).await?;
    Ok(Json(readings))
}

/// GET /projects/{project_id}/data/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((_project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<ProjectData>> {
    let reading = ProjectDataRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project Data",
            id,
        }))?;
    Ok(Json(reading))
}

/// PATCH /projects/{project_id}/data/{id}
pub async fn update(
    State(state): State<AppState>,
    Path((_project_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<CreateProjectData>,
) -> AppResult<Json<ProjectData>> {
    validate(&input)?;
    let reading = ProjectDataRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project Data",
            id,
        }))?;
    tracing::info!(data_id = reading.id, "Sensor reading updated");
    Ok(Json(reading))
}

/// DELETE /projects/{project_id}/data/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path((_project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Value>> {
    let reading = ProjectDataRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project Data",
            id,
        }))?;
    tracing::info!(data_id = reading.id, "Sensor reading deleted");
    Ok(Json(json!({
        "data": format!("Project Data: {} deleted", reading.id),
    })))
}
