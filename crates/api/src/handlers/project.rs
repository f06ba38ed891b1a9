//! Handlers for the `/projects` resource, including the derived
//! light-status endpoint.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

use seedweb_core::error::CoreError;
use seedweb_core::json_text;
use seedweb_core::schedule::window_contains;
use seedweb_core::types::DbId;
use seedweb_db::models::project::{CreateProject, Project};
use seedweb_db::repositories::{ProfileRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::query::PageParams;
use crate::state::AppState;

/// Derived status payload: whether the light is on now, and the attached
/// profile's decoded colors.
#[derive(Debug, Serialize)]
pub struct ProjectStatus {
    pub status: bool,
    pub profile: Value,
}

/// POST /projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(project_id = project.id, name = %project.name, "Project created");
    Ok(Json(project))
}

/// GET /projects?skip=&limit=
pub async fn list(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool, page.skip, page.limit).await?;
    Ok(Json(projects))
}

/// GET /projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// GET /projects/{id}/status
///
/// Compares the current local time-of-day against the project's light
/// window and returns the attached profile's colors alongside.
///
/// A project without a profile reports "Project not found"; existing
/// clients depend on that response shape (see DESIGN.md).
pub async fn status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectStatus>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    let profile_id = project
        .profile_id
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    let profile = ProfileRepo::find_by_id(&state.pool, profile_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id: profile_id,
        }))?;

    let now = chrono::Local::now().time();
    let status = window_contains(project.start_time, project.end_time, now);
    let colors = profile
        .colors
        .as_deref()
        .map(json_text::decode_or_raw)
        .unwrap_or(Value::Null);

    Ok(Json(ProjectStatus {
        status,
        profile: colors,
    }))
}

/// PATCH /projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateProject>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    tracing::info!(project_id = project.id, "Project updated");
    Ok(Json(project))
}

/// DELETE /projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Value>> {
    let project = ProjectRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    tracing::info!(project_id = id, name = %project.name, "Project deleted");
    Ok(Json(json!({
        "project": format!("Project: {} deleted", project.name),
    })))
}
