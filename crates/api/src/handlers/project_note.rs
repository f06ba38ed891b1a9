//! Handlers for the `/projects/{project_id}/notes` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::{json, Value};

use seedweb_core::error::CoreError;
use seedweb_core::types::DbId;
use seedweb_db::models::project_note::{CreateProjectNote, ProjectNote};
use seedweb_db::repositories::ProjectNoteRepo;

use crate::error::{AppError, AppResult};
use crate::query::PageParams;
use crate::state::AppState;

/// POST /projects/{project_id}/notes
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateProjectNote>,
) -> AppResult<Json<ProjectNote>> {
    let note = ProjectNoteRepo::create(&state.pool, project_id, &input).await?;
    tracing::info!(project_id, note_id = note.id, "Note added");
    Ok(Json(note))
}

/// GET /projects/{project_id}/notes?skip=&limit=
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Query(page): Query<PageParams>,
) -> AppResult<Json<Vec<ProjectNote>>> {
    let notes =
        ProjectNoteRepo::list_by_project(&state.pool, project_id, page.skip, page.limit).await?;
    Ok(Json(notes))
}

/// GET /projects/{project_id}/notes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((_project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<ProjectNote>> {
    let note = ProjectNoteRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project Note",
            id,
        }))?;
    Ok(Json(note))
}

/// PATCH /projects/{project_id}/notes/{id}
pub async fn update(
    State(state): State<AppState>,
    Path((_project_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<CreateProjectNote>,
) -> AppResult<Json<ProjectNote>> {
    let note = ProjectNoteRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project Note",
            id,
        }))?;
    tracing::info!(note_id = note.id, "Note updated");
    Ok(Json(note))
}

/// DELETE /projects/{project_id}/notes/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path((_project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Value>> {
    let note = ProjectNoteRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project Note",
            id,
        }))?;
    tracing::info!(note_id = note.id, "Note deleted");
    Ok(Json(json!({
        "note": format!("Project Note: {} deleted", note.id),
    })))
}
