//! Route definitions for the `/projects` resource.
//!
//! Also nests the project-owned data and note routes under
//! `/projects/{project_id}/...`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{project, project_data, project_note};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                                  -> list (?skip, limit)
/// POST   /                                  -> create
/// GET    /{id}                              -> get_by_id
/// PATCH  /{id}                              -> update
/// DELETE /{id}                              -> delete
/// GET    /{id}/status                       -> derived light status
///
/// GET    /{project_id}/data                 -> list_by_project
/// POST   /{project_id}/data                 -> create
/// GET    /{project_id}/data/{id}            -> get_by_id
/// PATCH  /{project_id}/data/{id}            -> update
/// DELETE /{project_id}/data/{id}            -> delete
///
/// GET    /{project_id}/notes                -> list_by_project
/// POST   /{project_id}/notes                -> create
/// GET    /{project_id}/notes/{id}           -> get_by_id
/// PATCH  /{project_id}/notes/{id}           -> update
/// DELETE /{project_id}/notes/{id}           -> delete
/// ```
pub fn router() -> Router<AppState> {
    let data_routes = Router::new()
        .route(
            "/",
            get(project_data::list_by_project).post(project_data::create),
        )
        .route(
            "/{id}",
            get(project_data::get_by_id)
                .patch(project_data::update)
                .delete(project_data::delete),
        );

    let note_routes = Router::new()
        .route(
            "/",
            get(project_note::list_by_project).post(project_note::create),
        )
        .route(
            "/{id}",
            get(project_note::get_by_id)
                .patch(project_note::update)
                .delete(project_note::delete),
        );

    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .patch(project::update)
                .delete(project::delete),
        )
        .route("/{id}/status", get(project::status))
        .nest("/{project_id}/data", data_routes)
        .nest("/{project_id}/notes", note_routes)
}
