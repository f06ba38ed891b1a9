pub mod health;
pub mod profile;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree (mounted at the root).
///
/// ```text
/// /profiles                                 list, create
/// /profiles/{id}                            get, update, delete
///
/// /projects                                 list, create
/// /projects/{id}                            get, update, delete
/// /projects/{id}/status                     derived light status
/// /projects/{project_id}/data               list, create
/// /projects/{project_id}/data/{id}          get, update, delete
/// /projects/{project_id}/notes              list, create
/// /projects/{project_id}/notes/{id}         get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/profiles", profile::router())
        .nest("/projects", project::router())
}
