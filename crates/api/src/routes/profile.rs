//! Route definitions for the `/profiles` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

/// Routes mounted at `/profiles`.
///
/// ```text
/// GET    /          -> list (?skip, limit)
/// POST   /          -> create
/// GET    /{id}      -> get_by_id
/// PATCH  /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(profile::list).post(profile::create))
        .route(
            "/{id}",
            get(profile::get_by_id)
                .patch(profile::update)
                .delete(profile::delete),
        )
}
