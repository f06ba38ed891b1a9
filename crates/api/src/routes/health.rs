use axum::routing::get;
use axum::Router;

use crate::handlers::health;
use crate::state::AppState;

/// Mount the health check route (root-level, outside the resource tree).
pub fn router() -> Router<AppState> {
    Router::new().route("/healthcheck", get(health::healthcheck))
}
