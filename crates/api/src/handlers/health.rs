//! Handler for the `/healthcheck` endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Whether the database is reachable.
    pub database: bool,
}

/// GET /healthcheck -- reports store connectivity.
pub async fn healthcheck(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = seedweb_db::health_check(&state.pool).await.is_ok();
    Json(HealthResponse { database })
}
