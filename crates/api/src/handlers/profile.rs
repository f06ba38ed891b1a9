//! Handlers for the `/profiles` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::{json, Value};

use seedweb_core::error::CoreError;
use seedweb_core::json_text::validate_json_text;
use seedweb_core::types::DbId;
use seedweb_db::models::profile::{CreateProfile, Profile};
use seedweb_db::repositories::ProfileRepo;

use crate::error::{AppError, AppResult};
use crate::query::PageParams;
use crate::state::AppState;

fn validate(input: &CreateProfile) -> Result<(), CoreError> {
    if let Some(colors) = &input.colors {
        validate_json_text("colors", colors).map_err(CoreError::Validation)?;
    }
    Ok(())
}

/// POST /profiles
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProfile>,
) -> AppResult<Json<Profile>> {
    validate(&input)?;
    let profile = ProfileRepo::create(&state.pool, &input).await?;
    tracing::info!(profile_id = profile.id, name = %profile.name, "Profile created");
    Ok(Json(profile))
}

/// GET /profiles?skip=&limit=
pub async fn list(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
) -> AppResult<Json<Vec<Profile>>> {
    let profiles = ProfileRepo::list(&state.pool, page.skip, page.limit).await?;
    Ok(Json(profiles))
}

/// GET /profiles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Profile>> {
    let profile = ProfileRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id,
        }))?;
    Ok(Json(profile))
}

/// PATCH /profiles/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateProfile>,
) -> AppResult<Json<Profile>> {
    validate(&input)?;
    let profile = ProfileRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id,
        }))?;
    tracing::info!(profile_id = profile.id, "Profile updated");
    Ok(Json(profile))
}

/// DELETE /profiles/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Value>> {
    let profile = ProfileRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id,
        }))?;
    tracing::info!(profile_id = id, name = %profile.name, "Profile deleted");
    Ok(Json(json!({
        "profile": format!("Profile: {} deleted", profile.name),
    })))
}
