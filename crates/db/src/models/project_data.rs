//! Project sensor-reading model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use seedweb_core::types::{DbId, Timestamp};
use seedweb_core::{json_text, timefmt};

/// A sensor reading from the `project_data` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectData {
    pub id: DbId,
    #[serde(serialize_with = "timefmt::human")]
    pub created_at: Timestamp,
    #[serde(serialize_with = "timefmt::human")]
    pub updated_at: Timestamp,
    #[serde(serialize_with = "json_text::serialize")]
    pub sensor_data: String,
    pub project_id: DbId,
}

/// DTO for creating or overwriting a sensor reading. The owning project
/// comes from the request path.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectData {
    pub sensor_data: String,
}
