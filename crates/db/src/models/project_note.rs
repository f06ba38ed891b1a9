//! Project note model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use seedweb_core::timefmt;
use seedweb_core::types::{DbId, Timestamp};

/// A free-text annotation from the `project_notes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectNote {
    pub id: DbId,
    #[serde(serialize_with = "timefmt::human")]
    pub created_at: Timestamp,
    #[serde(serialize_with = "timefmt::human")]
    pub updated_at: Timestamp,
    pub note: String,
    pub project_id: DbId,
}

/// DTO for creating or overwriting a note. The owning project comes from
/// the request path.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectNote {
    pub note: String,
}
