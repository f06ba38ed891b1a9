//! Project entity model and DTOs.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use seedweb_core::timefmt;
use seedweb_core::types::{DbId, Timestamp};

/// A project row from the `projects` table.
///
/// The light window columns are `start_time`/`end_time` in the store but
/// `start`/`end` on the wire.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    #[serde(serialize_with = "timefmt::human")]
    pub created_at: Timestamp,
    #[serde(serialize_with = "timefmt::human")]
    pub updated_at: Timestamp,
    pub name: String,
    pub bed_id: String,
    pub description: String,
    pub profile_id: Option<DbId>,
    #[serde(rename = "start")]
    pub start_time: NaiveTime,
    #[serde(rename = "end")]
    pub end_time: NaiveTime,
}

/// DTO for creating or overwriting a project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: String,
    pub bed_id: String,
    pub description: String,
    pub profile_id: Option<DbId>,
    #[serde(rename = "start")]
    pub start_time: NaiveTime,
    #[serde(rename = "end")]
    pub end_time: NaiveTime,
}
