//! Profile entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use seedweb_core::types::{DbId, Timestamp};
use seedweb_core::{json_text, timefmt};

/// A profile row from the `profiles` table.
///
/// `colors` is stored as a JSON-encoded string and serialized decoded, so
/// responses carry the structured value.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: DbId,
    #[serde(serialize_with = "timefmt::human")]
    pub created_at: Timestamp,
    #[serde(serialize_with = "timefmt::human")]
    pub updated_at: Timestamp,
    pub name: String,
    #[serde(serialize_with = "json_text::serialize_opt")]
    pub colors: Option<String>,
}

/// DTO for creating or overwriting a profile.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProfile {
    pub name: String,
    pub colors: Option<String>,
}
