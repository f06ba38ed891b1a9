//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Generic pagination parameters (`?skip=&limit=`).
///
/// Used by every list endpoint. Values are clamped in the repository
/// layer via `clamp_skip` / `clamp_limit`.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}
