//! Repository for the `project_data` table.

use sqlx::PgPool;

use seedweb_core::pagination::{clamp_limit, clamp_skip};
use seedweb_core::types::DbId;

use crate::models::project_data::{CreateProjectData, ProjectData};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, created_at, updated_at, sensor_data, project_id";

/// Provides CRUD operations for project sensor readings.
pub struct ProjectDataRepo;

impl ProjectDataRepo {
    /// Insert a new reading under the given project, returning the row.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateProjectData,
    ) -> Result<ProjectData, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_data (sensor_data, project_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectData>(&query)
            .bind(&input.sensor_data)
            .bind(project_id)
            .fetch_one(pool)
            .await
    }

    /// Find a reading by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ProjectData>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_data WHERE id = $1");
        sqlx::query_as::<_, ProjectData>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's readings in insertion order.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
        skip: Option<i64>,
        limit: Option<i64>,
    ) -> Result<Vec<ProjectData>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_data
             WHERE project_id = $1
             ORDER BY id
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, ProjectData>(&query)
            .bind(project_id)
            .bind(clamp_limit(limit))
            .bind(clamp_skip(skip))
            .fetch_all(pool)
            .await
    }

    /// Overwrite a reading's sensor payload.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CreateProjectData,
    ) -> Result<Option<ProjectData>, sqlx::Error> {
        let query = format!(
            "UPDATE project_data SET
                sensor_data = $2,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectData>(&query)
            .bind(id)
            .bind(&input.sensor_data)
            .fetch_optional(pool)
            .await
    }

    /// Delete a reading by ID, returning the removed row.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<ProjectData>, sqlx::Error> {
        let query = format!("DELETE FROM project_data WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, ProjectData>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
