//! Repository for the `projects` table.

use sqlx::PgPool;

use seedweb_core::pagination::{clamp_limit, clamp_skip};
use seedweb_core::types::DbId;

use crate::models::project::{CreateProject, Project};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, created_at, updated_at, name, bed_id, description, profile_id, start_time, end_time";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (name, bed_id, description, profile_id, start_time, end_time)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.bed_id)
            .bind(&input.description)
            .bind(input.profile_id)
            .bind(input.start_time)
            .bind(input.end_time)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List projects in insertion order.
    pub async fn list(
        pool: &PgPool,
        skip: Option<i64>,
        limit: Option<i64>,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             ORDER BY id
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(clamp_limit(limit))
            .bind(clamp_skip(skip))
            .fetch_all(pool)
            .await
    }

    /// Overwrite a project's mutable fields.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CreateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = $2,
                bed_id = $3,
                description = $4,
                profile_id = $5,
                start_time = $6,
                end_time = $7,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.bed_id)
            .bind(&input.description)
            .bind(input.profile_id)
            .bind(input.start_time)
            .bind(input.end_time)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by ID, returning the removed row. Child data and
    /// notes go with it via `ON DELETE CASCADE`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("DELETE FROM projects WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
