//! Repository for the `project_notes` table.

use sqlx::PgPool;

use seedweb_core::pagination::{clamp_limit, clamp_skip};
use seedweb_core::types::DbId;

use crate::models::project_note::{CreateProjectNote, ProjectNote};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, created_at, updated_at, note, project_id";

/// Provides CRUD operations for project notes.
pub struct ProjectNoteRepo;

impl ProjectNoteRepo {
    /// Insert a new note under the given project, returning the row.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateProjectNote,
    ) -> Result<ProjectNote, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_notes (note, project_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectNote>(&query)
            .bind(&input.note)
            .bind(project_id)
            .fetch_one(pool)
            .await
    }

    /// Find a note by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ProjectNote>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_notes WHERE id = $1");
        sqlx::query_as::<_, ProjectNote>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's notes in insertion order.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
        skip: Option<i64>,
        limit: Option<i64>,
    ) -> Result<Vec<ProjectNote>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_notes
             WHERE project_id = $1
             ORDER BY id
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, ProjectNote>(&query)
            .bind(project_id)
            .bind(clamp_limit(limit))
            .bind(clamp_skip(skip))
            .fetch_all(pool)
            .await
    }

    /// Overwrite a note's text.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CreateProjectNote,
    ) -> Result<Option<ProjectNote>, sqlx::Error> {
        let query = format!(
            "UPDATE project_notes SET
                note = $2,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectNote>(&query)
            .bind(id)
            .bind(&input.note)
            .fetch_optional(pool)
            .await
    }

    /// Delete a note by ID, returning the removed row.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<ProjectNote>, sqlx::Error> {
        let query = format!("DELETE FROM project_notes WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, ProjectNote>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
