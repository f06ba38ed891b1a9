//! Repository for the `profiles` table.

use sqlx::PgPool;

use seedweb_core::pagination::{clamp_limit, clamp_skip};
use seedweb_core::types::DbId;

use crate::models::profile::{CreateProfile, Profile};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, created_at, updated_at, name, colors";

/// Provides CRUD operations for profiles.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Insert a new profile, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProfile) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles (name, colors)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(&input.name)
            .bind(&input.colors)
            .fetch_one(pool)
            .await
    }

    /// Find a profile by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List profiles in insertion order.
    pub async fn list(
        pool: &PgPool,
        skip: Option<i64>,
        limit: Option<i64>,
    ) -> Result<Vec<Profile>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM profiles
             ORDER BY id
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(clamp_limit(limit))
            .bind(clamp_skip(skip))
            .fetch_all(pool)
            .await
    }

    /// Overwrite a profile's mutable fields.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CreateProfile,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!(
            "UPDATE profiles SET
                name = $2,
                colors = $3,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.colors)
            .fetch_optional(pool)
            .await
    }

    /// Delete a profile by ID, returning the removed row so callers can
    /// name it in the confirmation message.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("DELETE FROM profiles WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
