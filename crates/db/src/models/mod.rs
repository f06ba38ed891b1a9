//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row,
//!   with read-time formatting applied through serde attributes
//! - A `Deserialize` create DTO for inserts; updates reuse the create DTO
//!   and overwrite every mutable field

pub mod profile;
pub mod project;
pub mod project_data;
pub mod project_note;
