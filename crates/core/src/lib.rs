//! Domain layer for the seedweb grow-light scheduler.
//!
//! This crate has no internal dependencies so the database and API layers
//! (and any future CLI tooling) can share its types and helpers.

pub mod error;
pub mod json_text;
pub mod pagination;
pub mod schedule;
pub mod timefmt;
pub mod types;
