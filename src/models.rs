//! Data models for stored and in-flight headlines.
//!
//! This module defines the two shapes a headline takes on its way through
//! the pipeline:
//! - [`Headline`]: a durable record as read back from the store
//! - [`NewHeadline`]: a candidate row proposed by an ingestion run
//!
//! A headline's business identity is its `title` text; the store enforces a
//! UNIQUE constraint on it. The `id` column is assigned by SQLite at insertion
//! and defines recency ordering (higher id = inserted later).

use diesel::prelude::*;
use serde::Serialize;

use crate::schema::headlines;

/// A durable headline record.
///
/// Created exactly once, at the first successful ingestion of its title, and
/// never mutated afterwards. Re-ingesting the same title is a no-op that keeps
/// the original `id`.
#[derive(Debug, Clone, Queryable, Selectable, Serialize, PartialEq, Eq)]
#[diesel(table_name = headlines)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Headline {
    /// Insertion-order identifier assigned by the store.
    pub id: i32,
    /// The headline text. Unique across the store.
    pub title: String,
}

/// A candidate headline row, not yet deduplicated against the store.
#[derive(Debug, Insertable)]
#[diesel(table_name = headlines)]
pub struct NewHeadline {
    pub title: String,
}

impl NewHeadline {
    pub fn new(title: impl Into<String>) -> Self {
        NewHeadline {
            title: title.into(),
        }
    }
}
