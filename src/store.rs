//! The deduplicating headline store.
//!
//! [`HeadlineStore`] is the single writer of durable state. Uniqueness is
//! enforced by the UNIQUE constraint on `headlines.title`, not by client-side
//! pre-checking, so two overlapping ingestion runs racing to insert the same
//! title cannot produce duplicate rows: SQLite serializes the writes and
//! `INSERT OR IGNORE` drops the loser.
//!
//! Diesel calls are synchronous, so both operations hop onto the blocking
//! thread pool and never stall an async worker.

use diesel::prelude::*;
use tokio::task;
use tracing::{debug, instrument};

use crate::db::DbPool;
use crate::error::StoreError;
use crate::models::{Headline, NewHeadline};
use crate::schema::headlines::dsl::*;

/// Repository over the `headlines` table.
#[derive(Clone)]
pub struct HeadlineStore {
    pool: DbPool,
}

impl HeadlineStore {
    pub fn new(pool: DbPool) -> Self {
        HeadlineStore { pool }
    }

    /// Insert every title that is not already present; skip the rest.
    ///
    /// Returns the number of newly inserted rows. Each row's insert-or-skip
    /// is atomic, but the batch as a whole is not all-or-nothing. A title
    /// that already exists keeps its original `id`.
    #[instrument(level = "debug", skip_all, fields(candidates = titles.len()))]
    pub async fn insert_batch(&self, titles: Vec<String>) -> Result<usize, StoreError> {
        if titles.is_empty() {
            return Ok(0);
        }
        let pool = self.pool.clone();
        let inserted = task::spawn_blocking(move || -> Result<usize, StoreError> {
            let mut conn = pool.get()?;
            let rows: Vec<NewHeadline> = titles.into_iter().map(NewHeadline::new).collect();
            let count = diesel::insert_or_ignore_into(headlines)
                .values(&rows)
                .execute(&mut conn)?;
            Ok(count)
        })
        .await??;
        debug!(inserted, "Batch upsert complete");
        Ok(inserted)
    }

    /// All stored headlines, most recently inserted first.
    pub async fn list_all(&self) -> Result<Vec<Headline>, StoreError> {
        let pool = self.pool.clone();
        let records = task::spawn_blocking(move || -> Result<Vec<Headline>, StoreError> {
            let mut conn = pool.get()?;
            let records = headlines
                .order(id.desc())
                .select(Headline::as_select())
                .load::<Headline>(&mut conn)?;
            Ok(records)
        })
        .await??;
        Ok(records)
    }
}
