//! # Newsline
//!
//! A small news-headline service: it scrapes cricket headlines from
//! configured sport news sites, deduplicates them against everything seen
//! before, and serves the stored set over HTTP.
//!
//! ## Architecture
//!
//! The service is an ingestion pipeline behind a trigger:
//! 1. **Trigger**: `POST /api/internal/update-news` with the shared secret
//!    schedules one ingestion run and returns immediately
//! 2. **Fetch**: each configured site is scraped once, headline text is
//!    extracted with a per-site CSS selector
//! 3. **Deduplicate & persist**: titles are batch-upserted into SQLite;
//!    the UNIQUE constraint on the title collapses anything seen before
//! 4. **Read**: `GET /api/news` lists stored headlines, newest first
//!
//! Scrape and storage failures never reach a trigger caller; they end the
//! run with a log entry. The only fatal condition is missing configuration
//! at startup.
//!
//! ## Usage
//!
//! ```sh
//! newsline -d ./cricket_news.db -t my-secret -l 0.0.0.0:8000
//! ```

use clap::Parser;
use std::error::Error;
use tracing::info;

mod api;
mod app;
mod cli;
mod db;
mod error;
mod ingest;
mod models;
mod schema;
mod scrapers;
mod store;

use app::{build_state, init_tracing};
use cli::Cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    info!("newsline starting up");

    let args = Cli::parse();
    let state = build_state(&args)?;
    info!(
        sites = state.sites.len(),
        db = %args.database_url,
        "State initialized; database ready"
    );

    let router = api::app_router(state);
    let listener = tokio::net::TcpListener::bind(&args.listen_addr).await?;
    info!(addr = %args.listen_addr, "Listening");
    axum::serve(listener, router).await?;

    Ok(())
}
