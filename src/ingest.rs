//! The ingestion job: one fetch-parse-deduplicate-persist cycle per site.
//!
//! A job is fire-and-forget. Every outcome, success or failure, is logged
//! and none is raised to whoever scheduled it, so a scrape or storage
//! failure can never destabilize the serving process or a trigger request.
//!
//! Two runs for the same site may overlap; the job takes no lock. The
//! store's UNIQUE constraint on the headline title is the sole safety net
//! against duplicate persistence, trading a little duplicate work for a
//! simpler pipeline.

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tracing::{error, info, instrument};

use crate::app::AppState;
use crate::scrapers::{self, SiteConfig};

/// How many sites are scraped concurrently within one run.
const CONCURRENT_SITES: usize = 4;

/// Hand one full ingestion run off to the background.
///
/// Returns as soon as the run is spawned; completion is observable only
/// through the log.
pub fn schedule(state: Arc<AppState>) {
    tokio::spawn(run_all(state));
}

/// Run the ingestion job for every configured site.
pub async fn run_all(state: Arc<AppState>) {
    let sites = state.sites.clone();
    stream::iter(sites)
        .for_each_concurrent(CONCURRENT_SITES, |site| {
            let state = Arc::clone(&state);
            async move { run_site(&state, &site).await }
        })
        .await;
    info!("Ingestion run finished for all sites");
}

/// One fetch-parse-deduplicate-persist cycle for a single site.
///
/// An empty fetch result is a normal outcome and ends the job without
/// touching the store. A storage failure ends the job with a diagnostic.
#[instrument(level = "info", skip_all, fields(site = %site.name))]
pub async fn run_site(state: &AppState, site: &SiteConfig) {
    let candidates = scrapers::fetch_headlines(&state.http, site).await;
    if candidates.is_empty() {
        info!("No headlines found; nothing to ingest");
        return;
    }

    match state.store.insert_batch(candidates).await {
        Ok(inserted) => info!(inserted, "Ingestion run complete"),
        Err(e) => error!(error = %e, "Storage failed; ingestion run abandoned"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use crate::db;
    use crate::store::HeadlineStore;
    use tempfile::TempDir;

    fn unreachable_site() -> SiteConfig {
        // Nothing listens on port 9; the fetch fails fast with a refused
        // connection and the adapter reports an empty result.
        SiteConfig::new("offline", "http://127.0.0.1:9", "h3.headline", 10)
    }

    fn test_state(sites: Vec<SiteConfig>) -> (Arc<AppState>, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let url = dir.path().join("headlines.db");
        let pool = db::create_pool(url.to_str().unwrap()).unwrap();
        let mut conn = pool.get().unwrap();
        db::run_migrations(&mut conn).unwrap();
        drop(conn);
        let state = AppState {
            store: HeadlineStore::new(pool),
            http: scrapers::http_client().unwrap(),
            trigger_secret: "secret".to_string(),
            sites,
        };
        (Arc::new(state), dir)
    }

    #[tokio::test]
    async fn test_failed_fetch_completes_and_leaves_store_unchanged() {
        let (state, _dir) = test_state(vec![unreachable_site()]);
        let site = state.sites[0].clone();
        state
            .store
            .insert_batch(vec!["already stored".to_string()])
            .await
            .unwrap();

        run_site(&state, &site).await;

        let all = state.store.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "already stored");
    }

    #[tokio::test]
    async fn test_run_all_survives_every_site_failing() {
        let (state, _dir) = test_state(vec![unreachable_site(), unreachable_site()]);

        run_all(Arc::clone(&state)).await;

        assert!(state.store.list_all().await.unwrap().is_empty());
    }
}
