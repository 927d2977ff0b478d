//! Shared process state and bootstrap helpers.

use std::error::Error;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::db;
use crate::error::StoreError;
use crate::scrapers::{self, SiteConfig, sites::default_sites};
use crate::store::HeadlineStore;

/// State shared by the HTTP handlers and the ingestion job.
///
/// The store handle is opened once at process start and injected into both
/// the ingestion path and the read path; nothing else in the process holds
/// shared mutable state.
pub struct AppState {
    pub store: HeadlineStore,
    pub http: reqwest::Client,
    pub trigger_secret: String,
    pub sites: Vec<SiteConfig>,
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();
}

/// Build the shared state from parsed configuration.
///
/// Opens the connection pool, runs migrations, and resolves the configured
/// site selection. Any failure here is fatal to startup.
pub fn build_state(args: &Cli) -> Result<Arc<AppState>, Box<dyn Error>> {
    let pool = db::create_pool(&args.database_url)?;
    let mut conn = pool.get().map_err(StoreError::from)?;
    db::run_migrations(&mut conn)?;
    drop(conn);

    let sites = select_sites(&args.sites)?;
    let http = scrapers::http_client()?;

    Ok(Arc::new(AppState {
        store: HeadlineStore::new(pool),
        http,
        trigger_secret: args.trigger_secret.clone(),
        sites,
    }))
}

/// Resolve `--site` selections against the built-in site list.
///
/// An empty selection means every built-in site. Naming a site that does
/// not exist is a configuration error.
fn select_sites(names: &[String]) -> Result<Vec<SiteConfig>, Box<dyn Error>> {
    let all = default_sites();
    if names.is_empty() {
        return Ok(all);
    }
    let mut selected = Vec::new();
    for name in names {
        match all.iter().find(|s| s.name == *name) {
            Some(site) => selected.push(site.clone()),
            None => return Err(format!("unknown site: {name}").into()),
        }
    }
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_sites_defaults_to_all() {
        let sites = select_sites(&[]).unwrap();
        assert_eq!(sites.len(), default_sites().len());
    }

    #[test]
    fn test_select_sites_filters_by_name() {
        let sites = select_sites(&["espncricinfo".to_string()]).unwrap();
        assert_eq!(sites.len(), 1);
        assert_eq!(sites[0].name, "espncricinfo");
    }

    #[test]
    fn test_select_sites_rejects_unknown_name() {
        assert!(select_sites(&["not-a-site".to_string()]).is_err());
    }
}
