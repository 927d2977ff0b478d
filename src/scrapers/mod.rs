//! Headline scraping from configured news sites.
//!
//! A single parameterized adapter replaces per-site scraper code: every site
//! is described by a [`SiteConfig`] (URL, CSS selector, headline cap) and
//! scraped by [`fetch_headlines`]. Adding a site is adding a row of data in
//! [`sites`], not writing a new module.
//!
//! The adapter is stateless and swallows every failure at its own boundary:
//! network errors, non-2xx statuses, and selectors that match nothing are all
//! reported to the caller as an empty list, with the diagnostics going to the
//! log. A single attempt is made per invocation; retry belongs to whoever
//! triggers the next run.

pub mod sites;

pub use sites::SiteConfig;

use scraper::{Html, Selector};
use tracing::{error, info, instrument, warn};

/// Identifying request header. Some sites refuse anonymous clients.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Network timeout for a single page fetch.
pub const FETCH_TIMEOUT_SECS: u64 = 10;

/// Build the shared HTTP client used by every fetch.
pub fn http_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(std::time::Duration::from_secs(FETCH_TIMEOUT_SECS))
        .build()
}

/// Fetch the current headlines for one site.
///
/// Performs exactly one network fetch, parses the body against the site's
/// selector, and returns up to `site.max_headlines` trimmed, non-empty
/// headline strings in document order. Never raises past this boundary; an
/// empty list means "no headlines found", whatever the underlying cause.
#[instrument(level = "info", skip_all, fields(site = %site.name))]
pub async fn fetch_headlines(client: &reqwest::Client, site: &SiteConfig) -> Vec<String> {
    let body = match fetch_page(client, site).await {
        Ok(body) => body,
        Err(e) => {
            error!(error = %e, url = %site.url, "Fetch failed; reporting no headlines");
            return Vec::new();
        }
    };

    let found = extract_headlines(&body, site);
    info!(count = found.len(), "Scraped headlines");
    found
}

async fn fetch_page(client: &reqwest::Client, site: &SiteConfig) -> Result<String, reqwest::Error> {
    let response = client.get(&site.url).send().await?.error_for_status()?;
    response.text().await
}

/// Extract headline text from an HTML document.
///
/// Pure function: collects the text content of every node matching the site
/// selector, trims it, discards empty results, and truncates to the site's
/// headline cap.
pub fn extract_headlines(html: &str, site: &SiteConfig) -> Vec<String> {
    let selector = match Selector::parse(&site.selector) {
        Ok(selector) => selector,
        Err(e) => {
            error!(selector = %site.selector, error = %e, "Invalid site selector");
            return Vec::new();
        }
    };

    let document = Html::parse_document(html);
    let mut found = Vec::new();
    for element in document.select(&selector) {
        let text = element.text().collect::<Vec<_>>().join(" ");
        let text = text.trim();
        if text.is_empty() {
            continue;
        }
        found.push(text.to_string());
        if found.len() == site.max_headlines {
            break;
        }
    }

    if found.is_empty() {
        warn!(selector = %site.selector, "Selector matched no headlines");
    }
    found
}
