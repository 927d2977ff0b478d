//! Built-in site configurations.
//!
//! Each entry describes one scrape target as data: where to fetch, which
//! nodes carry headline text, and how many headlines to keep. The caps are
//! per-site because front pages differ in how much of their top section is
//! actually news.

/// One scrape target.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Short identifier used in logs and for `--site` selection.
    pub name: String,
    /// Page to fetch.
    pub url: String,
    /// CSS selector for the nodes whose text content is a headline.
    pub selector: String,
    /// Keep at most this many headlines per fetch.
    pub max_headlines: usize,
}

impl SiteConfig {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        selector: impl Into<String>,
        max_headlines: usize,
    ) -> Self {
        SiteConfig {
            name: name.into(),
            url: url.into(),
            selector: selector.into(),
            max_headlines,
        }
    }
}

/// All sites the service knows how to scrape.
pub fn default_sites() -> Vec<SiteConfig> {
    vec![
        SiteConfig::new(
            "espncricinfo",
            "https://www.espncricinfo.com",
            "h3.ds-text-title-s",
            10,
        ),
        SiteConfig::new(
            "cricbuzz",
            "https://www.cricbuzz.com",
            "h2.cb-nws-hdln",
            15,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sites_are_well_formed() {
        let sites = default_sites();
        assert!(!sites.is_empty());
        for site in &sites {
            assert!(!site.name.is_empty());
            assert!(site.url.starts_with("https://"));
            assert!(scraper::Selector::parse(&site.selector).is_ok());
            assert!(site.max_headlines > 0);
        }
    }

    #[test]
    fn test_site_names_are_unique() {
        let sites = default_sites();
        let mut names: Vec<&str> = sites.iter().map(|s| s.name.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), sites.len());
    }
}
