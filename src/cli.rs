//! Command-line interface definitions for Newsline.
//!
//! All options can be provided via command-line flags or environment
//! variables. The database URL and trigger secret are required; the process
//! refuses to start without them.

use clap::Parser;

/// Command-line arguments for the Newsline server.
///
/// # Examples
///
/// ```sh
/// # Basic usage with required arguments
/// newsline -d ./cricket_news.db -t my-secret
///
/// # Everything from the environment
/// DATABASE_URL=./cricket_news.db TRIGGER_SECRET=my-secret newsline
///
/// # Scrape a single site only
/// newsline -d ./cricket_news.db -t my-secret --site espncricinfo
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the SQLite database file
    #[arg(short, long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Shared secret required to trigger an ingestion run
    #[arg(short, long, env = "TRIGGER_SECRET")]
    pub trigger_secret: String,

    /// Address to bind the HTTP server on
    #[arg(short, long, env = "LISTEN_ADDR", default_value = "0.0.0.0:8000")]
    pub listen_addr: String,

    /// Scrape only this site (repeatable; default: all built-in sites)
    #[arg(long = "site")]
    pub sites: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(&[
            "newsline",
            "--database-url",
            "./news.db",
            "--trigger-secret",
            "hunter2",
        ]);

        assert_eq!(cli.database_url, "./news.db");
        assert_eq!(cli.trigger_secret, "hunter2");
        assert_eq!(cli.listen_addr, "0.0.0.0:8000");
        assert!(cli.sites.is_empty());
    }

    #[test]
    fn test_cli_short_flags_and_sites() {
        let cli = Cli::parse_from(&[
            "newsline",
            "-d",
            "/tmp/news.db",
            "-t",
            "hunter2",
            "-l",
            "127.0.0.1:9999",
            "--site",
            "espncricinfo",
            "--site",
            "cricbuzz",
        ]);

        assert_eq!(cli.database_url, "/tmp/news.db");
        assert_eq!(cli.listen_addr, "127.0.0.1:9999");
        assert_eq!(cli.sites, vec!["espncricinfo", "cricbuzz"]);
    }

    #[test]
    fn test_cli_requires_database_url_and_secret() {
        assert!(Cli::try_parse_from(&["newsline"]).is_err());
        assert!(Cli::try_parse_from(&["newsline", "-d", "./news.db"]).is_err());
    }
}
