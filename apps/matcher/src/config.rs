use anyhow::{Context, Result};

const DEFAULT_EXPORT_PATH: &str = "resume-match-results.csv";
const DEFAULT_KEYWORDS_SHOWN: usize = 15;

/// Application configuration loaded from environment variables (and `.env` if present).
/// Every variable is optional; command-line flags take precedence.
#[derive(Debug, Clone)]
pub struct Config {
    pub rust_log: String,
    /// CSV file written by `--export` when no path is given.
    pub export_path: String,
    /// How many matched keywords the results table lists per resume.
    pub keywords_shown: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            export_path: lookup("RESUME_MATCHER_EXPORT_PATH")
                .unwrap_or_else(|| DEFAULT_EXPORT_PATH.to_string()),
            keywords_shown: match lookup("RESUME_MATCHER_KEYWORDS_SHOWN") {
                Some(raw) => raw
                    .parse::<usize>()
                    .context("RESUME_MATCHER_KEYWORDS_SHOWN must be a non-negative integer")?,
                None => DEFAULT_KEYWORDS_SHOWN,
            },
        })
    }
}
