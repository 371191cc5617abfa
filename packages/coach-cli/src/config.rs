use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; CoachCrawler/0.1)";

/// CLI configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub http_timeout_secs: u64,
    pub user_agent: String,
    pub staff_page_threshold: Option<f32>,
    pub school_homepage_threshold: Option<f32>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            http_timeout_secs: env::var("COACH_HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .context("COACH_HTTP_TIMEOUT_SECS must be a whole number of seconds")?,
            user_agent: env::var("COACH_USER_AGENT")
                .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
            staff_page_threshold: env::var("COACH_STAFF_PAGE_THRESHOLD")
                .ok()
                .map(|raw| raw.parse())
                .transpose()
                .context("COACH_STAFF_PAGE_THRESHOLD must be a number")?,
            school_homepage_threshold: env::var("COACH_SCHOOL_HOMEPAGE_THRESHOLD")
                .ok()
                .map(|raw| raw.parse())
                .transpose()
                .context("COACH_SCHOOL_HOMEPAGE_THRESHOLD must be a number")?,
        })
    }
}
