use anyhow::{anyhow, Context, Result};

use crate::skills::MatchStrategy;

const DEFAULT_JOB_API_BASE_URL: &str = "https://api.adzuna.com/v1/api/jobs";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub redis_url: String,
    pub job_api_base_url: String,
    pub job_api_app_id: String,
    pub job_api_app_key: String,
    pub job_results_per_page: u32,
    /// 0 disables the job search cache.
    pub job_cache_ttl_secs: u64,
    pub skill_match_strategy: MatchStrategy,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            redis_url: require_env("REDIS_URL")?,
            job_api_base_url: std::env::var("JOB_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_JOB_API_BASE_URL.to_string()),
            job_api_app_id: require_env("JOB_API_APP_ID")?,
            job_api_app_key: require_env("JOB_API_APP_KEY")?,
            job_results_per_page: std::env::var("JOB_RESULTS_PER_PAGE")
                .unwrap_or_else(|_| "20".to_string())
                .parse::<u32>()
                .context("JOB_RESULTS_PER_PAGE must be a positive integer")?,
            job_cache_ttl_secs: std::env::var("JOB_CACHE_TTL_SECS")
                .unwrap_or_else(|_| "600".to_string())
                .parse::<u64>()
                .context("JOB_CACHE_TTL_SECS must be a number of seconds")?,
            skill_match_strategy: parse_match_strategy(std::env::var("SKILL_MATCH_STRATEGY").ok())?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_match_strategy(value: Option<String>) -> Result<MatchStrategy> {
    match value {
        None => Ok(MatchStrategy::default()),
        Some(v) => MatchStrategy::parse(&v).ok_or_else(|| {
            anyhow!("SKILL_MATCH_STRATEGY must be 'substring' or 'word_boundary', got '{v}'")
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_strategy_defaults_to_substring() {
        assert_eq!(parse_match_strategy(None).unwrap(), MatchStrategy::StrictSubstring);
    }

    #[test]
    fn test_match_strategy_accepts_word_boundary() {
        assert_eq!(
            parse_match_strategy(Some("word_boundary".to_string())).unwrap(),
            MatchStrategy::WordBoundary
        );
    }

    #[test]
    fn test_match_strategy_rejects_unknown() {
        let err = parse_match_strategy(Some("fuzzy".to_string())).unwrap_err();
        assert!(err.to_string().contains("fuzzy"));
    }
}
