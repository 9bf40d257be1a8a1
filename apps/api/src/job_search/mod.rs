//! Job search proxy to the upstream job listings API.
//!
//! The upstream app id/key live only in server config; clients send the
//! search terms and get back flattened postings. Any posting's `description`
//! can be fed straight into the JD analyzer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::errors::AppError;

pub mod adzuna;
pub mod cache;
pub mod handlers;

/// Country codes the upstream API serves.
pub const SUPPORTED_COUNTRIES: &[&str] = &[
    "at", "au", "be", "br", "ca", "ch", "de", "es", "fr", "gb", "in", "it", "mx", "nl", "nz",
    "pl", "sg", "us", "za",
];

pub const DEFAULT_COUNTRY: &str = "us";

#[derive(Debug, Error)]
pub enum JobSearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },
}

/// A validated search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobQuery {
    pub keyword: String,
    pub location: Option<String>,
    pub country: String,
    pub page: u32,
}

impl JobQuery {
    /// Normalizes and validates raw search parameters.
    pub fn new(
        keyword: &str,
        location: Option<&str>,
        country: Option<&str>,
        page: Option<u32>,
    ) -> Result<Self, AppError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(AppError::Validation("keyword cannot be empty".to_string()));
        }

        let country = country
            .map(|c| c.trim().to_ascii_lowercase())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_COUNTRY.to_string());
        if !SUPPORTED_COUNTRIES.contains(&country.as_str()) {
            return Err(AppError::Validation(format!(
                "unsupported country '{country}'"
            )));
        }

        let page = page.unwrap_or(1);
        if page == 0 {
            return Err(AppError::Validation("page starts at 1".to_string()));
        }

        let location = location
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string);

        Ok(Self {
            keyword: keyword.to_string(),
            location,
            country,
            page,
        })
    }
}

/// One job listing, flattened from the upstream format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: Option<String>,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub redirect_url: Option<String>,
    pub created: Option<String>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSearchResults {
    pub count: u64,
    pub results: Vec<JobPosting>,
}

/// Source of job listings. `AdzunaClient` in production; tests plug in stubs.
///
/// Carried in `AppState` as `Arc<dyn JobSource>`.
#[async_trait]
pub trait JobSource: Send + Sync {
    async fn search(&self, query: &JobQuery) -> Result<JobSearchResults, JobSearchError>;
}
