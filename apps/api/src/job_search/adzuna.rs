//! Adzuna job search client.
//!
//! `GET {base_url}/{country}/search/{page}?app_id=..&app_key=..&what=..&where=..`
//! Retries on 429 and 5xx with exponential backoff, like the rest of our
//! outbound HTTP.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::job_search::{JobPosting, JobQuery, JobSearchError, JobSearchResults, JobSource};

const MAX_RETRIES: u32 = 3;
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize)]
struct AdzunaResponse {
    #[serde(default)]
    count: u64,
    #[serde(default)]
    results: Vec<AdzunaJob>,
}

#[derive(Debug, Deserialize)]
struct AdzunaJob {
    id: Option<String>,
    title: Option<String>,
    company: Option<DisplayName>,
    location: Option<DisplayName>,
    description: Option<String>,
    redirect_url: Option<String>,
    created: Option<String>,
    salary_min: Option<f64>,
    salary_max: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct DisplayName {
    display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AdzunaError {
    #[serde(default)]
    display: Option<String>,
    #[serde(default)]
    exception: Option<String>,
}

impl From<AdzunaJob> for JobPosting {
    fn from(job: AdzunaJob) -> Self {
        let name = |d: Option<DisplayName>| d.and_then(|d| d.display_name).unwrap_or_default();
        JobPosting {
            id: job.id,
            title: job.title.unwrap_or_default(),
            company: name(job.company),
            location: name(job.location),
            description: job.description.unwrap_or_default(),
            redirect_url: job.redirect_url,
            created: job.created,
            salary_min: job.salary_min,
            salary_max: job.salary_max,
        }
    }
}

impl From<AdzunaResponse> for JobSearchResults {
    fn from(response: AdzunaResponse) -> Self {
        JobSearchResults {
            count: response.count,
            results: response.results.into_iter().map(JobPosting::from).collect(),
        }
    }
}

#[derive(Clone)]
pub struct AdzunaClient {
    client: Client,
    base_url: String,
    app_id: String,
    app_key: String,
    results_per_page: u32,
}

impl AdzunaClient {
    pub fn new(
        base_url: String,
        app_id: String,
        app_key: String,
        results_per_page: u32,
    ) -> Result<Self, JobSearchError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            app_id,
            app_key,
            results_per_page,
        })
    }

    fn search_url(&self, query: &JobQuery) -> String {
        format!("{}/{}/search/{}", self.base_url, query.country, query.page)
    }

    fn query_params(&self, query: &JobQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("app_id", self.app_id.clone()),
            ("app_key", self.app_key.clone()),
            ("results_per_page", self.results_per_page.to_string()),
            ("what", query.keyword.clone()),
            ("content-type", "application/json".to_string()),
        ];
        if let Some(location) = &query.location {
            params.push(("where", location.clone()));
        }
        params
    }
}

#[async_trait]
impl JobSource for AdzunaClient {
    async fn search(&self, query: &JobQuery) -> Result<JobSearchResults, JobSearchError> {
        let url = self.search_url(query);
        let params = self.query_params(query);

        let mut last_error: Option<JobSearchError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "Job search attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match self.client.get(&url).query(&params).send().await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(JobSearchError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Job API returned {}: {}", status, body);
                last_error = Some(retryable_failure(status.as_u16(), body));
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(JobSearchError::Api {
                    status: status.as_u16(),
                    message: upstream_error_message(body),
                });
            }

            let body = response.text().await?;
            let parsed: AdzunaResponse = serde_json::from_str(&body)?;

            debug!(
                "Job search succeeded: country={} page={} count={}",
                query.country, query.page, parsed.count
            );

            return Ok(parsed.into());
        }

        Err(last_error.unwrap_or(JobSearchError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

/// The error kept for a retryable response if no later attempt succeeds.
fn retryable_failure(status: u16, body: String) -> JobSearchError {
    if status == 429 {
        JobSearchError::RateLimited {
            retries: MAX_RETRIES,
        }
    } else {
        JobSearchError::Api {
            status,
            message: upstream_error_message(body),
        }
    }
}

/// Pulls the human-readable message out of an upstream error body, if any.
fn upstream_error_message(body: String) -> String {
    serde_json::from_str::<AdzunaError>(&body)
        .ok()
        .and_then(|e| e.display.or(e.exception))
        .unwrap_or(body)
}
