//! Redis cache for job search responses.
//!
//! Cache failures are logged and treated as misses. A search never fails
//! because Redis is down.

use redis::Client as RedisClient;
use tracing::{debug, warn};

use crate::job_search::{JobQuery, JobSearchResults};

#[derive(Clone)]
pub struct JobCache {
    client: RedisClient,
    ttl_secs: u64,
}

impl JobCache {
    pub fn new(client: RedisClient, ttl_secs: u64) -> Self {
        Self { client, ttl_secs }
    }

    pub fn key(query: &JobQuery) -> String {
        format!(
            "jobs:{}:{}:{}:{}",
            query.country,
            query.page,
            query.keyword.to_lowercase(),
            query.location.as_deref().unwrap_or("").to_lowercase()
        )
    }

    pub async fn get(&self, query: &JobQuery) -> Option<JobSearchResults> {
        if self.ttl_secs == 0 {
            return None;
        }
        let key = Self::key(query);
        match self.fetch(&key).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(results) => {
                    debug!("Job cache hit: {key}");
                    Some(results)
                }
                Err(e) => {
                    warn!("Discarding unreadable job cache entry {key}: {e}");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!("Job cache read failed for {key}: {e}");
                None
            }
        }
    }

    pub async fn put(&self, query: &JobQuery, results: &JobSearchResults) {
        if self.ttl_secs == 0 {
            return;
        }
        let key = Self::key(query);
        let raw = match serde_json::to_string(results) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Could not serialize job results for cache: {e}");
                return;
            }
        };
        if let Err(e) = self.store(&key, &raw).await {
            warn!("Job cache write failed for {key}: {e}");
        }
    }

    async fn fetch(&self, key: &str) -> redis::RedisResult<Option<String>> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        redis::cmd("GET").arg(key).query_async(&mut conn).await
    }

    async fn store(&self, key: &str, value: &str) -> redis::RedisResult<()> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        redis::cmd("SET")
            .arg(key)
            .arg(value)
            .arg("EX")
            .arg(self.ttl_secs)
            .query_async(&mut conn)
            .await
    }
}
