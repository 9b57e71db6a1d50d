//! Caching layer for bus API responses.
//!
//! Responses are cached per normalized query for one refresh interval.
//! Only successful fetches are cached; an error always reaches the caller
//! and never falls back to stale data.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::client::{ApiError, BusApiClient};
use crate::domain::BusState;
use crate::query::BusQuery;

/// Cached response: the normalized buses for one query.
type QueryEntry = Arc<Vec<BusState>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(30),
            max_capacity: 1000,
        }
    }
}

impl CacheConfig {
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

/// Bus API client with caching.
pub struct CachedBusClient {
    client: BusApiClient,
    responses: MokaCache<BusQuery, QueryEntry>,
}

impl CachedBusClient {
    pub fn new(client: BusApiClient, config: &CacheConfig) -> Self {
        let responses = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { client, responses }
    }

    /// Fetch buses for a query, using the cache if available.
    ///
    /// Queries that differ only in whitespace or case share an entry.
    pub async fn fetch_buses(&self, query: &BusQuery) -> Result<QueryEntry, ApiError> {
        let key = query.normalized();

        if let Some(cached) = self.responses.get(&key).await {
            return Ok(cached);
        }

        let entry = Arc::new(self.client.fetch_buses(&key).await?);
        self.responses.insert(key, entry.clone()).await;

        Ok(entry)
    }

    /// Access the underlying client for requests that bypass the cache.
    pub fn client(&self) -> &BusApiClient {
        &self.client
    }

    pub fn cache_entry_count(&self) -> u64 {
        self.responses.entry_count()
    }

    /// Drop every cached response, e.g. after a manual refresh.
    pub fn invalidate_cache(&self) {
        self.responses.invalidate_all();
    }
}
