//! Client for the bus read endpoint.
//!
//! Dashboards fetch `GET {base}/buses` with the current search parameters
//! and normalize whatever comes back. A failed fetch yields an error and no
//! data; falling back to a previous collection is the caller's call.

mod error;

pub use error::ApiError;

use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::BusState;
use crate::normalize::normalize_buses;
use crate::query::BusQuery;

/// Default base URL, matching the server's own bind address.
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000/api";

/// Configuration for the bus API client.
#[derive(Debug, Clone)]
pub struct BusApiConfig {
    /// Base URL the `/buses` path is appended to
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for BusApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl BusApiConfig {
    /// Create a config for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_secs: 10,
        }
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for the bus read endpoint.
#[derive(Debug, Clone)]
pub struct BusApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl BusApiClient {
    pub fn new(config: BusApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch and normalize the buses matching `query`.
    ///
    /// Only non-empty parameters are sent. A body that is JSON but not an
    /// array is an empty collection; a body that is not JSON is an error.
    pub async fn fetch_buses(&self, query: &BusQuery) -> Result<Vec<BusState>, ApiError> {
        let url = format!("{}/buses", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&query.normalized())
            .send()
            .await
            .inspect_err(|e| warn!(error = %e, "bus fetch failed"))?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "bus fetch returned an error status");
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let raw: Value = serde_json::from_str(&body).map_err(|e| ApiError::Json {
            message: e.to_string(),
        })?;

        let buses = normalize_buses(&raw);
        debug!(count = buses.len(), "fetched buses");
        Ok(buses)
    }

    /// Distinct routes across the whole fleet, in first-seen order.
    pub async fn route_options(&self) -> Result<Vec<String>, ApiError> {
        let buses = self.fetch_buses(&BusQuery::default()).await?;
        let mut routes: Vec<String> = Vec::new();
        for bus in buses {
            if !bus.route.is_empty() && !routes.contains(&bus.route) {
                routes.push(bus.route);
            }
        }
        Ok(routes)
    }
}
