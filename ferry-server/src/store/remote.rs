//! CMS-backed segment store.
//!
//! Queries the CMS's transport segment endpoint over HTTP. The endpoint
//! filters by exact `from`/`to` query parameters and returns JSON arrays of
//! `SegmentRecord`.

use std::time::Duration;

use reqwest::StatusCode;
use tracing::debug;

use crate::domain::{Location, RouteSegment};

use super::record::{SegmentRecord, published_segments};
use super::{SegmentStore, StoreError, collect_locations};

/// Configuration for the CMS segment client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpStoreConfig {
    /// Base URL of the CMS API, e.g. `https://cms.example.mv/api`
    pub base_url: String,
    /// Optional bearer token
    pub token: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl HttpStoreConfig {
    /// Create a new config for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout_secs: 30,
        }
    }

    /// Set the bearer token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Segment store that reads from the CMS REST API.
#[derive(Debug, Clone)]
pub struct HttpSegmentStore {
    http: reqwest::Client,
    segments_url: String,
    token: Option<String>,
}

impl HttpSegmentStore {
    /// Create a new client with the given configuration.
    pub fn new(config: HttpStoreConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            segments_url: format!("{}/segments", config.base_url.trim_end_matches('/')),
            token: config.token,
        })
    }

    /// Fetch segments matching the query parameters.
    async fn fetch(&self, query: &[(&str, &str)]) -> Result<Vec<RouteSegment>, StoreError> {
        let mut request = self.http.get(&self.segments_url).query(query);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(StoreError::Unauthorized);
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let records: Vec<SegmentRecord> = response.json().await?;
        debug!(?query, rows = records.len(), "fetched segments from CMS");

        published_segments(records)
    }
}

impl SegmentStore for HttpSegmentStore {
    async fn segments_between(
        &self,
        from: &Location,
        to: &Location,
    ) -> Result<Vec<RouteSegment>, StoreError> {
        let mut segments = self
            .fetch(&[("from", from.as_str()), ("to", to.as_str())])
            .await?;
        // The CMS may match case-insensitively; keep exact matches only.
        segments.retain(|s| s.from() == from && s.to() == to);
        Ok(segments)
    }

    async fn segments_from(&self, from: &Location) -> Result<Vec<RouteSegment>, StoreError> {
        let mut segments = self.fetch(&[("from", from.as_str())]).await?;
        segments.retain(|s| s.from() == from);
        Ok(segments)
    }

    async fn locations(&self) -> Result<Vec<Location>, StoreError> {
        let segments = self.fetch(&[]).await?;
        Ok(collect_locations(segments.iter()))
    }
}
