// ============================================================================
// Clash of Clans API Client
// ============================================================================
//
// Outbound gateway for the official Clash of Clans REST API.
// Handles:
// - Bearer authentication for every request
// - Clan/player tag normalization and percent-encoding
// - Mapping transport and HTTP failures into the response envelope
//
// ============================================================================

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use serde_json::Value;
use thiserror::Error;

use crate::config::Config;
use crate::envelope::Envelope;
use crate::metrics;

/// Success message for raw gateway fetches. Route handlers replace it
/// with their own wording before responding.
pub const FETCH_OK_MSG: &str = "Upstream data fetched";

/// Failure of a single upstream request
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("upstream request failed: {}", source_chain(.0))]
    Transport(#[from] reqwest::Error),

    #[error("upstream returned HTTP {status}: {detail}")]
    Status { status: u16, detail: String },
}

/// Fold a reqwest error and its cause chain into one message. reqwest's
/// own `Display` stops at the URL; the chain carries the part worth
/// surfacing ("operation timed out", "Connection refused").
fn source_chain(error: &reqwest::Error) -> String {
    use std::error::Error as _;

    let mut msg = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}

/// Normalize a clan or player tag to its canonical form:
/// trimmed, uppercased, with exactly one leading `#`.
pub fn normalize_tag(raw: &str) -> String {
    let bare = raw.trim().trim_start_matches('#');
    format!("#{}", bare.to_uppercase())
}

/// Normalize a tag and percent-encode it for use as a URL path
/// segment. The leading `#` becomes `%23` exactly once, however the
/// caller spelled the tag.
pub fn encode_tag(tag: &str) -> String {
    urlencoding::encode(&normalize_tag(tag)).into_owned()
}

/// HTTP client for the Clash of Clans API
#[derive(Clone)]
pub struct CocClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl CocClient {
    pub fn new(config: &Config) -> Result<Self> {
        // Configure connection pooling and keep-alive
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .tcp_keepalive(Duration::from_secs(30))
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            base_url: config.coc_api_base_url.trim_end_matches('/').to_string(),
            token: config.api_key.clone(),
        })
    }

    /// Perform an authenticated GET against the upstream API.
    ///
    /// `path` must start with `/` and already be percent-encoded where
    /// needed (see [`encode_tag`]). Latency is observed for every
    /// outcome, failures and timeouts included.
    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value, UpstreamError> {
        let url = format!("{}{}", self.base_url, path);
        let started = Instant::now();
        metrics::UPSTREAM_REQUESTS_TOTAL.inc();

        let result = self.send_request(&url, query).await;
        metrics::UPSTREAM_REQUEST_DURATION.observe(started.elapsed().as_secs_f64());

        if result.is_ok() {
            tracing::debug!(
                path = %path,
                duration_ms = started.elapsed().as_millis(),
                "Upstream request completed"
            );
        }

        result
    }

    async fn send_request(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<Value, UpstreamError> {
        let mut request = self.http.get(url).bearer_auth(&self.token);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(UpstreamError::Status { status, detail });
        }

        Ok(response.json::<Value>().await?)
    }

    /// Fetch from the upstream and fold the outcome into an envelope.
    ///
    /// Never fails: transport errors, timeouts and non-2xx statuses all
    /// become a `status: false` envelope with the failure in `msg`.
    pub async fn fetch_envelope(&self, path: &str, query: &[(&str, String)]) -> Envelope {
        match self.get(path, query).await {
            Ok(data) => Envelope::ok(FETCH_OK_MSG, data),
            Err(e) => {
                metrics::UPSTREAM_FAILURES_TOTAL.inc();
                tracing::warn!(path = %path, error = %e, "Upstream fetch failed");
                Envelope::fail(e.to_string())
            }
        }
    }
}
