//! Liveness probe for the Q&A backend.
//!
//! Probe: `GET {server_root}/health`, where the server root is the API base
//! URL without its trailing `/api` segment. A healthy backend answers
//! `{ "status": "healthy" }`.
//!
//! The returned [`HealthStatus`] is JSON-serializable.
//! [`HealthService::check`] is resilient and never fails (errors mapped to `ok=false`).
//! [`HealthService::try_probe`] returns a strict `Result`.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{error_handler::Result, models::HealthResponse, services::qa_api_service::read_json};

/// A serializable health snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    /// Probed URL.
    pub endpoint: String,
    /// Overall health flag.
    pub ok: bool,
    /// `status` field reported by the server, when it answered.
    pub status: Option<String>,
    /// Measured HTTP latency in milliseconds.
    pub latency_ms: u128,
    /// Short human-readable message with details.
    pub message: String,
}

/// Health checker sharing the API client's connection pool.
#[derive(Debug, Clone)]
pub struct HealthService {
    client: reqwest::Client,
    url: String,
}

impl HealthService {
    /// Probes `url` with `client`; the caller derives `url` from the config.
    pub fn new(client: reqwest::Client, url: String) -> Self {
        Self { client, url }
    }

    /// URL this service probes.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Runs the probe and folds any failure into `HealthStatus { ok: false, .. }`.
    pub async fn check(&self) -> HealthStatus {
        let start = Instant::now();

        match self.try_probe().await {
            Ok(body) => {
                let status = HealthStatus {
                    endpoint: self.url.clone(),
                    ok: true,
                    message: format!("backend is up (status: {})", body.status),
                    status: Some(body.status),
                    latency_ms: start.elapsed().as_millis(),
                };
                info!(
                    endpoint = %status.endpoint,
                    latency_ms = status.latency_ms,
                    "health probe completed"
                );
                status
            }
            Err(err) => {
                let status = HealthStatus {
                    endpoint: self.url.clone(),
                    ok: false,
                    status: None,
                    latency_ms: start.elapsed().as_millis(),
                    message: err.to_string(),
                };
                warn!(
                    endpoint = %status.endpoint,
                    latency_ms = status.latency_ms,
                    message = %status.message,
                    "health probe failed"
                );
                status
            }
        }
    }

    /// Strict probe: transport, non-2xx, and decode failures are errors.
    ///
    /// # Errors
    /// See [`QaClientError`](crate::error_handler::QaClientError).
    pub async fn try_probe(&self) -> Result<HealthResponse> {
        let start = Instant::now();
        debug!("GET {}", self.url);

        let resp = self.client.get(&self.url).send().await?;
        read_json(resp, &self.url, start).await
    }
}
