//! HTTP client for the document Q&A backend.
//!
//! Endpoints are derived from `ClientConfig::base_url`:
//! - POST {base}/ingest      : multipart upload, field `files`
//! - GET  {base}/search?q=   : keyword search
//! - POST {base}/ask         : `{ "question": ... }`
//! - GET  {base}/index/info  : index status
//! - GET  {root}/health      : liveness (see [`HealthService`])
//!
//! Non-2xx answers become [`ApiError`] carrying the server's `detail`/`error`
//! text; undecodable 2xx bodies become [`QaClientError::Decode`].

use std::time::{Duration, Instant};

use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, warn};

use crate::{
    config::client_config::ClientConfig,
    error_handler::{ApiError, QaClientError, Result, make_snippet},
    health_service::{HealthService, HealthStatus},
    models::{
        AskRequest, AskResponse, HealthResponse, IndexInfo, SearchResponse, UploadFile,
        UploadResponse,
    },
};

/// Multipart field name expected by the ingest route.
pub const UPLOAD_FIELD: &str = "files";

/// Thin client for the Q&A REST API.
///
/// Constructed from a [`ClientConfig`]. Internally keeps one preconfigured
/// `reqwest::Client` (with timeout) shared by all operations.
#[derive(Debug)]
pub struct QaApiService {
    client: reqwest::Client,
    cfg: ClientConfig,
    url_ingest: String,
    url_search: String,
    url_ask: String,
    url_index_info: String,
    health: HealthService,
}

impl QaApiService {
    /// Creates a new service for `cfg`.
    ///
    /// # Errors
    /// - [`QaClientError::Config`] if the base URL is not http/https
    /// - [`QaClientError::HttpTransport`] if the HTTP client cannot be built
    pub fn new(cfg: ClientConfig) -> Result<Self> {
        crate::error_handler::validate_http_endpoint("QA_API_URL", &cfg.base_url)?;

        let timeout = Duration::from_secs(cfg.timeout_secs);
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let health = HealthService::new(client.clone(), cfg.health_url());

        info!(
            base_url = %cfg.api_root(),
            timeout_secs = cfg.timeout_secs,
            "QaApiService initialized"
        );

        Ok(Self {
            url_ingest: cfg.endpoint("/ingest"),
            url_search: cfg.endpoint("/search"),
            url_ask: cfg.endpoint("/ask"),
            url_index_info: cfg.endpoint("/index/info"),
            client,
            cfg,
            health,
        })
    }

    /// Config this client was built from.
    pub fn config(&self) -> &ClientConfig {
        &self.cfg
    }

    /// Uploads `files` for indexing (`POST /ingest`, one `files` part per file).
    ///
    /// No client-side rule is applied here; callers validate first.
    ///
    /// # Errors
    /// - [`QaClientError::Api`] for non-2xx responses (e.g. fewer than 3 valid files)
    /// - [`QaClientError::HttpTransport`] for network failures or an invalid MIME string
    /// - [`QaClientError::Decode`] if the body is not an `UploadResponse`
    pub async fn ingest(&self, files: &[UploadFile]) -> Result<UploadResponse> {
        let started = Instant::now();

        let mut form = Form::new();
        for file in files {
            let mut part = Part::bytes(file.bytes.clone()).file_name(file.name.clone());
            if let Some(mime) = file.mime.as_deref() {
                part = part.mime_str(mime)?;
            }
            form = form.part(UPLOAD_FIELD, part);
        }

        debug!(
            files = files.len(),
            total_bytes = files.iter().map(UploadFile::size).sum::<u64>(),
            "POST {}", self.url_ingest
        );

        let resp = self.client.post(&self.url_ingest).multipart(form).send().await?;
        let out: UploadResponse = read_json(resp, &self.url_ingest, started).await?;

        info!(
            files_processed = out.files_processed,
            latency_ms = started.elapsed().as_millis(),
            "documents ingested"
        );
        Ok(out)
    }

    /// Keyword search (`GET /search?q=<query>`, query percent-encoded).
    ///
    /// # Errors
    /// Same classes as [`QaApiService::ingest`].
    pub async fn search(&self, query: &str) -> Result<SearchResponse> {
        let started = Instant::now();
        debug!(query_len = query.len(), "GET {}", self.url_search);

        let resp = self
            .client
            .get(&self.url_search)
            .query(&[("q", query)])
            .send()
            .await?;
        let out: SearchResponse = read_json(resp, &self.url_search, started).await?;

        debug!(
            hits = out.results.len(),
            latency_ms = started.elapsed().as_millis(),
            "search completed"
        );
        Ok(out)
    }

    /// Natural-language question (`POST /ask`).
    ///
    /// # Errors
    /// Same classes as [`QaApiService::ingest`].
    pub async fn ask(&self, question: &str) -> Result<AskResponse> {
        let started = Instant::now();
        let body = AskRequest {
            question: question.to_string(),
        };
        debug!(question_len = question.len(), "POST {}", self.url_ask);

        let resp = self.client.post(&self.url_ask).json(&body).send().await?;
        let out: AskResponse = read_json(resp, &self.url_ask, started).await?;

        debug!(
            citations = out.citations.len(),
            latency_ms = started.elapsed().as_millis(),
            "answer received"
        );
        Ok(out)
    }

    /// Index status snapshot (`GET /index/info`).
    ///
    /// # Errors
    /// Same classes as [`QaApiService::ingest`].
    pub async fn index_info(&self) -> Result<IndexInfo> {
        let started = Instant::now();
        debug!("GET {}", self.url_index_info);

        let resp = self.client.get(&self.url_index_info).send().await?;
        read_json(resp, &self.url_index_info, started).await
    }

    /// Strict liveness probe (`GET /health`).
    ///
    /// # Errors
    /// Any transport, status, or decode failure.
    pub async fn health(&self) -> Result<HealthResponse> {
        self.health.try_probe().await
    }

    /// Resilient liveness probe: never fails, see [`HealthService::check`].
    pub async fn health_check(&self) -> HealthStatus {
        self.health.check().await
    }
}

/// Shared response handling for the API and the health probe.
pub(crate) async fn read_json<T: DeserializeOwned>(
    resp: reqwest::Response,
    url: &str,
    started: Instant,
) -> Result<T> {
    let status = resp.status();

    if !status.is_success() {
        let text = resp.text().await.unwrap_or_default();
        let err = ApiError::from_body(status, url, &text);

        error!(
            %status,
            %url,
            snippet = %make_snippet(&text),
            latency_ms = started.elapsed().as_millis(),
            "request returned non-success status"
        );
        return Err(err.into());
    }

    let text = resp.text().await?;
    serde_json::from_str::<T>(&text).map_err(|e| {
        warn!(
            %url,
            error = %e,
            snippet = %make_snippet(&text),
            "failed to decode response body"
        );
        QaClientError::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        }
    })
}
