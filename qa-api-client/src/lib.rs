//! Typed client for the document Q&A REST API.
//!
//! The backend (chunking, BM25 ranking, answer generation) is an external
//! service; this crate only speaks its HTTP contract:
//!
//! | Route | Method | Payload |
//! |---|---|---|
//! | `/api/ingest` | POST multipart `files` | [`UploadResponse`] |
//! | `/api/search?q=` | GET | [`SearchResponse`] |
//! | `/api/ask` | POST `{question}` | [`AskResponse`] |
//! | `/api/index/info` | GET | [`IndexInfo`] |
//! | `/health` | GET | [`HealthResponse`] |

pub mod config;
pub mod error_handler;
pub mod health_service;
pub mod models;
pub mod services;
pub mod telemetry;

pub use config::client_config::ClientConfig;
pub use config::default_config::config_from_env;
pub use error_handler::{ApiError, ConfigError, QaClientError, Result};
pub use health_service::{HealthService, HealthStatus};
pub use models::{
    AskResponse, Citation, HealthResponse, IndexInfo, SearchResponse, SearchResult, UploadFile,
    UploadResponse,
};
pub use services::qa_api_service::QaApiService;
