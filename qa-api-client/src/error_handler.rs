//! Unified error handling for `qa-api-client`.
//!
//! This module exposes a single top-level error type [`QaClientError`] for the whole
//! library, and groups domain-specific errors in nested enums ([`ConfigError`],
//! [`ApiError`]). Small helpers for reading/validating environment variables are
//! provided and return the unified [`Result<T>`] alias.
//!
//! Panels never show these types directly: they call [`QaClientError::user_message`]
//! and keep only the resulting string.

use std::path::PathBuf;

pub use reqwest::StatusCode;
use thiserror::Error;

use crate::models::error_body::ErrorBody;

/* ------------------------------------------------------------------------- */
/* Public result alias                                                       */
/* ------------------------------------------------------------------------- */

/// Unified result alias for the entire crate.
pub type Result<T> = std::result::Result<T, QaClientError>;

/// Fallback text shown when the server cannot be reached at all.
pub const CONNECTION_ERROR_MESSAGE: &str = "Could not connect to the server";

/* ------------------------------------------------------------------------- */
/* Top-level error                                                           */
/* ------------------------------------------------------------------------- */

/// Top-level error for the `qa-api-client` crate.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum QaClientError {
    /// Configuration/validation errors (startup).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The server answered with a non-successful status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Underlying HTTP transport error (connection refused, DNS, TLS...).
    #[error("[QA Client] transport error: {0}")]
    HttpTransport(#[from] reqwest::Error),

    /// A successful response carried a body we could not decode.
    #[error("[QA Client] decode error for {url}: {reason}")]
    Decode { url: String, reason: String },

    /// Reading a file selected for upload failed.
    #[error("[QA Client] cannot read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl QaClientError {
    /// Single user-facing line for this error.
    ///
    /// Server-reported errors surface the server's own text, transport failures
    /// collapse to [`CONNECTION_ERROR_MESSAGE`], everything else uses `Display`.
    pub fn user_message(&self) -> String {
        match self {
            QaClientError::Api(api) => api.message.clone(),
            QaClientError::HttpTransport(e) if e.is_timeout() => {
                format!("{CONNECTION_ERROR_MESSAGE}: request timed out")
            }
            QaClientError::HttpTransport(_) => CONNECTION_ERROR_MESSAGE.to_string(),
            QaClientError::Decode { reason, .. } => format!("Unexpected server response: {reason}"),
            QaClientError::Io { path, source } => {
                format!("Cannot read {}: {source}", path.display())
            }
            QaClientError::Config(e) => e.to_string(),
        }
    }

    /// HTTP status of a server-reported error, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            QaClientError::Api(api) => Some(api.status),
            _ => None,
        }
    }
}

/* ------------------------------------------------------------------------- */
/* Config errors                                                             */
/* ------------------------------------------------------------------------- */

/// Error enum for environment/config-driven setup.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A number failed to parse (timeouts).
    #[error("[QA Client] invalid number in {var}: {reason}")]
    InvalidNumber {
        /// Variable name (e.g., `QA_API_TIMEOUT_SECS`).
        var: &'static str,
        /// Human-readable reason (e.g., `expected u64`).
        reason: &'static str,
    },

    /// Value had the wrong format (e.g., invalid URL).
    #[error("[QA Client] invalid format in {var}: {reason}")]
    InvalidFormat {
        /// Variable name (e.g., `QA_API_URL`).
        var: &'static str,
        /// Explanation (e.g., `must start with http:// or https://`).
        reason: &'static str,
    },
}

/* ------------------------------------------------------------------------- */
/* API errors                                                                */
/* ------------------------------------------------------------------------- */

/// A non-2xx answer from the Q&A backend.
///
/// `message` is what the user sees: the body's `detail`, else its `error`,
/// else `Error <code>: <reason>`.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    /// Numeric HTTP status code.
    pub status: StatusCode,
    /// Request URL.
    pub url: String,
    /// User-facing message extracted from the body.
    pub message: String,
}

impl ApiError {
    /// Builds an error from the status and raw body text of a failed response.
    pub fn from_body(status: StatusCode, url: impl Into<String>, body: &str) -> Self {
        let fallback = format!(
            "Error {}: {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("")
        );

        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(ErrorBody::into_message)
            .unwrap_or(fallback);

        Self {
            status,
            url: url.into(),
            message,
        }
    }
}

/// Shortens a response body for log lines.
pub fn make_snippet(text: &str) -> String {
    const MAX: usize = 200;
    let trimmed = text.trim();
    if trimmed.chars().count() <= MAX {
        return trimmed.to_string();
    }
    let mut s: String = trimmed.chars().take(MAX).collect();
    s.push('…');
    s
}

/* ------------------------------------------------------------------------- */
/* Env helpers (return unified `Result<T>`)                                  */
/* ------------------------------------------------------------------------- */

/// Parses an optional `u64` through `lookup` (`Ok(None)` if unset/empty).
///
/// # Errors
/// Returns [`ConfigError::InvalidNumber`] if the variable is set but not a valid `u64`.
pub fn opt_var_u64<F>(lookup: &F, name: &'static str) -> Result<Option<u64>>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(v) if !v.trim().is_empty() => v.trim().parse::<u64>().map(Some).map_err(|_| {
            QaClientError::from(ConfigError::InvalidNumber {
                var: name,
                reason: "expected u64",
            })
        }),
        _ => Ok(None),
    }
}

/* ------------------------------------------------------------------------- */
/* Validation helpers                                                        */
/* ------------------------------------------------------------------------- */

/// Validates that an HTTP endpoint starts with `http://` or `https://`.
///
/// # Errors
/// Returns [`ConfigError::InvalidFormat`] when the string does not start with
/// a valid HTTP scheme.
pub fn validate_http_endpoint(var: &'static str, value: &str) -> Result<()> {
    let value = value.trim();
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidFormat {
            var,
            reason: "must start with http:// or https://",
        }
        .into())
    }
}
