/// Default API base URL used when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Connection settings for the Q&A backend.
///
/// # Fields
///
/// - `base_url`: API root including the `/api` prefix (e.g. `http://localhost:8000/api`).
/// - `timeout_secs`: per-request timeout.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// API root; route paths are appended to it.
    pub base_url: String,

    /// Request timeout (in seconds).
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Same config pointing at another base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Base URL without trailing slashes.
    pub fn api_root(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }

    /// Full URL of an API route, e.g. `endpoint("/search")`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_root(), path.trim_start_matches('/'))
    }

    /// URL of the health route: the server root, i.e. the base URL with a
    /// trailing `/api` segment removed, followed by `/health`.
    pub fn health_url(&self) -> String {
        let root = self.api_root();
        let server_root = root.strip_suffix("/api").unwrap_or(root);
        format!("{server_root}/health")
    }
}
