//! Client config loaded from environment variables.
//!
//! # Environment variables
//!
//! - `QA_API_URL`          = API base URL (default `http://localhost:8000/api`)
//! - `QA_API_TIMEOUT_SECS` = per-request timeout in seconds (default 60)

use crate::{
    config::client_config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS},
    error_handler::{Result, opt_var_u64, validate_http_endpoint},
};

/// Reads [`ClientConfig`] from the process environment.
///
/// # Errors
///
/// - [`ConfigError::InvalidFormat`](crate::error_handler::ConfigError::InvalidFormat) if `QA_API_URL` is not http/https
/// - [`ConfigError::InvalidNumber`](crate::error_handler::ConfigError::InvalidNumber) if the timeout is not a number
pub fn config_from_env() -> Result<ClientConfig> {
    config_from_lookup(|name| std::env::var(name).ok())
}

/// Same as [`config_from_env`] with an injectable variable source.
pub fn config_from_lookup<F>(lookup: F) -> Result<ClientConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let base_url = lookup("QA_API_URL")
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    validate_http_endpoint("QA_API_URL", &base_url)?;

    let timeout_secs = opt_var_u64(&lookup, "QA_API_TIMEOUT_SECS")?.unwrap_or(DEFAULT_TIMEOUT_SECS);

    Ok(ClientConfig {
        base_url,
        timeout_secs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = config_from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg, ClientConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let cfg = config_from_lookup(lookup_from(&[
            ("QA_API_URL", "https://qa.internal/api"),
            ("QA_API_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(cfg.base_url, "https://qa.internal/api");
        assert_eq!(cfg.timeout_secs, 5);
    }

    #[test]
    fn rejects_schemeless_url() {
        assert!(config_from_lookup(lookup_from(&[("QA_API_URL", "qa.internal/api")])).is_err());
    }

    #[test]
    fn rejects_bad_timeout() {
        assert!(config_from_lookup(lookup_from(&[("QA_API_TIMEOUT_SECS", "soon")])).is_err());
    }
}
