use tracing::warn;

use crate::backend::QaBackend;

/// "Test connection" button state.
#[derive(Debug, Default)]
pub struct HealthCheckState {
    pub testing: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl HealthCheckState {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn test_connection<B: QaBackend>(&mut self, backend: &B) {
        self.testing = true;
        self.error = None;
        self.success = None;

        match backend.health().await {
            Ok(_) => self.success = Some("Connection to backend succeeded".to_string()),
            Err(e) => {
                warn!(error = %e, "health check failed");
                self.error =
                    Some("Cannot connect to backend: Backend is not available".to_string());
            }
        }
        self.testing = false;
    }
}

#[cfg(test)]
mod tests {
    use qa_api_client::HealthResponse;

    use super::*;
    use crate::backend::fake::FakeBackend;

    #[tokio::test]
    async fn reports_success_then_failure() {
        let backend = FakeBackend::default();
        backend.push_health(Ok(HealthResponse {
            status: "healthy".into(),
        }));

        let mut h = HealthCheckState::new();
        h.test_connection(&backend).await;
        assert_eq!(h.success.as_deref(), Some("Connection to backend succeeded"));
        assert_eq!(h.error, None);

        h.test_connection(&backend).await;
        assert_eq!(h.success, None);
        assert_eq!(
            h.error.as_deref(),
            Some("Cannot connect to backend: Backend is not available")
        );
        assert!(!h.testing);
    }
}
