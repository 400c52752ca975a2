use std::time::Instant;

use qa_api_client::{UploadFile, UploadResponse};
use tracing::{debug, info, warn};

use crate::backend::QaBackend;
use crate::uploader::rate_limit::UploadRateLimiter;
use crate::uploader::validation::validate_files;

const PROCESS_FALLBACK_ERROR: &str = "Error processing files";

/// Upload panel: select, validate, then process (ingest) a batch of files.
#[derive(Debug, Default)]
pub struct UploaderState {
    pub selected_files: Vec<UploadFile>,
    pub ready_to_process: bool,
    pub uploading: bool,
    pub error: Option<String>,
    pub success: Option<String>,
    limiter: UploadRateLimiter,
}

impl UploaderState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the selection with `files` if they pass validation.
    ///
    /// Returns `true` when the selection was accepted.
    pub fn handle_files(&mut self, files: Vec<UploadFile>) -> bool {
        self.error = None;
        self.success = None;

        if let Err(e) = validate_files(&files) {
            debug!(files = files.len(), reason = %e, "selection rejected");
            self.error = Some(e.to_string());
            return false;
        }

        self.success = Some(format!(
            "{} file(s) selected and validated. Ready to process.",
            files.len()
        ));
        self.selected_files = files;
        self.ready_to_process = true;
        true
    }

    /// Uploads the validated selection. See [`process_files_at`](Self::process_files_at).
    pub async fn process_files<B: QaBackend>(&mut self, backend: &B) -> Option<UploadResponse> {
        self.process_files_at(backend, Instant::now()).await
    }

    /// Uploads the validated selection as if the clock read `now`.
    ///
    /// Does nothing unless a non-empty selection is ready. Returns the server
    /// response on success; on failure the error text is stored and the rate
    /// limiter is reset.
    pub async fn process_files_at<B: QaBackend>(
        &mut self,
        backend: &B,
        now: Instant,
    ) -> Option<UploadResponse> {
        if !self.ready_to_process || self.selected_files.is_empty() {
            return None;
        }

        if let Some(wait) = self.limiter.check(now) {
            self.error = Some(format!(
                "Please wait {wait} seconds before processing new files"
            ));
            return None;
        }

        self.uploading = true;
        self.limiter.record_attempt(now);

        let result = backend.ingest(&self.selected_files).await;
        self.uploading = false;

        match result {
            Ok(resp) => {
                info!(files_processed = resp.files_processed, "upload accepted");
                self.success = Some(resp.message.clone());
                self.selected_files.clear();
                self.ready_to_process = false;
                Some(resp)
            }
            Err(e) => {
                warn!(error = %e, "upload failed");
                let msg = e.user_message();
                self.error = Some(if msg.trim().is_empty() {
                    PROCESS_FALLBACK_ERROR.to_string()
                } else {
                    msg
                });
                self.limiter.reset();
                None
            }
        }
    }

    /// Drops the pending selection and all messages.
    pub fn cancel_selection(&mut self) {
        self.selected_files.clear();
        self.ready_to_process = false;
        self.error = None;
        self.success = None;
    }

    /// Same reset as [`cancel_selection`](Self::cancel_selection); the app also
    /// forgets the indexed documents when it calls this.
    pub fn clear_all(&mut self) {
        self.cancel_selection();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use qa_api_client::error_handler::StatusCode;

    use super::*;
    use crate::backend::fake::{FakeBackend, api_error};

    fn txt(name: &str) -> UploadFile {
        UploadFile::new(name, Some("text/plain".into()), b"hello there".to_vec())
    }

    fn three() -> Vec<UploadFile> {
        vec![txt("a.txt"), txt("b.txt"), txt("c.txt")]
    }

    fn accepted(n: u32) -> UploadResponse {
        UploadResponse {
            message: format!("Processed {n} of {n} files"),
            files_processed: n,
            files_list: vec!["a.txt".into(), "b.txt".into(), "c.txt".into()],
        }
    }

    #[test]
    fn valid_selection_becomes_ready() {
        let mut up = UploaderState::new();
        assert!(up.handle_files(three()));
        assert!(up.ready_to_process);
        assert_eq!(
            up.success.as_deref(),
            Some("3 file(s) selected and validated. Ready to process.")
        );
        assert_eq!(up.error, None);
    }

    #[test]
    fn invalid_selection_sets_error_and_keeps_previous_state() {
        let mut up = UploaderState::new();
        assert!(!up.handle_files(vec![txt("a.txt")]));
        assert!(!up.ready_to_process);
        assert_eq!(up.error.as_deref(), Some("You must upload at least 3 files"));
        assert_eq!(up.success, None);
    }

    #[tokio::test]
    async fn process_without_selection_is_noop() {
        let backend = FakeBackend::default();
        let mut up = UploaderState::new();
        assert!(up.process_files(&backend).await.is_none());
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn successful_upload_clears_selection() {
        let backend = FakeBackend::default();
        backend.push_ingest(Ok(accepted(3)));

        let mut up = UploaderState::new();
        up.handle_files(three());
        let resp = up.process_files(&backend).await.unwrap();

        assert_eq!(resp.files_list.len(), 3);
        assert_eq!(up.success.as_deref(), Some("Processed 3 of 3 files"));
        assert!(!up.ready_to_process);
        assert!(up.selected_files.is_empty());
        assert!(!up.uploading);
        assert_eq!(backend.calls(), vec!["ingest:3"]);
    }

    #[tokio::test]
    async fn second_attempt_within_ten_seconds_is_blocked() {
        let backend = FakeBackend::default();
        backend.push_ingest(Ok(accepted(3)));

        let t0 = Instant::now();
        let mut up = UploaderState::new();
        up.handle_files(three());
        up.process_files_at(&backend, t0).await.unwrap();

        up.handle_files(three());
        let blocked = up.process_files_at(&backend, t0 + Duration::from_millis(2_500)).await;
        assert!(blocked.is_none());
        assert_eq!(
            up.error.as_deref(),
            Some("Please wait 8 seconds before processing new files")
        );
        assert!(up.ready_to_process, "selection survives the wait");
        assert_eq!(backend.calls().len(), 1);
    }

    #[tokio::test]
    async fn failed_upload_resets_rate_limit() {
        let backend = FakeBackend::default();
        backend
            .push_ingest(Err(api_error(StatusCode::BAD_REQUEST, "Se necesitan al menos 3 archivos válidos")))
            .push_ingest(Ok(accepted(3)));

        let t0 = Instant::now();
        let mut up = UploaderState::new();
        up.handle_files(three());

        assert!(up.process_files_at(&backend, t0).await.is_none());
        assert_eq!(up.error.as_deref(), Some("Se necesitan al menos 3 archivos válidos"));
        assert!(up.ready_to_process);

        let retry = up.process_files_at(&backend, t0 + Duration::from_secs(1)).await;
        assert!(retry.is_some());
        assert_eq!(backend.calls().len(), 2);
    }

    #[test]
    fn cancel_drops_everything() {
        let mut up = UploaderState::new();
        up.handle_files(three());
        up.cancel_selection();
        assert!(up.selected_files.is_empty());
        assert!(!up.ready_to_process);
        assert_eq!(up.success, None);
    }
}
