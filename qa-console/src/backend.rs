//! The seam between panels and the HTTP client.
//!
//! Panels are generic over [`QaBackend`] so they can be driven by
//! [`QaApiService`] in the binary and by an in-memory fake in tests.

use std::future::Future;

use qa_api_client::{
    AskResponse, HealthResponse, IndexInfo, QaApiService, Result, SearchResponse, UploadFile,
    UploadResponse,
};

/// Operations of the Q&A REST API as seen by the panels.
pub trait QaBackend {
    fn ingest(&self, files: &[UploadFile]) -> impl Future<Output = Result<UploadResponse>> + Send;

    fn search(&self, query: &str) -> impl Future<Output = Result<SearchResponse>> + Send;

    fn ask(&self, question: &str) -> impl Future<Output = Result<AskResponse>> + Send;

    fn index_info(&self) -> impl Future<Output = Result<IndexInfo>> + Send;

    fn health(&self) -> impl Future<Output = Result<HealthResponse>> + Send;
}

impl QaBackend for QaApiService {
    async fn ingest(&self, files: &[UploadFile]) -> Result<UploadResponse> {
        QaApiService::ingest(self, files).await
    }

    async fn search(&self, query: &str) -> Result<SearchResponse> {
        QaApiService::search(self, query).await
    }

    async fn ask(&self, question: &str) -> Result<AskResponse> {
        QaApiService::ask(self, question).await
    }

    async fn index_info(&self) -> Result<IndexInfo> {
        QaApiService::index_info(self).await
    }

    async fn health(&self) -> Result<HealthResponse> {
        QaApiService::health(self).await
    }
}

#[cfg(test)]
pub(crate) mod fake {
    //! Scripted backend for panel tests.

    use std::collections::VecDeque;
    use std::sync::Mutex;

    use qa_api_client::error_handler::StatusCode;
    use qa_api_client::{ApiError, QaClientError};

    use super::*;

    /// Each queue is popped once per call; an empty queue answers 500.
    #[derive(Default)]
    pub struct FakeBackend {
        pub ingest: Mutex<VecDeque<Result<UploadResponse>>>,
        pub search: Mutex<VecDeque<Result<SearchResponse>>>,
        pub ask: Mutex<VecDeque<Result<AskResponse>>>,
        pub index_info: Mutex<VecDeque<Result<IndexInfo>>>,
        pub health: Mutex<VecDeque<Result<HealthResponse>>>,
        pub calls: Mutex<Vec<String>>,
    }

    pub fn api_error(status: StatusCode, detail: &str) -> QaClientError {
        let body = format!(r#"{{"detail":"{detail}"}}"#);
        ApiError::from_body(status, "http://fake/api", &body).into()
    }

    fn pop<T>(queue: &Mutex<VecDeque<Result<T>>>) -> Result<T> {
        queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(api_error(StatusCode::INTERNAL_SERVER_ERROR, "unscripted call")))
    }

    impl FakeBackend {
        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        pub fn push_ingest(&self, r: Result<UploadResponse>) -> &Self {
            self.ingest.lock().unwrap().push_back(r);
            self
        }

        pub fn push_search(&self, r: Result<SearchResponse>) -> &Self {
            self.search.lock().unwrap().push_back(r);
            self
        }

        pub fn push_ask(&self, r: Result<AskResponse>) -> &Self {
            self.ask.lock().unwrap().push_back(r);
            self
        }

        pub fn push_index_info(&self, r: Result<IndexInfo>) -> &Self {
            self.index_info.lock().unwrap().push_back(r);
            self
        }

        pub fn push_health(&self, r: Result<HealthResponse>) -> &Self {
            self.health.lock().unwrap().push_back(r);
            self
        }
    }

    impl QaBackend for FakeBackend {
        async fn ingest(&self, files: &[UploadFile]) -> Result<UploadResponse> {
            self.record(format!("ingest:{}", files.len()));
            pop(&self.ingest)
        }

        async fn search(&self, query: &str) -> Result<SearchResponse> {
            self.record(format!("search:{query}"));
            pop(&self.search)
        }

        async fn ask(&self, question: &str) -> Result<AskResponse> {
            self.record(format!("ask:{question}"));
            pop(&self.ask)
        }

        async fn index_info(&self) -> Result<IndexInfo> {
            self.record("index_info".to_string());
            pop(&self.index_info)
        }

        async fn health(&self) -> Result<HealthResponse> {
            self.record("health".to_string());
            pop(&self.health)
        }
    }
}
