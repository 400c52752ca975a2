use qa_api_client::SearchResponse;
use tracing::warn;

use crate::backend::QaBackend;

/// Longest query accepted by the search input (and by the backend).
pub const MAX_QUERY_CHARS: usize = 200;

/// Keyword search panel.
#[derive(Debug, Default)]
pub struct SearchState {
    pub query: String,
    pub results: Option<SearchResponse>,
    pub searching: bool,
    pub error: Option<String>,
    pub has_searched: bool,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn perform_search<B: QaBackend>(&mut self, backend: &B, query: &str) {
        self.query = query.to_string();

        if query.trim().is_empty() {
            self.error = Some("Enter a search query".to_string());
            return;
        }
        if query.chars().count() > MAX_QUERY_CHARS {
            self.error = Some(format!(
                "Search query must be at most {MAX_QUERY_CHARS} characters"
            ));
            return;
        }

        self.searching = true;
        self.error = None;
        self.has_searched = true;

        match backend.search(query).await {
            Ok(resp) => self.results = Some(resp),
            Err(e) => {
                warn!(error = %e, "search failed");
                self.error = Some(e.user_message());
                self.results = None;
            }
        }
        self.searching = false;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
