use qa_api_client::IndexInfo;
use tracing::warn;

use crate::backend::QaBackend;

/// Indexed-documents panel.
///
/// Fetch failures are logged only; the last good snapshot stays on screen.
#[derive(Debug)]
pub struct IndexPanel {
    pub info: Option<IndexInfo>,
    pub loading: bool,
    pub expanded: bool,
}

impl Default for IndexPanel {
    fn default() -> Self {
        Self {
            info: None,
            loading: false,
            expanded: true,
        }
    }
}

impl IndexPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn refresh<B: QaBackend>(&mut self, backend: &B) {
        self.loading = true;
        match backend.index_info().await {
            Ok(info) => self.info = Some(info),
            Err(e) => warn!(error = %e, "failed to fetch index info"),
        }
        self.loading = false;
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    /// `true` when there is nothing indexed (or nothing known yet).
    pub fn is_empty(&self) -> bool {
        self.info.as_ref().is_none_or(IndexInfo::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::fake::FakeBackend;

    fn snapshot() -> IndexInfo {
        IndexInfo {
            documents_count: 3,
            chunks_count: 17,
            has_bm25_index: true,
            index_file_exists: true,
            document_names: vec!["a.txt".into(), "b.pdf".into(), "c.txt".into()],
        }
    }

    #[tokio::test]
    async fn refresh_stores_snapshot() {
        let backend = FakeBackend::default();
        backend.push_index_info(Ok(snapshot()));

        let mut panel = IndexPanel::new();
        assert!(panel.is_empty());
        panel.refresh(&backend).await;

        assert!(!panel.loading);
        assert!(!panel.is_empty());
        assert_eq!(panel.info.as_ref().unwrap().chunks_count, 17);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_last_snapshot() {
        let backend = FakeBackend::default();
        backend.push_index_info(Ok(snapshot()));

        let mut panel = IndexPanel::new();
        panel.refresh(&backend).await;
        panel.refresh(&backend).await;

        assert_eq!(panel.info, Some(snapshot()));
        assert_eq!(backend.calls().len(), 2);
    }

    #[test]
    fn starts_expanded_and_toggles() {
        let mut panel = IndexPanel::new();
        assert!(panel.expanded);
        panel.toggle_expanded();
        assert!(!panel.expanded);
    }
}
