use serde::{Deserialize, Serialize};

/// Snapshot returned by `GET /api/index/info`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexInfo {
    #[serde(default)]
    pub documents_count: u32,
    #[serde(default)]
    pub chunks_count: u32,
    #[serde(default)]
    pub has_bm25_index: bool,
    #[serde(default)]
    pub index_file_exists: bool,
    #[serde(default)]
    pub document_names: Vec<String>,
}

impl IndexInfo {
    /// `true` when nothing has been ingested yet.
    pub fn is_empty(&self) -> bool {
        self.documents_count == 0
    }
}
