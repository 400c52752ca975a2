use serde::{Deserialize, Serialize};

/// Response payload of `POST /api/ingest`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Human-readable summary written by the server.
    pub message: String,
    /// Number of files that were indexed.
    pub files_processed: u32,
    /// Names of the indexed files.
    #[serde(default)]
    pub files_list: Vec<String>,
}
