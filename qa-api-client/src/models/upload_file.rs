use std::path::Path;

use crate::error_handler::{QaClientError, Result};

/// One file selected for upload, held in memory until the ingest request.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    /// File name sent in the multipart part (no directories).
    pub name: String,
    /// Declared MIME type, if one could be determined.
    pub mime: Option<String>,
    /// Raw content.
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, mime: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime,
            bytes,
        }
    }

    /// Reads `path` and guesses the MIME type from its file name.
    ///
    /// # Errors
    /// Returns [`QaClientError::Io`] when the file cannot be read.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|source| QaClientError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let mime = mime_guess::from_path(path).first_raw().map(str::to_string);

        Ok(Self { name, mime, bytes })
    }

    /// Size in bytes.
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Lowercased extension including the dot (`".pdf"`), taken after the last `.`.
    ///
    /// A name without a dot yields the whole name, so it never matches an
    /// allowed extension.
    pub fn extension(&self) -> String {
        let tail = self.name.rsplit('.').next().unwrap_or_default();
        format!(".{}", tail.to_lowercase())
    }
}
