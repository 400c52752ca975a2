//! Client-side upload rules.
//!
//! Checks run in a fixed order and the first failing rule wins:
//! format, then file count, then size, then empty content.

use qa_api_client::UploadFile;
use thiserror::Error;

pub const MIN_FILES: usize = 3;
pub const MAX_FILES: usize = 10;
pub const MAX_FILE_SIZE_MB: u64 = 10;
pub const MAX_FILE_SIZE_BYTES: u64 = MAX_FILE_SIZE_MB * 1024 * 1024;

pub const ALLOWED_EXTENSIONS: [&str; 2] = [".txt", ".pdf"];
pub const ALLOWED_MIME_TYPES: [&str; 2] = ["text/plain", "application/pdf"];

/// Why a selection was refused. `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid format: {}. Only .txt and .pdf files are allowed", .0.join(", "))]
    InvalidFormat(Vec<String>),

    #[error("You must upload at least {} files", MIN_FILES)]
    TooFewFiles(usize),

    #[error("You cannot upload more than {} files", MAX_FILES)]
    TooManyFiles(usize),

    /// Entries are already formatted as `name (12.3MB)`.
    #[error("Files too large: {}. Maximum {}MB per file", .0.join(", "), MAX_FILE_SIZE_MB)]
    Oversized(Vec<String>),

    #[error("Empty files: {}. Files must have content", .0.join(", "))]
    Empty(Vec<String>),
}

/// Accepted when the MIME type is allowed, or failing that, the extension.
pub fn has_allowed_format(file: &UploadFile) -> bool {
    let mime_ok = file
        .mime
        .as_deref()
        .is_some_and(|m| ALLOWED_MIME_TYPES.contains(&m));

    mime_ok || ALLOWED_EXTENSIONS.contains(&file.extension().as_str())
}

fn size_mb(bytes: u64) -> String {
    format!("{:.1}", bytes as f64 / (1024.0 * 1024.0))
}

/// Validates a whole selection.
///
/// # Errors
/// The first failing rule, see [`ValidationError`].
pub fn validate_files(files: &[UploadFile]) -> Result<(), ValidationError> {
    let invalid: Vec<String> = files
        .iter()
        .filter(|f| !has_allowed_format(f))
        .map(|f| f.name.clone())
        .collect();
    if !invalid.is_empty() {
        return Err(ValidationError::InvalidFormat(invalid));
    }

    if files.len() < MIN_FILES {
        return Err(ValidationError::TooFewFiles(files.len()));
    }
    if files.len() > MAX_FILES {
        return Err(ValidationError::TooManyFiles(files.len()));
    }

    let oversized: Vec<String> = files
        .iter()
        .filter(|f| f.size() > MAX_FILE_SIZE_BYTES)
        .map(|f| format!("{} ({}MB)", f.name, size_mb(f.size())))
        .collect();
    if !oversized.is_empty() {
        return Err(ValidationError::Oversized(oversized));
    }

    let empty: Vec<String> = files
        .iter()
        .filter(|f| f.size() == 0)
        .map(|f| f.name.clone())
        .collect();
    if !empty.is_empty() {
        return Err(ValidationError::Empty(empty));
    }

    Ok(())
}
