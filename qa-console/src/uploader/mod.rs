//! Document upload: client-side rules and the uploader panel.

pub mod rate_limit;
pub mod state;
pub mod validation;

pub use rate_limit::UploadRateLimiter;
pub use state::UploaderState;
pub use validation::{ValidationError, validate_files};
