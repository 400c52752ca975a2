//! Wire DTOs for the Q&A REST API.
//!
//! Field names match the JSON exactly; unknown fields are ignored on decode.

pub mod ask;
pub mod error_body;
pub mod health;
pub mod index_info;
pub mod search;
pub mod upload;
pub mod upload_file;

pub use ask::{AskRequest, AskResponse, Citation};
pub use error_body::ErrorBody;
pub use health::HealthResponse;
pub use index_info::IndexInfo;
pub use search::{SearchResponse, SearchResult};
pub use upload::UploadResponse;
pub use upload_file::UploadFile;
