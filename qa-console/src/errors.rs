//! Typed error for the qa-console crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Building the HTTP client failed.
    #[error("client error: {0}")]
    Client(#[from] qa_api_client::QaClientError),

    /// Reading commands or writing output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
