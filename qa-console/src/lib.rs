//! Console front end for the document Q&A service.
//!
//! The console is split into panel state machines:
//! [`UploaderState`], [`SearchState`], [`QaState`], [`IndexPanel`] and
//! [`HealthCheckState`]. [`App`] composes them into an interactive shell and
//! [`render`] turns their state into terminal text.

pub mod app;
pub mod backend;
pub mod errors;
pub mod panels;
pub mod render;
pub mod uploader;

pub use app::{App, ShellCommand, Step};
pub use backend::QaBackend;
pub use errors::ConsoleError;
pub use panels::{HealthCheckState, IndexPanel, QaState, SearchState};
pub use uploader::{UploaderState, ValidationError, validate_files};
