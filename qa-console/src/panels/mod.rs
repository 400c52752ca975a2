//! One state machine per screen section, mirroring the web components.

pub mod health;
pub mod index;
pub mod qa;
pub mod search;

pub use health::HealthCheckState;
pub use index::IndexPanel;
pub use qa::QaState;
pub use search::SearchState;
