//! Core domain logic for the blogging console.
//! Storage, validation and the interactive menu live here; the binary only
//! wires configuration, logging and stdin/stdout together.

pub mod config;
pub mod console;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{AppConfig, ConfigError};
pub use console::{run_session, ConsoleError, HandlerOutcome, SessionEnd, Terminal};
pub use logging::{default_log_level, flush_logging, init_logging};
pub use model::blog::{Blog, BlogId};
pub use model::post::{Post, PostId, PostListing, NO_CONTENT_PLACEHOLDER};
pub use model::validation::EntityValidationError;
pub use repo::blogging_repo::{BloggingRepository, RepoError, RepoResult, SqliteBloggingRepository};
pub use service::blog_service::{BlogService, Rejection, ServiceError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
