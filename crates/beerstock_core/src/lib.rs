//! Core domain logic for beer stock keeping.
//! This crate is the single source of truth for stock invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod mapper;
pub mod model;
pub mod repo;
pub mod service;

pub use config::AppConfig;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use mapper::{BeerMapper, DefaultBeerMapper};
pub use model::beer::{Beer, BeerDto, BeerId, BeerType, BeerValidationError};
pub use repo::beer_repo::{BeerRepository, RepoError, RepoResult, SqliteBeerRepository};
pub use repo::memory::InMemoryBeerRepository;
pub use service::beer_service::{BeerKey, BeerService, BeerServiceError, ServiceResult};

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
