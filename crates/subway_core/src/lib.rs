//! Core domain logic for the subway line catalog.
//! This crate owns stations, lines and the rules that join them.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{Database, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::line::{Line, LineId, NewLine};
pub use model::station::{Station, StationId};
pub use repo::line_repo::{LineRepository, SqliteLineRepository};
pub use repo::station_repo::{SqliteStationRepository, StationRepository};
pub use repo::{RepoError, RepoResult};
pub use service::line_service::{
    LineRequest, LineResponse, LineService, LineServiceError, LineUpdateRequest,
};
pub use service::station_service::{
    StationRequest, StationResponse, StationService, StationServiceError,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
