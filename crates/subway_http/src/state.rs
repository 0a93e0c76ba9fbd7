//! Shared handler state.

use subway_core::{
    Database, LineService, LineServiceError, SqliteLineRepository, SqliteStationRepository,
    StationService, StationServiceError,
};

/// State cloned into every axum handler.
#[derive(Clone)]
pub struct AppState {
    db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Runs `f` with a line service bound to one transaction.
    pub fn with_line_service<T>(
        &self,
        f: impl FnOnce(
            &LineService<SqliteLineRepository<'_>, SqliteStationRepository<'_>>,
        ) -> Result<T, LineServiceError>,
    ) -> Result<T, LineServiceError> {
        self.db.with_transaction(|conn| {
            let service = LineService::new(
                SqliteLineRepository::new(conn),
                SqliteStationRepository::new(conn),
            );
            f(&service)
        })
    }

    /// Runs `f` with a station service bound to one transaction.
    pub fn with_station_service<T>(
        &self,
        f: impl FnOnce(&StationService<SqliteStationRepository<'_>>) -> Result<T, StationServiceError>,
    ) -> Result<T, StationServiceError> {
        self.db.with_transaction(|conn| {
            let service = StationService::new(SqliteStationRepository::new(conn));
            f(&service)
        })
    }
}
