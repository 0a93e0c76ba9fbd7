//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the store contracts for stations and lines.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Lookups and deletes of an absent id return a `NotFound` variant, not
//!   `Ok(None)` or a silent no-op.
//! - Repositories never check references across stores.

use crate::db::DbError;
use crate::model::line::LineId;
use crate::model::station::StationId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod line_repo;
pub mod station_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error shared by the station and line stores.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    StationNotFound(StationId),
    LineNotFound(LineId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::StationNotFound(id) => write!(f, "station not found: {id}"),
            Self::LineNotFound(id) => write!(f, "line not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::StationNotFound(_) | Self::LineNotFound(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
