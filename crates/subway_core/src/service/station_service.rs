//! Station use-case service.

use crate::model::station::{Station, StationId};
use crate::repo::station_repo::StationRepository;
use crate::repo::RepoError;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Body of a station creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationRequest {
    pub name: String,
}

/// Station shape returned to callers, also embedded in line responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationResponse {
    pub id: StationId,
    pub name: String,
}

impl From<Station> for StationResponse {
    fn from(value: Station) -> Self {
        Self {
            id: value.id,
            name: value.name,
        }
    }
}

/// Service error for station use-cases.
#[derive(Debug)]
pub enum StationServiceError {
    /// Target station does not exist.
    StationNotFound(StationId),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for StationServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StationNotFound(id) => write!(f, "station not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StationServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::StationNotFound(_) => None,
        }
    }
}

impl From<RepoError> for StationServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::StationNotFound(id) => Self::StationNotFound(id),
            other => Self::Repo(other),
        }
    }
}

impl From<crate::db::DbError> for StationServiceError {
    fn from(value: crate::db::DbError) -> Self {
        Self::Repo(RepoError::Db(value))
    }
}

/// Station service facade over repository implementations.
pub struct StationService<S: StationRepository> {
    stations: S,
}

impl<S: StationRepository> StationService<S> {
    pub fn new(stations: S) -> Self {
        Self { stations }
    }

    pub fn save_station(
        &self,
        request: &StationRequest,
    ) -> Result<StationResponse, StationServiceError> {
        let station = self.stations.create_station(request.name.as_str())?;
        Ok(station.into())
    }

    pub fn find_all_stations(&self) -> Result<Vec<StationResponse>, StationServiceError> {
        let stations = self.stations.list_stations()?;
        Ok(stations.into_iter().map(StationResponse::from).collect())
    }

    pub fn find_station(&self, id: StationId) -> Result<StationResponse, StationServiceError> {
        Ok(self.stations.get_station(id)?.into())
    }

    /// Deletes one station. Lines that reference it are not checked.
    pub fn delete_station(&self, id: StationId) -> Result<(), StationServiceError> {
        self.stations.delete_station(id)?;
        Ok(())
    }
}
