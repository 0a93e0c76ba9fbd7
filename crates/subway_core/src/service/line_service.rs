//! Line use-case service.
//!
//! # Responsibility
//! - Translate line requests into stored lines and back into responses.
//! - Embed both endpoint stations in every line response.
//!
//! # Invariants
//! - A response is only built when both station ids resolve; a dangling
//!   reference fails the call with `StationNotFound`.
//! - `update_line` changes `name` and `color` only.
//! - `find_all_lines` is all-or-nothing: the first dangling reference fails
//!   the whole list.

use crate::db::DbError;
use crate::model::line::{Line, LineId, NewLine};
use crate::model::station::StationId;
use crate::repo::line_repo::LineRepository;
use crate::repo::station_repo::StationRepository;
use crate::repo::RepoError;
use crate::service::station_service::StationResponse;
use log::warn;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Body of a line creation request. All fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineRequest {
    pub name: String,
    pub color: String,
    pub up_station_id: StationId,
    pub down_station_id: StationId,
    pub distance: i64,
}

/// Body of a line update request. Any other field sent is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineUpdateRequest {
    pub name: String,
    pub color: String,
}

/// Line with both endpoint stations resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineResponse {
    pub id: LineId,
    pub name: String,
    pub color: String,
    pub up_station: StationResponse,
    pub down_station: StationResponse,
    pub distance: i64,
}

/// Service error for line use-cases.
#[derive(Debug)]
pub enum LineServiceError {
    /// Target line does not exist.
    LineNotFound(LineId),
    /// A referenced station does not exist (also covers dangling references).
    StationNotFound(StationId),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for LineServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LineNotFound(id) => write!(f, "line not found: {id}"),
            Self::StationNotFound(id) => write!(f, "station not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for LineServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for LineServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::LineNotFound(id) => Self::LineNotFound(id),
            RepoError::StationNotFound(id) => Self::StationNotFound(id),
            other => Self::Repo(other),
        }
    }
}

impl From<DbError> for LineServiceError {
    fn from(value: DbError) -> Self {
        Self::Repo(RepoError::Db(value))
    }
}

/// Line service composing the line store with station lookups.
pub struct LineService<L: LineRepository, S: StationRepository> {
    lines: L,
    stations: S,
}

impl<L: LineRepository, S: StationRepository> LineService<L, S> {
    pub fn new(lines: L, stations: S) -> Self {
        Self { lines, stations }
    }

    /// Stores a new line and returns it with both stations resolved.
    ///
    /// Station ids are checked only while building the response; run this
    /// inside a transaction so a failed lookup discards the inserted row.
    pub fn save_line(&self, request: &LineRequest) -> Result<LineResponse, LineServiceError> {
        let line = self.lines.create_line(&NewLine {
            name: request.name.clone(),
            color: request.color.clone(),
            up_station_id: request.up_station_id,
            down_station_id: request.down_station_id,
            distance: request.distance,
        })?;
        self.line_response(line)
    }

    pub fn find_all_lines(&self) -> Result<Vec<LineResponse>, LineServiceError> {
        self.lines
            .list_lines()?
            .into_iter()
            .map(|line| self.line_response(line))
            .collect()
    }

    pub fn find_line(&self, id: LineId) -> Result<LineResponse, LineServiceError> {
        let line = self.lines.get_line(id)?;
        self.line_response(line)
    }

    pub fn update_line(
        &self,
        id: LineId,
        request: &LineUpdateRequest,
    ) -> Result<LineResponse, LineServiceError> {
        let mut line = self.lines.get_line(id)?;
        line.relabel(request.name.as_str(), request.color.as_str());
        let saved = self.lines.save_line(&line)?;
        self.line_response(saved)
    }

    /// Deletes one line; an unknown id is an error, not a no-op.
    pub fn delete_line(&self, id: LineId) -> Result<(), LineServiceError> {
        let line = self.lines.get_line(id)?;
        self.lines.delete_line(line.id)?;
        Ok(())
    }

    fn line_response(&self, line: Line) -> Result<LineResponse, LineServiceError> {
        let up_station = self.resolve_station(line.id, line.up_station_id)?;
        let down_station = self.resolve_station(line.id, line.down_station_id)?;

        Ok(LineResponse {
            id: line.id,
            name: line.name,
            color: line.color,
            up_station,
            down_station,
            distance: line.distance,
        })
    }

    fn resolve_station(
        &self,
        line_id: LineId,
        station_id: StationId,
    ) -> Result<StationResponse, LineServiceError> {
        match self.stations.get_station(station_id) {
            Ok(station) => Ok(station.into()),
            Err(RepoError::StationNotFound(id)) => {
                warn!(
                    "event=line_resolve module=service status=dangling line_id={} station_id={}",
                    line_id, id
                );
                Err(LineServiceError::StationNotFound(id))
            }
            Err(err) => Err(err.into()),
        }
    }
}
