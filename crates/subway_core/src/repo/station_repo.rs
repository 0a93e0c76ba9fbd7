//! Station repository contract and SQLite implementation.

use super::{RepoError, RepoResult};
use crate::model::station::{Station, StationId};
use rusqlite::{params, Connection, OptionalExtension, Row};

const STATION_SELECT_SQL: &str = "SELECT id, name FROM stations";

/// Store operations for station records.
pub trait StationRepository {
    fn create_station(&self, name: &str) -> RepoResult<Station>;
    fn list_stations(&self) -> RepoResult<Vec<Station>>;
    fn get_station(&self, id: StationId) -> RepoResult<Station>;
    /// Removes the station only; lines referencing it are left untouched.
    fn delete_station(&self, id: StationId) -> RepoResult<()>;
}

/// SQLite-backed station repository.
pub struct SqliteStationRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStationRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl StationRepository for SqliteStationRepository<'_> {
    fn create_station(&self, name: &str) -> RepoResult<Station> {
        self.conn
            .execute("INSERT INTO stations (name) VALUES (?1);", params![name])?;

        Ok(Station {
            id: self.conn.last_insert_rowid(),
            name: name.to_string(),
        })
    }

    fn list_stations(&self) -> RepoResult<Vec<Station>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{STATION_SELECT_SQL} ORDER BY id ASC;"))?;
        let stations = stmt
            .query_map([], parse_station_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(stations)
    }

    fn get_station(&self, id: StationId) -> RepoResult<Station> {
        self.conn
            .query_row(
                &format!("{STATION_SELECT_SQL} WHERE id = ?1;"),
                params![id],
                parse_station_row,
            )
            .optional()?
            .ok_or(RepoError::StationNotFound(id))
    }

    fn delete_station(&self, id: StationId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM stations WHERE id = ?1;", params![id])?;

        if changed == 0 {
            return Err(RepoError::StationNotFound(id));
        }

        Ok(())
    }
}

fn parse_station_row(row: &Row<'_>) -> rusqlite::Result<Station> {
    Ok(Station {
        id: row.get("id")?,
        name: row.get("name")?,
    })
}
