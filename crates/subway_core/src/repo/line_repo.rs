//! Line repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide create/list/get/save/delete over the `lines` table.
//!
//! # Invariants
//! - `create_line` stores station ids as given; it does not check that the
//!   stations exist.
//! - `save_line` writes `name` and `color` only.

use super::{RepoError, RepoResult};
use crate::model::line::{Line, LineId, NewLine};
use rusqlite::{params, Connection, OptionalExtension, Row};

const LINE_SELECT_SQL: &str = "SELECT
    id,
    name,
    color,
    up_station_id,
    down_station_id,
    distance
FROM lines";

/// Store operations for line records.
pub trait LineRepository {
    fn create_line(&self, line: &NewLine) -> RepoResult<Line>;
    fn list_lines(&self) -> RepoResult<Vec<Line>>;
    fn get_line(&self, id: LineId) -> RepoResult<Line>;
    /// Persists label changes made to a previously fetched line.
    fn save_line(&self, line: &Line) -> RepoResult<Line>;
    fn delete_line(&self, id: LineId) -> RepoResult<()>;
}

/// SQLite-backed line repository.
pub struct SqliteLineRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteLineRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl LineRepository for SqliteLineRepository<'_> {
    fn create_line(&self, line: &NewLine) -> RepoResult<Line> {
        self.conn.execute(
            "INSERT INTO lines (
                name,
                color,
                up_station_id,
                down_station_id,
                distance
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                line.name.as_str(),
                line.color.as_str(),
                line.up_station_id,
                line.down_station_id,
                line.distance,
            ],
        )?;

        Ok(line.clone().into_line(self.conn.last_insert_rowid()))
    }

    fn list_lines(&self) -> RepoResult<Vec<Line>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{LINE_SELECT_SQL} ORDER BY id ASC;"))?;
        let lines = stmt
            .query_map([], parse_line_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(lines)
    }

    fn get_line(&self, id: LineId) -> RepoResult<Line> {
        self.conn
            .query_row(
                &format!("{LINE_SELECT_SQL} WHERE id = ?1;"),
                params![id],
                parse_line_row,
            )
            .optional()?
            .ok_or(RepoError::LineNotFound(id))
    }

    fn save_line(&self, line: &Line) -> RepoResult<Line> {
        let changed = self.conn.execute(
            "UPDATE lines
             SET
                name = ?1,
                color = ?2
             WHERE id = ?3;",
            params![line.name.as_str(), line.color.as_str(), line.id],
        )?;

        if changed == 0 {
            return Err(RepoError::LineNotFound(line.id));
        }

        self.get_line(line.id)
    }

    fn delete_line(&self, id: LineId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM lines WHERE id = ?1;", params![id])?;

        if changed == 0 {
            return Err(RepoError::LineNotFound(id));
        }

        Ok(())
    }
}

fn parse_line_row(row: &Row<'_>) -> rusqlite::Result<Line> {
    Ok(Line {
        id: row.get("id")?,
        name: row.get("name")?,
        color: row.get("color")?,
        up_station_id: row.get("up_station_id")?,
        down_station_id: row.get("down_station_id")?,
        distance: row.get("distance")?,
    })
}
