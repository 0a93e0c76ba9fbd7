//! Line domain model.
//!
//! # Responsibility
//! - Define the stored line record and its insert shape.
//! - Provide the only mutation a stored line supports.
//!
//! # Invariants
//! - `up_station_id`, `down_station_id` and `distance` are fixed at creation.
//! - Only `name` and `color` change after creation.

use super::station::StationId;
use serde::{Deserialize, Serialize};

/// Store-assigned line identifier.
pub type LineId = i64;

/// Stored line record linking two stations with a distance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub id: LineId,
    pub name: String,
    pub color: String,
    pub up_station_id: StationId,
    pub down_station_id: StationId,
    pub distance: i64,
}

/// Insert shape for a line before the store assigns its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLine {
    pub name: String,
    pub color: String,
    pub up_station_id: StationId,
    pub down_station_id: StationId,
    pub distance: i64,
}

impl NewLine {
    /// Attaches the store-assigned id.
    pub fn into_line(self, id: LineId) -> Line {
        Line {
            id,
            name: self.name,
            color: self.color,
            up_station_id: self.up_station_id,
            down_station_id: self.down_station_id,
            distance: self.distance,
        }
    }
}

impl Line {
    /// Replaces the mutable labels; station references and distance stay.
    pub fn relabel(&mut self, name: impl Into<String>, color: impl Into<String>) {
        self.name = name.into();
        self.color = color.into();
    }
}
