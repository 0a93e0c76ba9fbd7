//! Station domain model.

use serde::{Deserialize, Serialize};

/// Store-assigned station identifier.
pub type StationId = i64;

/// A transit stop identified by name.
///
/// Names are not unique; two stations may share one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub id: StationId,
    pub name: String,
}
