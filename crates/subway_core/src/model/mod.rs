//! Catalog domain model.
//!
//! # Responsibility
//! - Define the station and line records owned by their stores.
//!
//! # Invariants
//! - Ids are assigned by the store on insert and never change.
//! - A line references stations by id only; it never owns station data.

pub mod line;
pub mod station;
