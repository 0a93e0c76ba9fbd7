//! Catalog use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Own the request/response shapes exchanged with outer layers.
//!
//! # Invariants
//! - Services stay storage-agnostic; transaction scope is decided by the
//!   caller that builds the repositories.

pub mod line_service;
pub mod station_service;
