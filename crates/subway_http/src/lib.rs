//! HTTP surface for the subway line catalog.
//!
//! # Responsibility
//! - Map the line and station routes onto core services.
//! - Translate service errors into status codes and JSON error bodies.
//!
//! # Invariants
//! - Every request runs its service call inside one database transaction.
//! - Handlers never panic on missing records; they answer 404.

mod error;
mod handlers;
mod router;
mod state;

pub use error::{ApiError, ErrorBody};
pub use router::{build_router, serve};
pub use state::AppState;
