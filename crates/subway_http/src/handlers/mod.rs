//! Route handlers grouped by resource.

pub(crate) mod health;
pub(crate) mod lines;
pub(crate) mod stations;
