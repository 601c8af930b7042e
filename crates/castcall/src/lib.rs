//! Casting marketplace core: application pipelines for casting calls and
//! jobs, artist/job match scoring, and per-user dashboard aggregation.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
