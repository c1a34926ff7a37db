//! Timeline construction: the per-day skeleton the walker executes.

mod builder;
mod period;

pub use builder::{build_timeline, build_timeline_rotated, Timeline};
pub use period::Period;
