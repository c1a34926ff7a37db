//! Domain model types for fuel-ledger reconstruction.
//!
//! Provides normalized candidate routes and their loosely-typed source
//! records, refuel events grouped by date, the timeline skeleton and walked
//! ledger entries, tank state, and the final solution with its statistics.

mod candidate;
mod refuel;
mod solution;
mod tank;
mod timeline;

pub use candidate::{RawDistance, RawRoute, RouteCandidate};
pub use refuel::{RefuelCalendar, RefuelEvent};
pub use solution::{Odometer, Solution, Stats};
pub use tank::TankState;
pub use timeline::{DayBucket, DriveEntry, TimelineEntry};
