//! # u-fuel-ledger
//!
//! Reconstructs a plausible monthly vehicle logbook: given a starting and a
//! required ending fuel level, a pool of candidate routes and a calendar of
//! refuels, it assigns trips to days so that the running tank level stays
//! within capacity and the month closes exactly on the target.
//!
//! ## Modules
//!
//! - [`models`]: Domain types (raw and normalized routes, refuels, timeline entries, Solution, Stats)
//! - [`normalize`]: Distance parsing and fuel-cost derivation
//! - [`synthesis`]: Randomized multi-route segments approximating a target distance
//! - [`timeline`]: Reporting period and per-day trip/refuel skeleton
//! - [`walker`]: Greedy forward walk that balances the tank
//! - [`evaluation`]: Independent verification and summary statistics
//! - [`engine`]: One-call month reconstruction
//! - [`config`]: Engine configuration and defaults

pub mod config;
pub mod engine;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod normalize;
pub mod synthesis;
pub mod timeline;
pub mod walker;

pub use error::{LedgerError, Result};
