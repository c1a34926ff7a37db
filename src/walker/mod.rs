//! Fuel-balance walking.
//!
//! - [`FuelWalker`]: single forward pass over a timeline, greedy trip
//!   acceptance, terminal balance check

mod fuel_walker;

pub use fuel_walker::FuelWalker;
