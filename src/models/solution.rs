//! Solution and statistics types.

use serde::{Deserialize, Serialize};

use super::{DriveEntry, TimelineEntry};

/// A walked fuel ledger whose final level matched the target.
///
/// Holds every entry the walker applied (refuels and drives) so that the
/// balance can be replayed; [`drives`](Self::drives) yields the trips for
/// the logbook report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    initial_level: f64,
    target_level: f64,
    final_level: f64,
    entries: Vec<TimelineEntry>,
}

impl Solution {
    pub(crate) fn new(
        initial_level: f64,
        target_level: f64,
        final_level: f64,
        entries: Vec<TimelineEntry>,
    ) -> Self {
        Self {
            initial_level,
            target_level,
            final_level,
            entries,
        }
    }

    /// Tank level before the first entry.
    pub fn initial_level(&self) -> f64 {
        self.initial_level
    }

    /// Requested final level.
    pub fn target_level(&self) -> f64 {
        self.target_level
    }

    /// Level after the last entry, as computed by the walker.
    pub fn final_level(&self) -> f64 {
        self.final_level
    }

    /// All ledger entries in application order.
    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    /// The accepted trips, in date order.
    pub fn drives(&self) -> impl Iterator<Item = &DriveEntry> {
        self.entries.iter().filter_map(TimelineEntry::as_drive)
    }

    /// Number of accepted trips.
    pub fn num_drives(&self) -> usize {
        self.drives().count()
    }

    /// Total distance of the accepted trips, in kilometers.
    pub fn total_distance(&self) -> f64 {
        self.drives().map(|d| d.candidate.distance()).sum()
    }

    /// Total fuel consumed by the accepted trips.
    pub fn total_consumed(&self) -> f64 {
        self.drives().map(|d| d.fuel_consumed).sum()
    }

    /// Total fuel that entered the tank.
    pub fn total_refueled(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| match e {
                TimelineEntry::Refuel { amount, .. } => *amount,
                TimelineEntry::Drive(_) => 0.0,
            })
            .sum()
    }

    /// Total fuel that did not fit in the tank.
    pub fn total_spilled(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| match e {
                TimelineEntry::Refuel { spilled, .. } => *spilled,
                TimelineEntry::Drive(_) => 0.0,
            })
            .sum()
    }
}

/// Odometer readings over the reconstructed period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Odometer {
    pub start: u64,
    pub end: u64,
}

/// Aggregate figures for a solution, ready for display or export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Kilometers driven.
    pub total_distance: f64,
    /// Liters consumed.
    pub total_consumed: f64,
    /// Liters refueled, taken from the refuel calendar.
    pub total_refueled: f64,
    pub final_level: f64,
    pub trip_count: usize,
    /// Liters per 100 km over the period; zero if nothing was driven.
    pub average_consumption: f64,
    pub odometer: Option<Odometer>,
}
