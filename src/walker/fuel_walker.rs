//! Greedy fuel-balance walker.
//!
//! Executes a timeline day by day with a single running tank level:
//! refuels are added first, then the day's trip is driven only if it keeps
//! the level at or above the target. Skipped trips leave no entry. The level
//! never leaves `[0, capacity]`, with no tolerance. After the last day the
//! level must equal the target within epsilon; otherwise the walk fails as a
//! whole. There is no backtracking.
//!
//! # Complexity
//!
//! O(d) where d = number of timeline days.

use crate::config::{EngineConfig, OverflowPolicy};
use crate::error::{LedgerError, Result};
use crate::models::{DriveEntry, Solution, TankState, TimelineEntry};
use crate::timeline::Timeline;

/// Walks a timeline forward and produces a balanced [`Solution`].
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use u_fuel_ledger::config::EngineConfig;
/// use u_fuel_ledger::models::{RefuelCalendar, RouteCandidate};
/// use u_fuel_ledger::timeline::{build_timeline, Period};
/// use u_fuel_ledger::walker::FuelWalker;
///
/// let candidates = vec![RouteCandidate::new(1, "Office", 100.0, 7.0).unwrap()];
/// let start = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 5, 10).unwrap();
/// let timeline = build_timeline(
///     &candidates,
///     Period::new(start, end).unwrap(),
///     &RefuelCalendar::new(),
/// );
///
/// let walker = FuelWalker::new(&EngineConfig::default());
/// let solution = walker.walk(&timeline, 40.0, 19.0).unwrap();
/// assert_eq!(solution.num_drives(), 3);
/// assert!((solution.final_level() - 19.0).abs() < 1e-9);
///
/// assert!(walker.walk(&timeline, 40.0, 20.0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct FuelWalker {
    capacity: f64,
    epsilon: f64,
    overflow: OverflowPolicy,
}

impl FuelWalker {
    /// Creates a walker using the configured capacity, epsilon and overflow
    /// policy.
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            capacity: config.tank_capacity,
            epsilon: config.epsilon,
            overflow: config.overflow_policy,
        }
    }

    /// Walks `timeline` from `initial` liters towards `target` liters.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InvalidInput`] if a level is non-finite or outside
    ///   `[0, capacity]`.
    /// - [`LedgerError::NoSolution`] if the final level misses the target.
    /// - [`LedgerError::InvariantViolation`] if the tank would leave its
    ///   bounds, e.g. a refuel overfilling it under [`OverflowPolicy::Reject`].
    pub fn walk(&self, timeline: &Timeline, initial: f64, target: f64) -> Result<Solution> {
        self.check_level("initial tank", initial)?;
        self.check_level("target tank", target)?;

        let mut level = initial;
        let mut entries = Vec::with_capacity(timeline.len());

        for bucket in timeline.buckets() {
            if let Some(amount) = bucket.refuel {
                let (applied, spilled) = self.fill(level, amount);
                if spilled > 0.0 && self.overflow == OverflowPolicy::Reject {
                    return Err(LedgerError::InvariantViolation {
                        date: bucket.date,
                        level: level + amount,
                        capacity: self.capacity,
                    });
                }
                level += applied;
                entries.push(TimelineEntry::Refuel {
                    date: bucket.date,
                    amount: applied,
                    spilled,
                });
            }

            if let Some(candidate) = &bucket.candidate {
                let cost = candidate.fuel_cost();
                if level - cost >= target {
                    let after = level - cost;
                    log::debug!(
                        "{}: drive {:?} {:.1} km, {:.3} -> {:.3} L",
                        bucket.date,
                        candidate.name(),
                        candidate.distance(),
                        level,
                        after
                    );
                    entries.push(TimelineEntry::Drive(DriveEntry {
                        date: bucket.date,
                        candidate: candidate.clone(),
                        fuel_before: level,
                        fuel_consumed: cost,
                        fuel_after: after,
                    }));
                    level = after;
                } else {
                    log::debug!(
                        "{}: skip {:?}, {:.3} L would drop below target",
                        bucket.date,
                        candidate.name(),
                        cost
                    );
                }
            }

            let state = TankState::new(bucket.date, level);
            if !state.is_within(self.capacity) {
                return Err(LedgerError::InvariantViolation {
                    date: state.date,
                    level: state.level,
                    capacity: self.capacity,
                });
            }
        }

        if (level - target).abs() > self.epsilon {
            log::warn!("could not match fuel balance: final {level:.3} L, target {target:.3} L");
            return Err(LedgerError::NoSolution {
                final_level: level,
                target,
            });
        }

        Ok(Solution::new(initial, target, level, entries))
    }

    /// Splits a refuel into the liters that fit and the liters that spill.
    fn fill(&self, level: f64, amount: f64) -> (f64, f64) {
        if level + amount <= self.capacity {
            return (amount, 0.0);
        }
        let mut room = (self.capacity - level).max(0.0);
        // The subtraction may round up, leaving level + room one ulp past capacity.
        if level + room > self.capacity {
            room = (room - f64::EPSILON * self.capacity).max(0.0);
        }
        (room, amount - room)
    }

    fn check_level(&self, field: &'static str, level: f64) -> Result<()> {
        if !level.is_finite() || level < 0.0 || level > self.capacity {
            return Err(LedgerError::invalid(
                field,
                format!("{level} L outside [0, {}] L", self.capacity),
            ));
        }
        Ok(())
    }
}
