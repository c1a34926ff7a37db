//! Ledger verifier that re-checks a solution and computes its statistics.

use chrono::NaiveDate;

use crate::config::EngineConfig;
use crate::error::{LedgerError, Result};
use crate::models::{Odometer, RefuelCalendar, Solution, Stats, TankState, TimelineEntry};

/// Replays a [`Solution`] independently of the walker, checking bounds,
/// ordering, the balance identity and the target, and aggregates the
/// figures shown in the logbook report.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use u_fuel_ledger::config::EngineConfig;
/// use u_fuel_ledger::evaluation::LedgerVerifier;
/// use u_fuel_ledger::models::{RefuelCalendar, RefuelEvent, RouteCandidate};
/// use u_fuel_ledger::timeline::{build_timeline, Period};
/// use u_fuel_ledger::walker::FuelWalker;
///
/// let config = EngineConfig::default();
/// let start = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 5, 5).unwrap();
/// let calendar = RefuelCalendar::new()
///     .with(start, RefuelEvent::new(10.0, "Shell"))
///     .unwrap();
/// let candidates = vec![RouteCandidate::new(1, "Office", 100.0, 7.0).unwrap()];
/// let timeline = build_timeline(&candidates, Period::new(start, end).unwrap(), &calendar);
///
/// let solution = FuelWalker::new(&config).walk(&timeline, 25.0, 21.0).unwrap();
/// let stats = LedgerVerifier::new(&config)
///     .summarize(&solution, &calendar, Some(94_439))
///     .unwrap();
/// assert_eq!(stats.trip_count, 2);
/// assert_eq!(stats.total_refueled, 10.0);
/// assert_eq!(stats.odometer.unwrap().end, 94_639);
/// ```
#[derive(Debug, Clone)]
pub struct LedgerVerifier {
    capacity: f64,
    epsilon: f64,
}

impl LedgerVerifier {
    /// Creates a verifier using the configured capacity and epsilon.
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            capacity: config.tank_capacity,
            epsilon: config.epsilon,
        }
    }

    /// Re-checks every invariant of an accepted solution.
    ///
    /// # Errors
    ///
    /// [`LedgerError::InvariantViolation`] if a replayed level leaves
    /// `[0, capacity]`; [`LedgerError::InconsistentLedger`] if any recorded
    /// figure disagrees with the replay.
    pub fn verify(&self, solution: &Solution) -> Result<()> {
        let mut level = solution.initial_level();
        let mut last_date: Option<NaiveDate> = None;
        let mut last_drive: Option<NaiveDate> = None;

        for entry in solution.entries() {
            let date = entry.date();
            if last_date.is_some_and(|prev| date < prev) {
                return Err(inconsistent("chronological order", 0.0, 1.0));
            }
            last_date = Some(date);

            match entry {
                TimelineEntry::Refuel { amount, spilled, .. } => {
                    if last_drive == Some(date) {
                        return Err(inconsistent("refuel before drive", 0.0, 1.0));
                    }
                    if *amount < 0.0 || *spilled < 0.0 {
                        return Err(inconsistent("refuel amount", 0.0, amount.min(*spilled)));
                    }
                }
                TimelineEntry::Drive(drive) => {
                    if last_drive == Some(date) {
                        return Err(inconsistent("one drive per day", 1.0, 2.0));
                    }
                    last_drive = Some(date);
                    if drive.fuel_before != level {
                        return Err(inconsistent("fuel before", level, drive.fuel_before));
                    }
                    if drive.fuel_consumed != drive.candidate.fuel_cost() {
                        return Err(inconsistent(
                            "fuel consumed",
                            drive.candidate.fuel_cost(),
                            drive.fuel_consumed,
                        ));
                    }
                    if drive.fuel_after != drive.fuel_before - drive.fuel_consumed {
                        return Err(inconsistent(
                            "fuel after",
                            drive.fuel_before - drive.fuel_consumed,
                            drive.fuel_after,
                        ));
                    }
                }
            }

            level += entry.delta();
            let state = TankState::new(date, level);
            if !state.is_within(self.capacity) {
                return Err(LedgerError::InvariantViolation {
                    date,
                    level,
                    capacity: self.capacity,
                });
            }
        }

        if level != solution.final_level() {
            return Err(inconsistent("replayed final level", level, solution.final_level()));
        }

        let identity =
            solution.initial_level() + solution.total_refueled() - solution.total_consumed();
        if (identity - solution.final_level()).abs() > self.epsilon {
            return Err(inconsistent("balance identity", identity, solution.final_level()));
        }

        if (solution.final_level() - solution.target_level()).abs() > self.epsilon {
            return Err(inconsistent(
                "target level",
                solution.target_level(),
                solution.final_level(),
            ));
        }

        Ok(())
    }

    /// Verifies the solution and aggregates its statistics.
    ///
    /// The refueled total comes from `calendar` and must agree with what
    /// the walk applied (including any spilled liters). When
    /// `odometer_start` is given, the end reading adds the whole kilometers
    /// driven; a reading that would overflow is rejected as invalid input.
    pub fn summarize(
        &self,
        solution: &Solution,
        calendar: &RefuelCalendar,
        odometer_start: Option<u64>,
    ) -> Result<Stats> {
        self.verify(solution)?;

        let total_refueled = calendar.total();
        let walked = solution.total_refueled() + solution.total_spilled();
        if (total_refueled - walked).abs() > self.epsilon {
            return Err(inconsistent("total refueled", total_refueled, walked));
        }

        let total_distance = solution.total_distance();
        let total_consumed = solution.total_consumed();
        let average_consumption = if total_distance > 0.0 {
            total_consumed * 100.0 / total_distance
        } else {
            0.0
        };
        let odometer = odometer_start
            .map(|start| {
                let driven = total_distance.floor() as u64;
                start
                    .checked_add(driven)
                    .map(|end| Odometer { start, end })
                    .ok_or_else(|| {
                        LedgerError::invalid(
                            "odometer start",
                            format!("{start} km plus {driven} km driven overflows"),
                        )
                    })
            })
            .transpose()?;

        Ok(Stats {
            total_distance,
            total_consumed,
            total_refueled,
            final_level: solution.final_level(),
            trip_count: solution.num_drives(),
            average_consumption,
            odometer,
        })
    }
}

fn inconsistent(context: &'static str, expected: f64, actual: f64) -> LedgerError {
    LedgerError::InconsistentLedger {
        context,
        expected,
        actual,
    }
}
