//! Tank state.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The fuel level on a given date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use u_fuel_ledger::models::TankState;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// assert!(TankState::new(date, 50.0).is_within(80.0));
/// assert!(!TankState::new(date, -1.0).is_within(80.0));
/// assert!(!TankState::new(date, 80.0005).is_within(80.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TankState {
    pub date: NaiveDate,
    /// Liters in the tank.
    pub level: f64,
}

impl TankState {
    pub fn new(date: NaiveDate, level: f64) -> Self {
        Self { date, level }
    }

    /// Returns `true` if `0 <= level <= capacity`.
    pub fn is_within(&self, capacity: f64) -> bool {
        self.level.is_finite() && self.level >= 0.0 && self.level <= capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date")
    }

    #[test]
    fn test_bounds_inclusive() {
        assert!(TankState::new(date(), 0.0).is_within(80.0));
        assert!(TankState::new(date(), 80.0).is_within(80.0));
    }

    #[test]
    fn test_no_slack_past_bounds() {
        assert!(!TankState::new(date(), -1e-12).is_within(80.0));
        assert!(!TankState::new(date(), -0.0005).is_within(80.0));
        assert!(!TankState::new(date(), 80.0005).is_within(80.0));
    }

    #[test]
    fn test_non_finite_invalid() {
        assert!(!TankState::new(date(), f64::NAN).is_within(80.0));
        assert!(!TankState::new(date(), f64::INFINITY).is_within(80.0));
    }
}
