//! Timeline types: the per-day skeleton and the walked ledger entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::RouteCandidate;

/// One calendar day of a timeline before any fuel arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    /// Trip assigned to this day, if any.
    pub candidate: Option<RouteCandidate>,
    /// Summed refuel amount for this day, if any.
    pub refuel: Option<f64>,
}

impl DayBucket {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            candidate: None,
            refuel: None,
        }
    }
}

/// A trip accepted by the walker, with the tank levels around it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriveEntry {
    pub date: NaiveDate,
    pub candidate: RouteCandidate,
    pub fuel_before: f64,
    pub fuel_consumed: f64,
    pub fuel_after: f64,
}

/// One line of the walked fuel ledger.
///
/// Entries are ordered by date, with a day's refuel before its drive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimelineEntry {
    Refuel {
        date: NaiveDate,
        /// Liters that entered the tank.
        amount: f64,
        /// Liters that did not fit (only under the clipping policy).
        spilled: f64,
    },
    Drive(DriveEntry),
}

impl TimelineEntry {
    /// Date of this entry.
    pub fn date(&self) -> NaiveDate {
        match self {
            Self::Refuel { date, .. } => *date,
            Self::Drive(drive) => drive.date,
        }
    }

    /// Signed change this entry applies to the tank level.
    pub fn delta(&self) -> f64 {
        match self {
            Self::Refuel { amount, .. } => *amount,
            Self::Drive(drive) => -drive.fuel_consumed,
        }
    }

    /// Returns the drive details, if this is a drive.
    pub fn as_drive(&self) -> Option<&DriveEntry> {
        match self {
            Self::Drive(drive) => Some(drive),
            Self::Refuel { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, d).expect("valid date")
    }

    #[test]
    fn test_entry_delta() {
        let refuel = TimelineEntry::Refuel {
            date: day(1),
            amount: 20.0,
            spilled: 0.0,
        };
        assert_eq!(refuel.delta(), 20.0);
        assert!(refuel.as_drive().is_none());

        let candidate = RouteCandidate::new(1, "r", 100.0, 7.0).expect("valid");
        let drive = TimelineEntry::Drive(DriveEntry {
            date: day(2),
            candidate,
            fuel_before: 30.0,
            fuel_consumed: 7.0,
            fuel_after: 23.0,
        });
        assert_eq!(drive.delta(), -7.0);
        assert_eq!(drive.date(), day(2));
        assert!(drive.as_drive().is_some());
    }

    #[test]
    fn test_entry_serializes_tagged() {
        let refuel = TimelineEntry::Refuel {
            date: day(3),
            amount: 12.5,
            spilled: 0.0,
        };
        let json = serde_json::to_value(&refuel).expect("serializable");
        assert_eq!(json["kind"], "refuel");
        assert_eq!(json["date"], "2025-05-03");
    }

    #[test]
    fn test_bucket_new_empty() {
        let b = DayBucket::new(day(4));
        assert!(b.candidate.is_none());
        assert!(b.refuel.is_none());
    }
}
