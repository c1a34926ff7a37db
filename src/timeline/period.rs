//! Inclusive calendar periods.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, Result};

/// An inclusive range of calendar days.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use u_fuel_ledger::timeline::Period;
///
/// let start = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
/// let period = Period::month_of(start);
/// assert_eq!(period.end(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// assert_eq!(period.num_days(), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PeriodBounds")]
pub struct Period {
    start: NaiveDate,
    end: NaiveDate,
}

/// Unchecked wire form of a [`Period`].
#[derive(Deserialize)]
struct PeriodBounds {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<PeriodBounds> for Period {
    type Error = LedgerError;

    fn try_from(bounds: PeriodBounds) -> Result<Self> {
        Self::new(bounds.start, bounds.end)
    }
}

impl Period {
    /// Creates a period; fails if `end` precedes `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(LedgerError::invalid(
                "period",
                format!("end {end} precedes start {start}"),
            ));
        }
        Ok(Self { start, end })
    }

    /// From `date` through the last day of its month.
    pub fn month_of(date: NaiveDate) -> Self {
        let end = date
            .with_day(1)
            .and_then(|first| first.checked_add_months(Months::new(1)))
            .and_then(|next| next.pred_opt())
            .unwrap_or(date);
        Self { start: date, end }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days, both ends included.
    pub fn num_days(&self) -> usize {
        self.days().count()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Every day of the period, ascending.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn test_month_of_first_day() {
        let p = Period::month_of(date(2025, 5, 1));
        assert_eq!(p.start(), date(2025, 5, 1));
        assert_eq!(p.end(), date(2025, 5, 31));
        assert_eq!(p.num_days(), 31);
    }

    #[test]
    fn test_month_of_december() {
        let p = Period::month_of(date(2024, 12, 15));
        assert_eq!(p.end(), date(2024, 12, 31));
        assert_eq!(p.num_days(), 17);
    }

    #[test]
    fn test_month_of_last_day() {
        let p = Period::month_of(date(2025, 4, 30));
        assert_eq!(p.num_days(), 1);
    }

    #[test]
    fn test_new_rejects_reversed() {
        assert!(Period::new(date(2025, 5, 2), date(2025, 5, 1)).is_err());
        let p = Period::new(date(2025, 5, 1), date(2025, 5, 1)).expect("single day");
        assert_eq!(p.days().collect::<Vec<_>>(), vec![date(2025, 5, 1)]);
    }

    #[test]
    fn test_deserialize_checks_order() {
        let ok: Period = serde_json::from_str(r#"{"start": "2025-05-01", "end": "2025-05-31"}"#)
            .expect("valid period");
        assert_eq!(ok.num_days(), 31);

        let reversed =
            serde_json::from_str::<Period>(r#"{"start": "2025-05-31", "end": "2025-05-01"}"#);
        assert!(reversed.is_err());
    }

    #[test]
    fn test_contains() {
        let p = Period::month_of(date(2025, 5, 10));
        assert!(p.contains(date(2025, 5, 10)));
        assert!(p.contains(date(2025, 5, 31)));
        assert!(!p.contains(date(2025, 5, 9)));
        assert!(!p.contains(date(2025, 6, 1)));
    }
}
