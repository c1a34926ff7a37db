//! Refuel events grouped by calendar date.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, Result};

/// A single refueling at a station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefuelEvent {
    /// Liters added, always positive.
    pub amount: f64,
    #[serde(default)]
    pub location: String,
}

impl RefuelEvent {
    pub fn new(amount: f64, location: impl Into<String>) -> Self {
        Self {
            amount,
            location: location.into(),
        }
    }
}

/// Refuel events keyed by date, in chronological order.
///
/// Several refuels on one date are kept individually and summed by
/// [`total_on`](Self::total_on).
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use u_fuel_ledger::models::{RefuelCalendar, RefuelEvent};
///
/// let day = NaiveDate::from_ymd_opt(2025, 5, 5).unwrap();
/// let mut calendar = RefuelCalendar::new();
/// calendar.add(day, RefuelEvent::new(20.0, "Shell")).unwrap();
/// calendar.add(day, RefuelEvent::new(5.5, "OMV")).unwrap();
/// assert_eq!(calendar.total_on(day), 25.5);
/// assert!(calendar.add(day, RefuelEvent::new(0.0, "nowhere")).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<NaiveDate, Vec<RefuelEvent>>",
    into = "BTreeMap<NaiveDate, Vec<RefuelEvent>>"
)]
pub struct RefuelCalendar {
    events: BTreeMap<NaiveDate, Vec<RefuelEvent>>,
}

impl RefuelCalendar {
    /// Creates an empty calendar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a refuel on `date`.
    ///
    /// Fails if the amount is not a positive finite number.
    pub fn add(&mut self, date: NaiveDate, event: RefuelEvent) -> Result<()> {
        if !event.amount.is_finite() || event.amount <= 0.0 {
            return Err(LedgerError::invalid(
                "refuel amount",
                format!("{} L on {date} must be positive", event.amount),
            ));
        }
        self.events.entry(date).or_default().push(event);
        Ok(())
    }

    /// Builder-style variant of [`add`](Self::add).
    pub fn with(mut self, date: NaiveDate, event: RefuelEvent) -> Result<Self> {
        self.add(date, event)?;
        Ok(self)
    }

    /// Summed amount refueled on `date`; zero if none.
    pub fn total_on(&self, date: NaiveDate) -> f64 {
        self.events
            .get(&date)
            .map_or(0.0, |events| events.iter().map(|e| e.amount).sum())
    }

    /// Summed amount over the whole calendar, accumulated date by date.
    pub fn total(&self) -> f64 {
        self.events.keys().map(|&d| self.total_on(d)).sum()
    }

    /// Dates with at least one refuel, ascending.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.events.keys().copied()
    }

    /// Events recorded on `date`.
    pub fn events_on(&self, date: NaiveDate) -> &[RefuelEvent] {
        self.events.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of individual refuel events.
    pub fn len(&self) -> usize {
        self.events.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl TryFrom<BTreeMap<NaiveDate, Vec<RefuelEvent>>> for RefuelCalendar {
    type Error = LedgerError;

    fn try_from(map: BTreeMap<NaiveDate, Vec<RefuelEvent>>) -> Result<Self> {
        let mut calendar = Self::new();
        for (date, events) in map {
            for event in events {
                calendar.add(date, event)?;
            }
        }
        Ok(calendar)
    }
}

impl From<RefuelCalendar> for BTreeMap<NaiveDate, Vec<RefuelEvent>> {
    fn from(calendar: RefuelCalendar) -> Self {
        calendar.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, d).expect("valid date")
    }

    #[test]
    fn test_empty() {
        let c = RefuelCalendar::new();
        assert!(c.is_empty());
        assert_eq!(c.len(), 0);
        assert_eq!(c.total(), 0.0);
        assert_eq!(c.total_on(day(1)), 0.0);
        assert!(c.events_on(day(1)).is_empty());
    }

    #[test]
    fn test_same_day_summed() {
        let c = RefuelCalendar::new()
            .with(day(5), RefuelEvent::new(20.0, "A"))
            .and_then(|c| c.with(day(5), RefuelEvent::new(10.0, "B")))
            .and_then(|c| c.with(day(2), RefuelEvent::new(7.5, "C")))
            .expect("valid amounts");
        assert_eq!(c.len(), 3);
        assert_eq!(c.total_on(day(5)), 30.0);
        assert_eq!(c.total(), 37.5);
        assert_eq!(c.dates().collect::<Vec<_>>(), vec![day(2), day(5)]);
        assert_eq!(c.events_on(day(5))[1].location, "B");
    }

    #[test]
    fn test_rejects_non_positive() {
        let mut c = RefuelCalendar::new();
        assert!(c.add(day(1), RefuelEvent::new(-3.0, "x")).is_err());
        assert!(c.add(day(1), RefuelEvent::new(f64::NAN, "x")).is_err());
        assert!(c.is_empty());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: RefuelCalendar = serde_json::from_str(
            r#"{"2025-05-05": [{"amount": 20.0, "location": "Shell"}, {"amount": 1.5}]}"#,
        )
        .expect("valid json");
        assert_eq!(ok.total_on(day(5)), 21.5);

        let json = serde_json::to_string(&ok).expect("serializable");
        assert!(json.starts_with(r#"{"2025-05-05":"#));

        let bad = serde_json::from_str::<RefuelCalendar>(r#"{"2025-05-05": [{"amount": 0.0}]}"#);
        assert!(bad.is_err());
    }
}
