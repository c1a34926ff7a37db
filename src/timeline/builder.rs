//! Chronological skeleton construction.
//!
//! Assigns one candidate per day by cycling through the candidate list and
//! merges the refuel calendar in by date. No fuel arithmetic happens here;
//! the walker decides which assigned trips are actually driven.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{DayBucket, RefuelCalendar, RouteCandidate};

use super::Period;

/// A date-sorted sequence of day buckets, at most one per date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    buckets: Vec<DayBucket>,
}

impl Timeline {
    /// Builds a timeline from buckets, sorting them by date and merging
    /// buckets that share a date (the later candidate wins, refuels add up).
    pub fn from_buckets(buckets: impl IntoIterator<Item = DayBucket>) -> Self {
        let mut by_date: BTreeMap<NaiveDate, DayBucket> = BTreeMap::new();
        for bucket in buckets {
            let slot = by_date
                .entry(bucket.date)
                .or_insert_with(|| DayBucket::new(bucket.date));
            if bucket.candidate.is_some() {
                slot.candidate = bucket.candidate;
            }
            if let Some(amount) = bucket.refuel {
                slot.refuel = Some(slot.refuel.unwrap_or(0.0) + amount);
            }
        }
        Self {
            buckets: by_date.into_values().collect(),
        }
    }

    pub fn buckets(&self) -> &[DayBucket] {
        &self.buckets
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of days carrying a candidate trip.
    pub fn num_assigned(&self) -> usize {
        self.buckets.iter().filter(|b| b.candidate.is_some()).count()
    }
}

/// Builds the timeline for `period`, assigning candidates cyclically from
/// the start of the list.
///
/// Refuel dates outside the period get their own bucket without a trip, so
/// every recorded refuel enters the ledger.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use u_fuel_ledger::models::{RefuelCalendar, RefuelEvent, RouteCandidate};
/// use u_fuel_ledger::timeline::{build_timeline, Period};
///
/// let candidates = vec![
///     RouteCandidate::new(1, "a", 10.0, 7.0).unwrap(),
///     RouteCandidate::new(2, "b", 20.0, 7.0).unwrap(),
/// ];
/// let start = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 5, 3).unwrap();
/// let calendar = RefuelCalendar::new()
///     .with(end, RefuelEvent::new(15.0, "Shell"))
///     .unwrap();
///
/// let timeline = build_timeline(&candidates, Period::new(start, end).unwrap(), &calendar);
/// let ids: Vec<_> = timeline
///     .buckets()
///     .iter()
///     .map(|b| b.candidate.as_ref().map(|c| c.id()))
///     .collect();
/// assert_eq!(ids, vec![Some(1), Some(2), Some(1)]);
/// assert_eq!(timeline.buckets()[2].refuel, Some(15.0));
/// ```
pub fn build_timeline(
    candidates: &[RouteCandidate],
    period: Period,
    calendar: &RefuelCalendar,
) -> Timeline {
    build_timeline_rotated(candidates, period, calendar, 0)
}

/// Like [`build_timeline`], but starts the cyclic assignment at `offset`.
pub fn build_timeline_rotated(
    candidates: &[RouteCandidate],
    period: Period,
    calendar: &RefuelCalendar,
    offset: usize,
) -> Timeline {
    let assigned = period.days().enumerate().map(|(day, date)| DayBucket {
        date,
        candidate: pick(candidates, day + offset).cloned(),
        refuel: None,
    });
    let refuels = calendar.dates().map(|date| {
        if !period.contains(date) {
            log::debug!(
                "refuel on {date} outside {}..{} gets its own day",
                period.start(),
                period.end()
            );
        }
        DayBucket {
            date,
            candidate: None,
            refuel: Some(calendar.total_on(date)),
        }
    });
    Timeline::from_buckets(assigned.chain(refuels))
}

fn pick(candidates: &[RouteCandidate], index: usize) -> Option<&RouteCandidate> {
    if candidates.is_empty() {
        None
    } else {
        candidates.get(index % candidates.len())
    }
}
