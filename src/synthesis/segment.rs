//! Randomized segment synthesis.
//!
//! Picks a small multiset of candidate routes whose summed distance lands
//! inside a deviation band around a target distance. This is an approximate
//! subset-sum: routes are drawn uniformly at random, the band widens on a
//! fixed schedule, and an oversized selection is discarded and restarted.
//!
//! # Complexity
//!
//! O(max_attempts), independent of the pool size.

use rand::Rng;

use crate::config::EngineConfig;
use crate::error::{LedgerError, Result};
use crate::models::RouteCandidate;

use super::DeviationSchedule;

/// How a synthesis run ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentOutcome {
    /// The total exceeded the band's lower bound at this deviation.
    Matched { deviation: f64 },
    /// The budget ran out with a selection still below the band.
    Partial,
    /// Nothing was ever accepted; the segment holds the zero-length sentinel.
    Sentinel,
}

/// A synthesized selection of routes.
#[derive(Debug, Clone)]
pub struct Segment {
    routes: Vec<RouteCandidate>,
    total_distance: f64,
    attempts: usize,
    outcome: SegmentOutcome,
}

impl Segment {
    /// The selected routes, in draw order.
    pub fn routes(&self) -> &[RouteCandidate] {
        &self.routes
    }

    /// Summed distance of the selection, in kilometers.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Attempts spent.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    pub fn outcome(&self) -> SegmentOutcome {
        self.outcome
    }

    /// Returns `true` if the total landed inside the band.
    pub fn is_match(&self) -> bool {
        matches!(self.outcome, SegmentOutcome::Matched { .. })
    }

    /// Returns `true` for the soft-failure placeholder.
    pub fn is_sentinel(&self) -> bool {
        self.outcome == SegmentOutcome::Sentinel
    }
}

/// Approximate subset-sum search over candidate distances.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_fuel_ledger::models::RouteCandidate;
/// use u_fuel_ledger::synthesis::SegmentSynthesizer;
///
/// let pool: Vec<_> = [10.0, 20.0, 35.0, 50.0, 70.0, 100.0]
///     .iter()
///     .enumerate()
///     .map(|(i, &km)| RouteCandidate::new(i + 1, format!("r{km}"), km, 7.0).unwrap())
///     .collect();
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let segment = SegmentSynthesizer::default()
///     .synthesize(100.0, &pool, 5, &mut rng)
///     .unwrap();
/// assert!(segment.is_match());
/// assert!(segment.total_distance() > 0.0 && segment.total_distance() <= 200.0);
/// ```
#[derive(Debug, Clone)]
pub struct SegmentSynthesizer {
    schedule: DeviationSchedule,
    max_attempts: usize,
}

impl SegmentSynthesizer {
    /// Creates a synthesizer with the default schedule and the given budget.
    pub fn new(max_attempts: usize) -> Self {
        Self {
            schedule: DeviationSchedule::default(),
            max_attempts,
        }
    }

    /// Creates a synthesizer using the configured attempt budget.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.max_attempts)
    }

    /// Replaces the deviation schedule.
    pub fn with_schedule(mut self, schedule: DeviationSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Draws routes until their summed distance exceeds the lower bound of
    /// the current band, or the budget is exhausted.
    ///
    /// A draw that would push the total above the upper bound is skipped.
    /// When the selection already holds `max_count` routes, it is discarded
    /// and the search restarts from empty.
    ///
    /// # Errors
    ///
    /// [`LedgerError::EmptyCandidatePool`] for an empty pool, and
    /// [`LedgerError::InvalidInput`] for a non-positive or non-finite target.
    pub fn synthesize<R: Rng>(
        &self,
        target: f64,
        candidates: &[RouteCandidate],
        max_count: usize,
        rng: &mut R,
    ) -> Result<Segment> {
        if candidates.is_empty() {
            return Err(LedgerError::EmptyCandidatePool);
        }
        if !target.is_finite() || target <= 0.0 {
            return Err(LedgerError::invalid(
                "target distance",
                format!("{target} km must be positive"),
            ));
        }

        let mut selected: Vec<&RouteCandidate> = Vec::new();
        let mut total = 0.0;
        let mut attempt = 0;
        let mut lower = target * (1.0 - self.schedule.deviation_at(1));

        while total <= lower && attempt < self.max_attempts {
            attempt += 1;
            let (lo, upper) = self.schedule.band(target, attempt);
            if lo < lower {
                log::debug!(
                    "widening band for {target:.1} km to ({lo:.1}, {upper:.1}] at attempt {attempt}"
                );
            }
            lower = lo;

            let pick = &candidates[rng.random_range(0..candidates.len())];

            if selected.len() >= max_count {
                selected.clear();
                total = 0.0;
                continue;
            }

            if total + pick.distance() <= upper {
                selected.push(pick);
                total += pick.distance();
            }
        }

        if selected.is_empty() {
            log::debug!("no route accepted for {target:.1} km after {attempt} attempts");
            return Ok(Segment {
                routes: vec![RouteCandidate::sentinel()],
                total_distance: 0.0,
                attempts: attempt,
                outcome: SegmentOutcome::Sentinel,
            });
        }

        let outcome = if total > lower {
            SegmentOutcome::Matched {
                deviation: self.schedule.deviation_at(attempt),
            }
        } else {
            SegmentOutcome::Partial
        };
        log::debug!(
            "segment for {target:.1} km: {} routes, {total:.1} km, {attempt} attempts ({outcome:?})",
            selected.len()
        );

        Ok(Segment {
            routes: selected.into_iter().cloned().collect(),
            total_distance: total,
            attempts: attempt,
            outcome,
        })
    }
}

impl Default for SegmentSynthesizer {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MAX_ATTEMPTS)
    }
}
