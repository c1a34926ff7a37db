//! Month reconstruction facade.

use rand::Rng;

use crate::config::EngineConfig;
use crate::error::{LedgerError, Result};
use crate::evaluation::LedgerVerifier;
use crate::models::{RawRoute, RouteCandidate};
use crate::normalize::normalize;
use crate::synthesis::{Segment, SegmentSynthesizer};
use crate::timeline::{build_timeline_rotated, Period};
use crate::walker::FuelWalker;

use super::{Reconstruction, ReconstructionRequest};

/// Runs normalization, timeline construction, walking and verification for
/// one calendar month.
///
/// The engine holds only its configuration; every call is independent and
/// may run on its own thread.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use u_fuel_ledger::config::EngineConfig;
/// use u_fuel_ledger::engine::{LedgerEngine, ReconstructionRequest};
/// use u_fuel_ledger::models::RawRoute;
///
/// let engine = LedgerEngine::new(EngineConfig::default()).unwrap();
/// let start = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
/// let request = ReconstructionRequest::new(
///     40.0,
///     19.0,
///     start,
///     vec![RawRoute::new("Office", "100 km")],
/// );
///
/// let result = engine.reconstruct(&request).unwrap();
/// assert_eq!(result.stats.trip_count, 3);
/// assert!((result.stats.final_level - 19.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct LedgerEngine {
    config: EngineConfig,
}

impl LedgerEngine {
    /// Creates an engine after validating `config`.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Reconstructs the month starting at `request.start_date`, assigning
    /// candidates in input order.
    ///
    /// # Errors
    ///
    /// [`LedgerError::EmptyCandidatePool`] if no candidate survives
    /// normalization, [`LedgerError::NoSolution`] if the balance cannot be
    /// matched, and the fatal invariant/consistency errors of the walker
    /// and verifier.
    pub fn reconstruct(&self, request: &ReconstructionRequest) -> Result<Reconstruction> {
        let candidates = self.candidates_for(request)?;
        self.run(request, &candidates, 0)
    }

    /// Like [`reconstruct`](Self::reconstruct), but after a
    /// [`LedgerError::NoSolution`] retries with the candidate assignment
    /// rotated by one, up to `config.max_rotations` times.
    ///
    /// Any other error aborts immediately.
    pub fn reconstruct_with_retries(
        &self,
        request: &ReconstructionRequest,
    ) -> Result<Reconstruction> {
        let candidates = self.candidates_for(request)?;
        let rotations = self.config.max_rotations.min(candidates.len() - 1);

        let mut last_err = None;
        for rotation in 0..=rotations {
            match self.run(request, &candidates, rotation) {
                Ok(found) => return Ok(found),
                Err(err) if err.is_recoverable() => {
                    log::debug!("rotation {rotation} failed: {err}");
                    last_err = Some(err);
                }
                Err(err) => return Err(err),
            }
        }
        Err(last_err.unwrap_or(LedgerError::EmptyCandidatePool))
    }

    /// Normalizes `raw` with the configured rate and synthesizes a segment
    /// approximating `target_km`.
    pub fn synthesize_segment<R: Rng>(
        &self,
        target_km: f64,
        raw: &[RawRoute],
        max_count: usize,
        rng: &mut R,
    ) -> Result<Segment> {
        let candidates = normalize(raw, self.config.consumption_rate);
        SegmentSynthesizer::from_config(&self.config).synthesize(
            target_km,
            &candidates,
            max_count,
            rng,
        )
    }

    fn candidates_for(&self, request: &ReconstructionRequest) -> Result<Vec<RouteCandidate>> {
        let rate = request
            .consumption_rate
            .unwrap_or(self.config.consumption_rate);
        if !rate.is_finite() || rate <= 0.0 {
            return Err(LedgerError::invalid(
                "consumption rate",
                format!("{rate} L/100 km must be positive"),
            ));
        }
        let candidates = normalize(&request.candidates, rate);
        if candidates.is_empty() {
            return Err(LedgerError::EmptyCandidatePool);
        }
        Ok(candidates)
    }

    fn run(
        &self,
        request: &ReconstructionRequest,
        candidates: &[RouteCandidate],
        rotation: usize,
    ) -> Result<Reconstruction> {
        let period = Period::month_of(request.start_date);
        log::info!(
            "reconstructing {}..{}: {:.3} L -> {:.3} L, {} candidates, rotation {rotation}",
            period.start(),
            period.end(),
            request.initial_tank,
            request.target_tank,
            candidates.len()
        );

        let timeline = build_timeline_rotated(candidates, period, &request.refuels, rotation);
        log::debug!(
            "timeline: {} days, {} with an assigned trip",
            timeline.len(),
            timeline.num_assigned()
        );
        let solution = FuelWalker::new(&self.config).walk(
            &timeline,
            request.initial_tank,
            request.target_tank,
        )?;
        let stats = LedgerVerifier::new(&self.config).summarize(
            &solution,
            &request.refuels,
            request.odometer_start,
        )?;

        log::info!(
            "reconstructed {} trips, {:.1} km, {:.3} L consumed, {:.3} L refueled, final {:.3} L",
            stats.trip_count,
            stats.total_distance,
            stats.total_consumed,
            stats.total_refueled,
            stats.final_level
        );

        Ok(Reconstruction {
            solution,
            stats,
            rotation,
        })
    }
}
