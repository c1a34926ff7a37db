//! Segment synthesis: approximate a target distance with a few routes.
//!
//! - [`SegmentSynthesizer`]: randomized search with an adaptive band
//! - [`DeviationSchedule`]: the 5 % → 100 % widening schedule

mod deviation;
mod segment;

pub use deviation::{DeviationSchedule, INITIAL_DEVIATION};
pub use segment::{Segment, SegmentOutcome, SegmentSynthesizer};
