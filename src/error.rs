//! Error taxonomy for ledger reconstruction.
//!
//! Feasibility failures ([`LedgerError::NoSolution`]) are expected outcomes
//! that callers can retry with different inputs. Invariant and consistency
//! failures indicate a defect and must stop the computation.

use chrono::NaiveDate;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised by the reconstruction engine.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// No usable candidate routes remained after normalization.
    #[error("candidate pool is empty")]
    EmptyCandidatePool,

    /// A caller-supplied scalar or record is out of its domain.
    #[error("invalid {field}: {reason}")]
    InvalidInput {
        field: &'static str,
        reason: String,
    },

    /// The engine configuration failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A request could not be decoded.
    #[error("malformed request: {0}")]
    Json(#[from] serde_json::Error),

    /// The walk finished but the final level does not match the target.
    #[error("no solution: final level {final_level:.3} L, target {target:.3} L")]
    NoSolution { final_level: f64, target: f64 },

    /// The tank level left `[0, capacity]`.
    #[error("tank level {level:.3} L on {date} outside [0, {capacity:.3}] L")]
    InvariantViolation {
        date: NaiveDate,
        level: f64,
        capacity: f64,
    },

    /// An after-the-fact check disagrees with the walker's own result.
    #[error("inconsistent ledger ({context}): expected {expected:.6}, got {actual:.6}")]
    InconsistentLedger {
        context: &'static str,
        expected: f64,
        actual: f64,
    },
}

impl LedgerError {
    /// Returns `true` for failures the caller may retry with other inputs.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_fuel_ledger::LedgerError;
    ///
    /// let err = LedgerError::NoSolution { final_level: 33.5, target: 30.0 };
    /// assert!(err.is_recoverable());
    /// assert!(!LedgerError::EmptyCandidatePool.is_recoverable());
    /// ```
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::NoSolution { .. })
    }

    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_no_solution() {
        let err = LedgerError::NoSolution {
            final_level: 33.545,
            target: 30.0,
        };
        assert_eq!(
            err.to_string(),
            "no solution: final level 33.545 L, target 30.000 L"
        );
    }

    #[test]
    fn test_fatal_errors_not_recoverable() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 1).expect("valid date");
        let violation = LedgerError::InvariantViolation {
            date,
            level: 81.0,
            capacity: 80.0,
        };
        assert!(!violation.is_recoverable());
        assert!(violation.to_string().contains("2025-05-01"));

        let inconsistent = LedgerError::InconsistentLedger {
            context: "replay",
            expected: 1.0,
            actual: 2.0,
        };
        assert!(!inconsistent.is_recoverable());
    }

    #[test]
    fn test_invalid_helper() {
        let err = LedgerError::invalid("target_tank", "must be finite");
        assert_eq!(err.to_string(), "invalid target_tank: must be finite");
    }
}
