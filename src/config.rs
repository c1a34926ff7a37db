//! Engine configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default vehicle consumption in liters per 100 km.
pub const DEFAULT_CONSUMPTION_RATE: f64 = 7.0;

/// Physical tank capacity in liters.
pub const MAX_TANK_CAPACITY: f64 = 80.0;

/// Tolerance used when comparing two fuel levels.
pub const DEFAULT_EPSILON: f64 = 0.001;

/// Attempt budget of the segment synthesizer.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// What the walker does when a refuel would overfill the tank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Abort with an invariant violation.
    #[default]
    Reject,
    /// Fill to capacity and record the excess as spilled.
    Clip,
}

/// Tunables shared by the normalizer, synthesizer and walker.
///
/// # Examples
///
/// ```
/// use u_fuel_ledger::config::{EngineConfig, OverflowPolicy};
///
/// let config = EngineConfig::default()
///     .with_consumption_rate(6.5)
///     .with_overflow_policy(OverflowPolicy::Clip);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.tank_capacity, 80.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Liters per 100 km.
    #[serde(default = "EngineConfig::default_consumption_rate")]
    pub consumption_rate: f64,
    #[serde(default = "EngineConfig::default_tank_capacity")]
    pub tank_capacity: f64,
    #[serde(default = "EngineConfig::default_epsilon")]
    pub epsilon: f64,
    #[serde(default = "EngineConfig::default_max_attempts")]
    pub max_attempts: usize,
    #[serde(default)]
    pub overflow_policy: OverflowPolicy,
    /// Extra rotated assignments tried after a failed walk.
    #[serde(default)]
    pub max_rotations: usize,
}

impl EngineConfig {
    const fn default_consumption_rate() -> f64 {
        DEFAULT_CONSUMPTION_RATE
    }

    const fn default_tank_capacity() -> f64 {
        MAX_TANK_CAPACITY
    }

    const fn default_epsilon() -> f64 {
        DEFAULT_EPSILON
    }

    const fn default_max_attempts() -> usize {
        DEFAULT_MAX_ATTEMPTS
    }

    /// Sets the consumption rate (liters per 100 km).
    pub fn with_consumption_rate(mut self, rate: f64) -> Self {
        self.consumption_rate = rate;
        self
    }

    /// Sets the tank capacity.
    pub fn with_tank_capacity(mut self, capacity: f64) -> Self {
        self.tank_capacity = capacity;
        self
    }

    /// Sets the balance tolerance.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Sets the synthesizer attempt budget.
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Sets the refuel overflow policy.
    pub fn with_overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        self.overflow_policy = policy;
        self
    }

    /// Sets how many rotated assignments to try after a failed walk.
    pub fn with_max_rotations(mut self, rotations: usize) -> Self {
        self.max_rotations = rotations;
        self
    }

    /// Checks that every tunable is inside its domain.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.consumption_rate.is_finite() || self.consumption_rate <= 0.0 {
            return Err(ConfigError::NotPositive {
                field: "consumption_rate",
                value: self.consumption_rate,
            });
        }
        if !self.tank_capacity.is_finite() || self.tank_capacity <= 0.0 {
            return Err(ConfigError::NotPositive {
                field: "tank_capacity",
                value: self.tank_capacity,
            });
        }
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(ConfigError::NotPositive {
                field: "epsilon",
                value: self.epsilon,
            });
        }
        if self.epsilon >= self.tank_capacity {
            return Err(ConfigError::EpsilonTooLarge {
                epsilon: self.epsilon,
                capacity: self.tank_capacity,
            });
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            consumption_rate: Self::default_consumption_rate(),
            tank_capacity: Self::default_tank_capacity(),
            epsilon: Self::default_epsilon(),
            max_attempts: Self::default_max_attempts(),
            overflow_policy: OverflowPolicy::default(),
            max_rotations: 0,
        }
    }
}

/// Errors raised when configuration invariants are violated.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be a positive finite number (got {value})")]
    NotPositive { field: &'static str, value: f64 },
    #[error("epsilon {epsilon} must be smaller than tank capacity {capacity}")]
    EpsilonTooLarge { epsilon: f64, capacity: f64 },
    #[error("max_attempts must be at least 1")]
    ZeroAttempts,
}
