//! Request and response records exchanged with the host application.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{RawRoute, RefuelCalendar, Solution, Stats};

/// Everything needed to reconstruct one month of the fuel ledger.
///
/// # Examples
///
/// ```
/// use u_fuel_ledger::engine::ReconstructionRequest;
///
/// let request = ReconstructionRequest::from_json(r#"{
///     "initial_tank": 61.545,
///     "target_tank": 30.0,
///     "start_date": "2025-05-01",
///     "candidates": [{"name": "Office", "distance": "200 km"}],
///     "refuels": {"2025-05-05": [{"amount": 20.0, "location": "Shell"}]}
/// }"#).unwrap();
/// assert_eq!(request.candidates.len(), 1);
/// assert!(request.consumption_rate.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconstructionRequest {
    /// Liters in the tank at the start of the period.
    pub initial_tank: f64,
    /// Liters required at the end of the period.
    pub target_tank: f64,
    /// First day; the period runs to the end of this month.
    pub start_date: NaiveDate,
    pub candidates: Vec<RawRoute>,
    #[serde(default)]
    pub refuels: RefuelCalendar,
    /// Overrides the configured consumption rate (L/100 km).
    #[serde(default)]
    pub consumption_rate: Option<f64>,
    #[serde(default)]
    pub odometer_start: Option<u64>,
}

impl ReconstructionRequest {
    /// Creates a request with no refuels.
    pub fn new(
        initial_tank: f64,
        target_tank: f64,
        start_date: NaiveDate,
        candidates: Vec<RawRoute>,
    ) -> Self {
        Self {
            initial_tank,
            target_tank,
            start_date,
            candidates,
            refuels: RefuelCalendar::new(),
            consumption_rate: None,
            odometer_start: None,
        }
    }

    /// Sets the refuel calendar.
    pub fn with_refuels(mut self, refuels: RefuelCalendar) -> Self {
        self.refuels = refuels;
        self
    }

    /// Overrides the consumption rate.
    pub fn with_consumption_rate(mut self, rate: f64) -> Self {
        self.consumption_rate = Some(rate);
        self
    }

    /// Sets the odometer reading at the start of the period.
    pub fn with_odometer_start(mut self, km: u64) -> Self {
        self.odometer_start = Some(km);
        self
    }

    /// Decodes a request from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A successful reconstruction: the walked ledger and its statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reconstruction {
    pub solution: Solution,
    pub stats: Stats,
    /// Candidate rotation that produced the solution (0 = input order).
    pub rotation: usize,
}
