//! Candidate route types.

use serde::{Deserialize, Serialize};

/// A distance as supplied by the route store: either a number or a
/// free-form string such as `"123.45 km"` or `"123,45"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDistance {
    Number(f64),
    Text(String),
}

impl From<f64> for RawDistance {
    fn from(km: f64) -> Self {
        Self::Number(km)
    }
}

impl From<&str> for RawDistance {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// A loosely-typed route record, as listed by the route store.
///
/// # Examples
///
/// ```
/// use u_fuel_ledger::models::RawRoute;
///
/// let raw: RawRoute = serde_json::from_str(
///     r#"{"name": "Office", "start_location": "Brno", "destination": "Praha", "distance": "205,3 km"}"#,
/// ).unwrap();
/// assert_eq!(raw.name, "Office");
/// assert!(raw.trip_purpose.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRoute {
    #[serde(default)]
    pub id: Option<usize>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub start_location: String,
    #[serde(default)]
    pub destination: String,
    pub distance: RawDistance,
    #[serde(default)]
    pub trip_purpose: Option<String>,
}

impl RawRoute {
    /// Creates a raw record with the given name and distance.
    pub fn new(name: impl Into<String>, distance: impl Into<RawDistance>) -> Self {
        Self {
            id: None,
            name: name.into(),
            start_location: String::new(),
            destination: String::new(),
            distance: distance.into(),
            trip_purpose: None,
        }
    }

    /// Sets the origin and destination labels.
    pub fn with_endpoints(mut self, start: impl Into<String>, destination: impl Into<String>) -> Self {
        self.start_location = start.into();
        self.destination = destination.into();
        self
    }

    /// Sets the trip purpose.
    pub fn with_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.trip_purpose = Some(purpose.into());
        self
    }
}

/// A normalized trip that can be assigned to a calendar day.
///
/// Distance is in kilometers and always finite and non-negative; the fuel
/// cost in liters is derived from it once, at construction.
///
/// # Examples
///
/// ```
/// use u_fuel_ledger::models::RouteCandidate;
///
/// let c = RouteCandidate::new(1, "Office", 200.0, 7.0).unwrap();
/// assert_eq!(c.distance(), 200.0);
/// assert!((c.fuel_cost() - 14.0).abs() < 1e-12);
///
/// assert!(RouteCandidate::new(2, "Broken", -1.0, 7.0).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteCandidate {
    id: usize,
    name: String,
    origin: String,
    destination: String,
    distance: f64,
    fuel_cost: f64,
    purpose: Option<String>,
}

impl RouteCandidate {
    /// Creates a candidate, deriving the fuel cost from `rate` (L/100 km).
    ///
    /// Returns `None` if the distance is negative or non-finite.
    pub fn new(id: usize, name: impl Into<String>, distance: f64, rate: f64) -> Option<Self> {
        if !distance.is_finite() || distance < 0.0 {
            return None;
        }
        Some(Self {
            id,
            name: name.into(),
            origin: String::new(),
            destination: String::new(),
            distance,
            fuel_cost: crate::normalize::fuel_cost(distance, rate),
            purpose: None,
        })
    }

    /// The zero-length placeholder returned when synthesis finds nothing.
    ///
    /// Only [`SegmentOutcome::Sentinel`](crate::synthesis::SegmentOutcome)
    /// marks a segment as holding it; an ordinary record may look the same.
    pub fn sentinel() -> Self {
        Self {
            id: 0,
            name: String::new(),
            origin: String::new(),
            destination: String::new(),
            distance: 0.0,
            fuel_cost: 0.0,
            purpose: None,
        }
    }

    /// Sets the origin and destination labels.
    pub fn with_endpoints(mut self, origin: impl Into<String>, destination: impl Into<String>) -> Self {
        self.origin = origin.into();
        self.destination = destination.into();
        self
    }

    /// Sets the trip purpose.
    pub fn with_purpose(mut self, purpose: Option<String>) -> Self {
        self.purpose = purpose;
        self
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Distance in kilometers.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Fuel needed for this trip, in liters.
    pub fn fuel_cost(&self) -> f64 {
        self.fuel_cost
    }

    pub fn purpose(&self) -> Option<&str> {
        self.purpose.as_deref()
    }
}
