//! Candidate normalization.
//!
//! Turns loosely-typed route records into [`RouteCandidate`]s with a
//! canonical kilometer distance and a derived fuel cost. Records whose
//! distance cannot be parsed are dropped and logged; they never abort the
//! reconstruction.

mod distance;

pub use distance::{fuel_cost, parse_distance};

use crate::models::{RawDistance, RawRoute, RouteCandidate};

/// Purpose recorded for trips whose record leaves it blank ("business trip").
pub const DEFAULT_TRIP_PURPOSE: &str = "Služební cesta";

/// Normalizes raw route records, preserving input order.
///
/// `rate` is the consumption in liters per 100 km. Records without an `id`
/// are numbered by their 1-based input position, and a missing or blank
/// trip purpose becomes [`DEFAULT_TRIP_PURPOSE`].
///
/// # Examples
///
/// ```
/// use u_fuel_ledger::models::RawRoute;
/// use u_fuel_ledger::normalize::normalize;
///
/// let raw = vec![
///     RawRoute::new("Office", "200 km"),
///     RawRoute::new("Unknown", "N/A"),
///     RawRoute::new("Client", 35.0),
/// ];
/// let candidates = normalize(&raw, 7.0);
/// assert_eq!(candidates.len(), 2);
/// assert_eq!(candidates[1].name(), "Client");
/// assert_eq!(candidates[1].purpose(), Some("Služební cesta"));
/// ```
pub fn normalize(raw: &[RawRoute], rate: f64) -> Vec<RouteCandidate> {
    raw.iter()
        .enumerate()
        .filter_map(|(index, route)| {
            let id = route.id.unwrap_or(index + 1);
            let Some(km) = resolve_distance(&route.distance) else {
                log::warn!(
                    "dropping route {id} ({:?}): unparseable distance {:?}",
                    route.name,
                    route.distance
                );
                return None;
            };
            let candidate = RouteCandidate::new(id, route.name.clone(), km, rate)?
                .with_endpoints(route.start_location.clone(), route.destination.clone())
                .with_purpose(Some(purpose_of(route)));
            Some(candidate)
        })
        .collect()
}

fn purpose_of(route: &RawRoute) -> String {
    route
        .trip_purpose
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .unwrap_or(DEFAULT_TRIP_PURPOSE)
        .to_string()
}

fn resolve_distance(distance: &RawDistance) -> Option<f64> {
    match distance {
        RawDistance::Number(km) if km.is_finite() && *km >= 0.0 => Some(*km),
        RawDistance::Number(_) => None,
        RawDistance::Text(text) => parse_distance(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_drops_only_malformed() {
        let raw = vec![
            RawRoute::new("a", "10 km"),
            RawRoute::new("b", "N/A"),
            RawRoute::new("c", "20,5"),
            RawRoute::new("d", 35.0),
        ];
        let out = normalize(&raw, 7.0);
        let names: Vec<_> = out.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["a", "c", "d"]);
        assert_eq!(out[0].distance(), 10.0);
        assert_eq!(out[1].distance(), 20.5);
        assert_eq!(out[2].distance(), 35.0);
    }

    #[test]
    fn test_ids_follow_input_position() {
        let mut explicit = RawRoute::new("x", "5");
        explicit.id = Some(42);
        let raw = vec![RawRoute::new("bad", "?"), RawRoute::new("y", "5"), explicit];
        let out = normalize(&raw, 7.0);
        assert_eq!(out[0].id(), 2);
        assert_eq!(out[1].id(), 42);
    }

    #[test]
    fn test_fuel_cost_uses_rate() {
        let raw = vec![RawRoute::new("a", "200 km")];
        let out = normalize(&raw, 7.0);
        assert!((out[0].fuel_cost() - 14.0).abs() < 1e-12);
        let out = normalize(&raw, 5.0);
        assert!((out[0].fuel_cost() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_bad_numbers() {
        let raw = vec![
            RawRoute::new("neg", -5.0),
            RawRoute::new("nan", f64::NAN),
            RawRoute::new("ok", 1.0),
        ];
        let out = normalize(&raw, 7.0);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name(), "ok");
    }

    #[test]
    fn test_carries_labels() {
        let raw = vec![RawRoute::new("a", "10")
            .with_endpoints("Brno", "Praha")
            .with_purpose("Audit")];
        let out = normalize(&raw, 7.0);
        assert_eq!(out[0].origin(), "Brno");
        assert_eq!(out[0].destination(), "Praha");
        assert_eq!(out[0].purpose(), Some("Audit"));
    }

    #[test]
    fn test_missing_purpose_defaults() {
        let raw = vec![
            RawRoute::new("a", "10"),
            RawRoute::new("b", "10").with_purpose("  "),
            RawRoute::new("c", "10").with_purpose("Audit"),
        ];
        let out = normalize(&raw, 7.0);
        assert_eq!(out[0].purpose(), Some(DEFAULT_TRIP_PURPOSE));
        assert_eq!(out[1].purpose(), Some(DEFAULT_TRIP_PURPOSE));
        assert_eq!(out[2].purpose(), Some("Audit"));
    }

    proptest! {
        #[test]
        fn prop_parsed_distances_are_valid(text in ".{0,16}") {
            if let Some(km) = parse_distance(&text) {
                prop_assert!(km.is_finite());
                prop_assert!(km >= 0.0);
            }
        }

        #[test]
        fn prop_formatted_distance_roundtrips(whole in 0u32..10_000, frac in 0u32..100, comma in any::<bool>()) {
            let sep = if comma { ',' } else { '.' };
            let text = format!("{whole}{sep}{frac:02} km");
            let expected: f64 = format!("{whole}.{frac:02}").parse().expect("valid float");
            prop_assert_eq!(parse_distance(&text), Some(expected));
        }
    }
}
