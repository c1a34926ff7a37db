//! Distance parsing and fuel cost derivation.

/// Parses a free-form distance such as `"123.45 km"` or `"123,45"`.
///
/// Every character except ASCII digits, `.` and `,` is discarded, commas
/// become decimal points, and the remainder is parsed. Returns `None` when
/// nothing parseable is left.
///
/// # Examples
///
/// ```
/// use u_fuel_ledger::normalize::parse_distance;
///
/// assert_eq!(parse_distance("123.45 km"), Some(123.45));
/// assert_eq!(parse_distance("123,45"), Some(123.45));
/// assert_eq!(parse_distance("N/A"), None);
/// ```
pub fn parse_distance(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    cleaned.parse::<f64>().ok().filter(|d| d.is_finite())
}

/// Fuel needed to drive `distance` km at `rate` liters per 100 km.
///
/// # Examples
///
/// ```
/// use u_fuel_ledger::normalize::fuel_cost;
///
/// assert!((fuel_cost(70.0, 5.0) - 3.5).abs() < 1e-12);
/// ```
pub fn fuel_cost(distance: f64, rate: f64) -> f64 {
    distance * rate / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        assert_eq!(parse_distance("200"), Some(200.0));
        assert_eq!(parse_distance("  35.5  "), Some(35.5));
    }

    #[test]
    fn test_parse_units_and_comma() {
        assert_eq!(parse_distance("205,3 km"), Some(205.3));
        assert_eq!(parse_distance("12km"), Some(12.0));
        assert_eq!(parse_distance("~ 7,25 KM"), Some(7.25));
    }

    #[test]
    fn test_parse_failures() {
        assert_eq!(parse_distance(""), None);
        assert_eq!(parse_distance("N/A"), None);
        assert_eq!(parse_distance("km"), None);
        assert_eq!(parse_distance("."), None);
        // thousands separator collides with the decimal comma
        assert_eq!(parse_distance("1.234,5"), None);
    }

    #[test]
    fn test_fuel_cost_known_values() {
        assert!((fuel_cost(70.0, 5.0) - 3.5).abs() < 1e-12);
        assert!((fuel_cost(35.0, 5.0) - 1.75).abs() < 1e-12);
        assert!((fuel_cost(105.0, 5.0) - 5.25).abs() < 1e-12);
        assert!((fuel_cost(200.0, 7.0) - 14.0).abs() < 1e-12);
        assert_eq!(fuel_cost(0.0, 7.0), 0.0);
    }
}
