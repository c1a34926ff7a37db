//! Adaptive deviation band.

/// Deviation used before the first widening step.
pub const INITIAL_DEVIATION: f64 = 0.05;

const WIDENING_STEPS: [(usize, f64); 8] = [
    (100, 0.10),
    (200, 0.15),
    (300, 0.20),
    (400, 0.25),
    (500, 0.30),
    (600, 0.35),
    (800, 0.50),
    (900, 1.00),
];

/// Maps an attempt counter to the accepted deviation fraction.
///
/// The band starts at 5 % and widens as attempts accumulate, reaching
/// 100 % at attempt 900.
///
/// # Examples
///
/// ```
/// use u_fuel_ledger::synthesis::DeviationSchedule;
///
/// let schedule = DeviationSchedule::default();
/// assert_eq!(schedule.deviation_at(1), 0.05);
/// assert_eq!(schedule.deviation_at(250), 0.15);
/// assert_eq!(schedule.deviation_at(950), 1.0);
///
/// let (lower, upper) = schedule.band(100.0, 1);
/// assert!((lower - 95.0).abs() < 1e-9 && (upper - 105.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DeviationSchedule {
    initial: f64,
    steps: Vec<(usize, f64)>,
}

impl DeviationSchedule {
    /// Creates a schedule from an initial fraction and `(attempt, fraction)`
    /// steps. Steps are sorted by attempt.
    pub fn new(initial: f64, mut steps: Vec<(usize, f64)>) -> Self {
        steps.sort_by_key(|&(attempt, _)| attempt);
        Self { initial, steps }
    }

    /// Deviation fraction in force at the given (1-based) attempt.
    pub fn deviation_at(&self, attempt: usize) -> f64 {
        self.steps
            .iter()
            .rev()
            .find(|&&(from, _)| attempt >= from)
            .map_or(self.initial, |&(_, deviation)| deviation)
    }

    /// `[target * (1 - d), target * (1 + d)]` at the given attempt.
    pub fn band(&self, target: f64, attempt: usize) -> (f64, f64) {
        let d = self.deviation_at(attempt);
        (target * (1.0 - d), target * (1.0 + d))
    }
}

impl Default for DeviationSchedule {
    fn default() -> Self {
        Self::new(INITIAL_DEVIATION, WIDENING_STEPS.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_steps() {
        let s = DeviationSchedule::default();
        let expected = [
            (1, 0.05),
            (99, 0.05),
            (100, 0.10),
            (199, 0.10),
            (200, 0.15),
            (300, 0.20),
            (400, 0.25),
            (500, 0.30),
            (600, 0.35),
            (799, 0.35),
            (800, 0.50),
            (900, 1.00),
            (1000, 1.00),
        ];
        for (attempt, d) in expected {
            assert_eq!(s.deviation_at(attempt), d, "attempt {attempt}");
        }
    }

    #[test]
    fn test_monotone() {
        let s = DeviationSchedule::default();
        let mut prev = 0.0;
        for attempt in 1..=1000 {
            let d = s.deviation_at(attempt);
            assert!(d >= prev);
            prev = d;
        }
    }

    #[test]
    fn test_full_band() {
        let (lower, upper) = DeviationSchedule::default().band(100.0, 900);
        assert_eq!(lower, 0.0);
        assert_eq!(upper, 200.0);
    }

    #[test]
    fn test_custom_unsorted_steps() {
        let s = DeviationSchedule::new(0.01, vec![(20, 0.5), (10, 0.2)]);
        assert_eq!(s.deviation_at(5), 0.01);
        assert_eq!(s.deviation_at(15), 0.2);
        assert_eq!(s.deviation_at(25), 0.5);
    }
}
