use crate::core::data::complex::Complex;
use crate::core::data::escape_result::EscapeResult;
use crate::core::fractals::escape_time::algorithm::{escapes, EscapeTimeAlgorithm};

/// Working state for evaluating a run of samples together.
///
/// Owns its own copy of each orbit plus an `active` mask. A cell leaves the mask the first
/// time its orbit escapes and is never revisited.
#[derive(Debug)]
pub(crate) struct MaskedBatch {
    z: Vec<Complex>,
    c: Vec<Complex>,
    radius_squared: Vec<f64>,
    active: Vec<bool>,
    results: Vec<EscapeResult>,
    active_count: usize,
}

impl MaskedBatch {
    pub(crate) fn new(samples: &[Complex], algorithm: &EscapeTimeAlgorithm) -> Self {
        let mode = algorithm.mode();
        let threshold = algorithm.threshold();

        let c: Vec<Complex> = samples.iter().map(|&sample| mode.parameter_for(sample)).collect();
        let radius_squared: Vec<f64> = c.iter().map(|&c| threshold.radius_squared(c)).collect();

        let mut batch = Self {
            z: samples.to_vec(),
            c,
            radius_squared,
            active: vec![true; samples.len()],
            results: vec![EscapeResult::DidNotEscape; samples.len()],
            active_count: samples.len(),
        };

        batch.record_escapes(0);
        batch
    }

    #[must_use]
    pub(crate) fn active_count(&self) -> usize {
        self.active_count
    }

    /// Advances every active orbit by one squaring and retires those that escape at `round`.
    pub(crate) fn step(&mut self, round: u32) {
        for ((z, &c), &active) in self.z.iter_mut().zip(&self.c).zip(&self.active) {
            if active {
                *z = z.square() + c;
            }
        }

        self.record_escapes(round);
    }

    fn record_escapes(&mut self, round: u32) {
        for (i, active) in self.active.iter_mut().enumerate() {
            if *active && escapes(self.z[i], self.radius_squared[i]) {
                self.results[i] = EscapeResult::Escaped(round);
                *active = false;
                self.active_count -= 1;
            }
        }
    }

    pub(crate) fn into_results(self) -> Vec<EscapeResult> {
        self.results
    }
}

/// Runs the masked rounds to completion and writes one result per sample into `out`.
///
/// Runs one round per squaring the algorithm's budget allows, stopping early once every cell
/// has escaped.
pub(crate) fn evaluate_masked_into(
    samples: &[Complex],
    out: &mut [EscapeResult],
    algorithm: &EscapeTimeAlgorithm,
) {
    let mut batch = MaskedBatch::new(samples, algorithm);

    for round in 1..=algorithm.squarings() {
        if batch.active_count() == 0 {
            break;
        }
        batch.step(round);
    }

    for (slot, result) in out.iter_mut().zip(batch.into_results()) {
        *slot = result;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::escape_time::escape_mode::EscapeMode;
    use crate::core::fractals::escape_time::threshold::EscapeThreshold;

    fn mandelbrot(max_iterations: u32) -> EscapeTimeAlgorithm {
        EscapeTimeAlgorithm::new(EscapeMode::Mandelbrot, max_iterations, EscapeThreshold::default())
            .unwrap()
    }

    #[test]
    fn test_immediate_escapes_are_recorded_before_any_round() {
        let samples = [Complex::new(3.0, 0.0), Complex::ZERO, Complex::new(0.0, -2.5)];
        let batch = MaskedBatch::new(&samples, &mandelbrot(10));

        assert_eq!(batch.active_count(), 1);
        assert_eq!(
            batch.into_results(),
            vec![
                EscapeResult::Escaped(0),
                EscapeResult::DidNotEscape,
                EscapeResult::Escaped(0)
            ]
        );
    }

    #[test]
    fn test_active_count_never_increases() {
        let samples: Vec<Complex> = (0..50)
            .map(|i| Complex::new(-2.0 + i as f64 * 0.06, 0.4))
            .collect();
        let mut batch = MaskedBatch::new(&samples, &mandelbrot(30));
        let mut previous = batch.active_count();

        for round in 1..=30 {
            batch.step(round);
            assert!(batch.active_count() <= previous);
            previous = batch.active_count();
        }
    }

    #[test]
    fn test_escaped_cells_are_frozen() {
        // c = 1 escapes at round 2; later rounds must not overwrite it
        let samples = [Complex::new(1.0, 0.0)];
        let mut batch = MaskedBatch::new(&samples, &mandelbrot(10));

        for round in 1..=10 {
            batch.step(round);
        }

        assert_eq!(batch.into_results(), vec![EscapeResult::Escaped(2)]);
    }

    fn evaluate_masked(samples: &[Complex], algorithm: &EscapeTimeAlgorithm) -> Vec<EscapeResult> {
        let mut out = vec![EscapeResult::DidNotEscape; samples.len()];
        evaluate_masked_into(samples, &mut out, algorithm);
        out
    }

    #[test]
    fn test_evaluate_masked_empty_input() {
        assert!(evaluate_masked(&[], &mandelbrot(5)).is_empty());
    }

    #[test]
    fn test_mandelbrot_rounds_stop_one_short_of_budget() {
        // c = 1: 0 -> 1 -> 2 -> 5, escaping on the third recurrence step
        let samples = [Complex::new(1.0, 0.0)];

        assert_eq!(evaluate_masked(&samples, &mandelbrot(2)), vec![EscapeResult::DidNotEscape]);
        assert_eq!(evaluate_masked(&samples, &mandelbrot(3)), vec![EscapeResult::Escaped(2)]);
    }

    #[test]
    fn test_julia_rounds_use_full_budget() {
        let algorithm = EscapeTimeAlgorithm::new(
            EscapeMode::Julia {
                c: Complex::new(1.0, 0.0),
            },
            3,
            EscapeThreshold::default(),
        )
        .unwrap();

        // z0 = 0: 0 -> 1 -> 2 -> 5
        assert_eq!(evaluate_masked(&[Complex::ZERO], &algorithm), vec![EscapeResult::Escaped(3)]);
    }

    #[test]
    fn test_evaluate_masked_julia_mode() {
        let algorithm = EscapeTimeAlgorithm::new(
            EscapeMode::Julia {
                c: Complex::new(1.0, 0.0),
            },
            10,
            EscapeThreshold::default(),
        )
        .unwrap();

        let results = evaluate_masked(&[Complex::ZERO, Complex::new(1.0, 0.0)], &algorithm);

        assert_eq!(
            results,
            vec![EscapeResult::Escaped(3), EscapeResult::Escaped(2)]
        );
    }
}
