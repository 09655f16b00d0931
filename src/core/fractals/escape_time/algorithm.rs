use crate::core::actions::evaluate_batch::ports::sample_algorithm::SampleAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::escape_result::EscapeResult;
use crate::core::fractals::escape_time::errors::EscapeTimeError;
use crate::core::fractals::escape_time::escape_mode::EscapeMode;
use crate::core::fractals::escape_time::max_iterations::MaxIterations;
use crate::core::fractals::escape_time::threshold::EscapeThreshold;
use std::ops::ControlFlow;

/// Scalar escape-time evaluator for the recurrence `z -> z² + c`.
///
/// The first magnitude test is applied to the sample itself. In Julia mode that is `z_0`; in
/// Mandelbrot mode it is `z_1 = 0² + c`, since the zero seed can never escape. A sample outside
/// the radius therefore escapes at iteration 0 in both modes.
///
/// The budget counts recurrence steps from the true seed. Julia mode squares `z_0` up to
/// `max_iterations` times; in Mandelbrot mode the step to `z_1 = c` is the first of those, so
/// only `max_iterations - 1` squarings remain and escape counts stay below `max_iterations`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeTimeAlgorithm {
    mode: EscapeMode,
    max_iterations: MaxIterations,
    threshold: EscapeThreshold,
}

impl SampleAlgorithm for EscapeTimeAlgorithm {
    type Success = EscapeResult;

    fn compute(&self, sample: Complex) -> Self::Success {
        let c = self.mode.parameter_for(sample);
        let radius_squared = self.threshold.radius_squared(c);

        if escapes(sample, radius_squared) {
            return EscapeResult::Escaped(0);
        }

        let iterations = (1..=self.squarings()).try_fold(sample, |z, iteration| {
            let next = z.square() + c;

            if escapes(next, radius_squared) {
                ControlFlow::Break(iteration)
            } else {
                ControlFlow::Continue(next)
            }
        });

        match iterations {
            ControlFlow::Break(iteration) => EscapeResult::Escaped(iteration),
            ControlFlow::Continue(_) => EscapeResult::DidNotEscape,
        }
    }
}

impl EscapeTimeAlgorithm {
    pub fn new(
        mode: EscapeMode,
        max_iterations: u32,
        threshold: EscapeThreshold,
    ) -> Result<Self, EscapeTimeError> {
        if let EscapeMode::Julia { c } = mode {
            if !c.is_finite() {
                return Err(EscapeTimeError::NonFiniteParameter { c });
            }
        }

        if let EscapeThreshold::Fixed { radius } = threshold {
            EscapeThreshold::fixed(radius)?;
        }

        Ok(Self {
            mode,
            max_iterations: MaxIterations::new(max_iterations)?,
            threshold,
        })
    }

    #[must_use]
    pub fn mode(&self) -> EscapeMode {
        self.mode
    }

    #[must_use]
    pub fn max_iterations(&self) -> MaxIterations {
        self.max_iterations
    }

    #[must_use]
    pub fn threshold(&self) -> EscapeThreshold {
        self.threshold
    }

    /// Squarings left after the first magnitude test on the sample.
    #[must_use]
    pub fn squarings(&self) -> u32 {
        match self.mode {
            EscapeMode::Mandelbrot => self.max_iterations.get() - 1,
            EscapeMode::Julia { .. } => self.max_iterations.get(),
        }
    }
}

/// Escape test shared by the scalar and batch paths.
#[inline]
#[must_use]
pub(crate) fn escapes(z: Complex, radius_squared: f64) -> bool {
    z.magnitude_squared() > radius_squared
}

/// Evaluates one sample with the canonical radius-2 threshold.
pub fn evaluate(
    sample: Complex,
    mode: EscapeMode,
    max_iterations: u32,
) -> Result<EscapeResult, EscapeTimeError> {
    let algorithm = EscapeTimeAlgorithm::new(mode, max_iterations, EscapeThreshold::default())?;

    Ok(algorithm.compute(sample))
}
