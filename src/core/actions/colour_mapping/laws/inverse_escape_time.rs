use crate::core::actions::colour_mapping::errors::ColourMapError;
use crate::core::actions::colour_mapping::kinds::ColourLawKinds;
use crate::core::actions::colour_mapping::laws::escape_iterations;
use crate::core::actions::colour_mapping::ports::colour_law::ColourLaw;
use crate::core::data::escape_result::EscapeResult;
use crate::core::fractals::escape_time::max_iterations::MaxIterations;

/// Interior cells map to `0`; a cell escaping at `k` maps to `(N - k + 1) / (N + 1)`.
///
/// Values for escaped cells lie in `(0, 1]`, with `k = 0` at `1` and slower escapes darker.
#[derive(Debug, Clone, Copy, Default)]
pub struct InverseEscapeTime;

impl ColourLaw for InverseEscapeTime {
    fn normalise(
        &self,
        result: EscapeResult,
        max_iterations: MaxIterations,
    ) -> Result<f64, ColourMapError> {
        let Some(k) = escape_iterations(result, max_iterations)? else {
            return Ok(0.0);
        };

        let n = f64::from(max_iterations.get());

        Ok((n - f64::from(k) + 1.0) / (n + 1.0))
    }

    fn kind(&self) -> ColourLawKinds {
        ColourLawKinds::InverseEscapeTime
    }
}
