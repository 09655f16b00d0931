pub mod inverse_escape_time;
pub mod truncated_inverse_escape_time;

use crate::core::actions::colour_mapping::errors::ColourMapError;
use crate::core::data::escape_result::EscapeResult;
use crate::core::fractals::escape_time::max_iterations::MaxIterations;

/// Escape count of `result`, rejecting counts beyond the budget they were produced under.
fn escape_iterations(
    result: EscapeResult,
    max_iterations: MaxIterations,
) -> Result<Option<u32>, ColourMapError> {
    match result {
        EscapeResult::Escaped(iterations) if iterations > max_iterations.get() => {
            Err(ColourMapError::IterationsExceedMax {
                iterations,
                max_iterations: max_iterations.get(),
            })
        }
        result => Ok(result.iterations()),
    }
}
