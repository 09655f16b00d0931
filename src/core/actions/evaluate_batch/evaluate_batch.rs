use std::time::Instant;

use tracing::debug;

use crate::core::actions::evaluate_batch::masked_batch::evaluate_masked_into;
use crate::core::data::complex::Complex;
use crate::core::data::escape_result::EscapeResult;
use crate::core::data::grid::Grid;
use crate::core::fractals::escape_time::algorithm::EscapeTimeAlgorithm;

/// Evaluates every cell of `grid` in one masked pass on the calling thread.
///
/// The output has the same shape as `grid` and matches calling
/// [`SampleAlgorithm::compute`](crate::core::actions::evaluate_batch::ports::sample_algorithm::SampleAlgorithm::compute)
/// on each cell. The caller's grid is not modified.
#[must_use]
pub fn evaluate_batch(grid: &Grid<Complex>, algorithm: &EscapeTimeAlgorithm) -> Grid<EscapeResult> {
    let start = Instant::now();
    let mut results = grid.map(|_| EscapeResult::DidNotEscape);
    evaluate_masked_into(grid.as_slice(), results.as_mut_slice(), algorithm);

    debug!(
        rows = grid.rows(),
        cols = grid.cols(),
        max_iterations = algorithm.max_iterations().get(),
        escaped = results.iter().filter(|result| result.escaped()).count(),
        elapsed = ?start.elapsed(),
        "evaluated batch"
    );

    results
}
