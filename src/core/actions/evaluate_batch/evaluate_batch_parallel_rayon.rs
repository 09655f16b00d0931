use std::time::Instant;

use rayon::prelude::*;
use tracing::debug;

use crate::core::actions::evaluate_batch::masked_batch::evaluate_masked_into;
use crate::core::data::complex::Complex;
use crate::core::data::escape_result::EscapeResult;
use crate::core::data::grid::Grid;
use crate::core::fractals::escape_time::algorithm::EscapeTimeAlgorithm;

/// Evaluates `grid` in parallel using rayon's work-stealing scheduler.
///
/// Each row is an independent masked batch writing its own disjoint slice of the output, so
/// the result is identical to [`evaluate_batch`].
///
/// [`evaluate_batch`]: crate::core::actions::evaluate_batch::evaluate_batch::evaluate_batch
#[must_use]
pub fn evaluate_batch_parallel_rayon(
    grid: &Grid<Complex>,
    algorithm: &EscapeTimeAlgorithm,
) -> Grid<EscapeResult> {
    let start = Instant::now();

    let mut results = grid.map(|_| EscapeResult::DidNotEscape);
    // a zero-width grid has no cells, and chunk sizes must be non-zero
    let row_width = grid.cols().max(1);

    results
        .as_mut_slice()
        .par_chunks_mut(row_width)
        .zip(grid.as_slice().par_chunks(row_width))
        .for_each(|(out, row)| evaluate_masked_into(row, out, algorithm));

    debug!(
        rows = grid.rows(),
        cols = grid.cols(),
        max_iterations = algorithm.max_iterations().get(),
        threads = rayon::current_num_threads(),
        elapsed = ?start.elapsed(),
        "evaluated batch in parallel"
    );

    results
}
