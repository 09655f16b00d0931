use tracing::debug;

use crate::core::data::complex::Complex;
use crate::core::data::grid::Grid;
use crate::core::data::region::Region;

/// Builds the grid of complex sample points covering `region`.
///
/// Columns step the real part right from `top_left.real`; rows step the imaginary part down
/// from the region's upper edge. The shape comes from `Region::shape`, which `Region::new`
/// has already bounded.
#[must_use]
pub fn sample(region: &Region) -> Grid<Complex> {
    let left = region.top_left().real;
    let upper = region.upper_imag();
    let step = region.step();

    let (rows, cols) = region.shape();

    let reals: Vec<f64> = (0..cols).map(|col| left + col as f64 * step).collect();
    let imags: Vec<f64> = (0..rows).map(|row| upper - row as f64 * step).collect();

    debug!(rows, cols, step, "sampled region");

    Grid::from_fn(rows, cols, |row, col| Complex {
        real: reals[col],
        imag: imags[row],
    })
}
