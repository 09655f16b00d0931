use crate::core::actions::evaluate_batch::ports::sample_algorithm::SampleAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::grid::Grid;

/// Reference evaluation: calls the scalar algorithm once per cell.
pub fn evaluate_batch_scalar<Alg: SampleAlgorithm>(
    grid: &Grid<Complex>,
    algorithm: &Alg,
) -> Grid<Alg::Success> {
    grid.map(|&sample| algorithm.compute(sample))
}
