use crate::core::actions::colour_mapping::errors::ColourMapError;
use crate::core::actions::colour_mapping::ports::colour_law::ColourLaw;
use crate::core::data::escape_result::EscapeResult;
use crate::core::data::grid::Grid;
use crate::core::fractals::escape_time::max_iterations::MaxIterations;

/// Normalises every escape result in `results` with `law`, preserving shape.
pub fn to_colour<Law: ColourLaw + ?Sized>(
    results: &Grid<EscapeResult>,
    max_iterations: MaxIterations,
    law: &Law,
) -> Result<Grid<f64>, ColourMapError> {
    results
        .map(|&result| law.normalise(result, max_iterations))
        .transpose()
}
