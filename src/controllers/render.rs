use std::error::Error;
use std::fmt;
use std::time::Instant;

use tracing::info;

use crate::core::actions::colour_mapping::errors::ColourMapError;
use crate::core::actions::colour_mapping::factory::colour_law_factory;
use crate::core::actions::colour_mapping::to_colour::to_colour;
use crate::core::actions::evaluate_batch::evaluate_batch_parallel_rayon::evaluate_batch_parallel_rayon;
use crate::core::actions::sample_grid::sample_grid::sample;
use crate::core::data::grid::Grid;
use crate::core::fractals::escape_time::config::RenderConfig;
use crate::core::fractals::escape_time::errors::EscapeTimeError;

#[derive(Debug, PartialEq)]
pub enum RenderError {
    EscapeTime(EscapeTimeError),
    ColourMap(ColourMapError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EscapeTime(err) => write!(f, "escape time error: {}", err),
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EscapeTime(err) => Some(err),
            Self::ColourMap(err) => Some(err),
        }
    }
}

impl From<EscapeTimeError> for RenderError {
    fn from(err: EscapeTimeError) -> Self {
        Self::EscapeTime(err)
    }
}

impl From<ColourMapError> for RenderError {
    fn from(err: ColourMapError) -> Self {
        Self::ColourMap(err)
    }
}

/// Samples, evaluates and normalises `config.region` into a grid of values in `[0, 1]`.
///
/// The iteration settings are validated before any sampling happens.
pub fn render(config: &RenderConfig) -> Result<Grid<f64>, RenderError> {
    let algorithm = config.build_algorithm()?;
    let colour_law = colour_law_factory(config.colour_law);

    let start = Instant::now();
    let grid = sample(&config.region);
    let results = evaluate_batch_parallel_rayon(&grid, &algorithm);
    let colours = to_colour(&results, algorithm.max_iterations(), &colour_law)?;

    info!(
        mode = config.mode.display_name(),
        rows = colours.rows(),
        cols = colours.cols(),
        max_iterations = config.max_iterations,
        colour_law = colour_law.display_name(),
        elapsed = ?start.elapsed(),
        "rendered escape-time grid"
    );

    Ok(colours)
}
