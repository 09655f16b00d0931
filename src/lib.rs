mod controllers;
mod core;

pub use controllers::render::{render, RenderError};

pub use crate::core::actions::colour_mapping::errors::ColourMapError;
pub use crate::core::actions::colour_mapping::factory::colour_law_factory;
pub use crate::core::actions::colour_mapping::kinds::ColourLawKinds;
pub use crate::core::actions::colour_mapping::laws::inverse_escape_time::InverseEscapeTime;
pub use crate::core::actions::colour_mapping::laws::truncated_inverse_escape_time::TruncatedInverseEscapeTime;
pub use crate::core::actions::colour_mapping::ports::colour_law::ColourLaw;
pub use crate::core::actions::colour_mapping::to_colour::to_colour;
pub use crate::core::actions::evaluate_batch::evaluate_batch::evaluate_batch;
pub use crate::core::actions::evaluate_batch::evaluate_batch_parallel_rayon::evaluate_batch_parallel_rayon;
pub use crate::core::actions::evaluate_batch::evaluate_batch_scalar::evaluate_batch_scalar;
pub use crate::core::actions::evaluate_batch::ports::sample_algorithm::SampleAlgorithm;
pub use crate::core::actions::sample_grid::sample_grid::sample;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::escape_result::EscapeResult;
pub use crate::core::data::grid::{Grid, GridError};
pub use crate::core::data::region::{MAX_GRID_CELLS, Region, RegionError, axis_len};
pub use crate::core::fractals::escape_time::algorithm::{evaluate, EscapeTimeAlgorithm};
pub use crate::core::fractals::escape_time::config::{
    default_region, RenderConfig, DEFAULT_JULIA_PARAMETER, DEFAULT_MAX_ITERATIONS, DEFAULT_STEP,
};
pub use crate::core::fractals::escape_time::errors::EscapeTimeError;
pub use crate::core::fractals::escape_time::escape_mode::EscapeMode;
pub use crate::core::fractals::escape_time::max_iterations::MaxIterations;
pub use crate::core::fractals::escape_time::threshold::{EscapeThreshold, DEFAULT_ESCAPE_RADIUS};
