use crate::core::actions::colour_mapping::kinds::ColourLawKinds;
use crate::core::data::complex::Complex;
use crate::core::data::region::{Region, RegionError};
use crate::core::fractals::escape_time::algorithm::EscapeTimeAlgorithm;
use crate::core::fractals::escape_time::errors::EscapeTimeError;
use crate::core::fractals::escape_time::escape_mode::EscapeMode;
use crate::core::fractals::escape_time::threshold::EscapeThreshold;

pub const DEFAULT_MAX_ITERATIONS: u32 = 256;
pub const DEFAULT_STEP: f64 = 0.01;
pub const DEFAULT_JULIA_PARAMETER: Complex = Complex::new(-0.7, 0.27);

pub fn default_region() -> Result<Region, RegionError> {
    Region::new(Complex::new(-2.5, 1.0), Complex::new(1.0, -1.0), DEFAULT_STEP)
}

/// Everything needed to turn a region into a grid of normalised colour values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub region: Region,
    pub mode: EscapeMode,
    pub max_iterations: u32,
    pub threshold: EscapeThreshold,
    pub colour_law: ColourLawKinds,
}

impl RenderConfig {
    pub fn new(region: Region, mode: EscapeMode, max_iterations: u32) -> Self {
        Self {
            region,
            mode,
            max_iterations,
            threshold: EscapeThreshold::default(),
            colour_law: ColourLawKinds::default(),
        }
    }

    pub fn mandelbrot() -> Result<Self, RegionError> {
        Ok(Self::new(default_region()?, EscapeMode::Mandelbrot, DEFAULT_MAX_ITERATIONS))
    }

    pub fn julia(c: Complex) -> Result<Self, RegionError> {
        let region = Region::new(Complex::new(-1.6, 1.0), Complex::new(1.6, -1.0), DEFAULT_STEP)?;

        Ok(Self::new(region, EscapeMode::Julia { c }, DEFAULT_MAX_ITERATIONS))
    }

    pub(crate) fn build_algorithm(&self) -> Result<EscapeTimeAlgorithm, EscapeTimeError> {
        EscapeTimeAlgorithm::new(self.mode, self.max_iterations, self.threshold)
    }
}
