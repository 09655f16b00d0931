use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

/// Upper bound on the number of samples one region may produce.
pub const MAX_GRID_CELLS: usize = 1 << 28;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RegionError {
    NonPositiveStep { step: f64 },
    NonFiniteCorner { corner: Complex },
    TooManyCells { rows: usize, cols: usize },
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveStep { step } => {
                write!(f, "region step must be a positive finite number: {}", step)
            }
            Self::NonFiniteCorner { corner } => {
                write!(f, "region corner must be finite: {}", corner)
            }
            Self::TooManyCells { rows, cols } => {
                write!(
                    f,
                    "region samples to {}x{} cells, more than the limit of {}",
                    rows, cols, MAX_GRID_CELLS
                )
            }
        }
    }
}

impl Error for RegionError {}

/// Number of points `i * step` lying in `[0, extent)`. A non-positive extent gives zero.
#[must_use]
pub fn axis_len(extent: f64, step: f64) -> usize {
    if extent <= 0.0 {
        return 0;
    }

    // float-to-int `as` saturates
    (extent / step).ceil() as usize
}

/// A rectangle of the complex plane sampled at a fixed step.
///
/// Real parts grow to the right from `top_left.real` (inclusive) towards `bottom_right.real`
/// (exclusive); a region whose right edge is not past its left edge samples to zero columns.
/// Imaginary parts shrink downwards from the upper edge (inclusive) towards the lower edge
/// (exclusive), whichever corner carries them.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Region {
    top_left: Complex,
    bottom_right: Complex,
    step: f64,
    rows: usize,
    cols: usize,
}

impl Region {
    pub fn new(top_left: Complex, bottom_right: Complex, step: f64) -> Result<Self, RegionError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(RegionError::NonPositiveStep { step });
        }

        for corner in [top_left, bottom_right] {
            if !corner.is_finite() {
                return Err(RegionError::NonFiniteCorner { corner });
            }
        }

        let mut region = Self {
            top_left,
            bottom_right,
            step,
            rows: 0,
            cols: 0,
        };

        let rows = axis_len(region.height(), step);
        let cols = axis_len(region.width(), step);

        // each axis is checked on its own so an empty axis cannot hide a huge one
        let within_limit = rows <= MAX_GRID_CELLS
            && cols <= MAX_GRID_CELLS
            && rows.checked_mul(cols).is_some_and(|cells| cells <= MAX_GRID_CELLS);

        if !within_limit {
            return Err(RegionError::TooManyCells { rows, cols });
        }

        region.rows = rows;
        region.cols = cols;
        Ok(region)
    }

    #[must_use]
    pub fn top_left(&self) -> Complex {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Complex {
        self.bottom_right
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.bottom_right.real - self.top_left.real
    }

    #[must_use]
    pub fn upper_imag(&self) -> f64 {
        self.top_left.imag.max(self.bottom_right.imag)
    }

    #[must_use]
    pub fn lower_imag(&self) -> f64 {
        self.top_left.imag.min(self.bottom_right.imag)
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.upper_imag() - self.lower_imag()
    }

    /// `(rows, cols)` of the grid this region samples to.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}
