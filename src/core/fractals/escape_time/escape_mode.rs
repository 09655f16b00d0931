use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::errors::EscapeTimeError;

/// Selects how a sample feeds the recurrence `z -> z² + c`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EscapeMode {
    /// Each sample is its own `c`; the orbit starts from zero.
    #[default]
    Mandelbrot,
    /// Each sample is the starting `z`; `c` is shared by the whole grid.
    Julia { c: Complex },
}

impl EscapeMode {
    pub fn julia(c: Complex) -> Result<Self, EscapeTimeError> {
        if !c.is_finite() {
            return Err(EscapeTimeError::NonFiniteParameter { c });
        }

        Ok(Self::Julia { c })
    }

    /// The fixed parameter `c` used when iterating `sample`.
    #[inline]
    #[must_use]
    pub fn parameter_for(self, sample: Complex) -> Complex {
        match self {
            Self::Mandelbrot => sample,
            Self::Julia { c } => c,
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia { .. } => "Julia",
        }
    }
}
