use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::errors::EscapeTimeError;

pub const DEFAULT_ESCAPE_RADIUS: f64 = 2.0;

/// Radius an orbit must exceed to count as escaped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EscapeThreshold {
    /// Escape when `|z| > radius`.
    Fixed { radius: f64 },
    /// Escape when `|z| > max(|c|, 2)`, where `c` is the fixed parameter of the orbit.
    Adaptive,
}

impl Default for EscapeThreshold {
    fn default() -> Self {
        Self::Fixed {
            radius: DEFAULT_ESCAPE_RADIUS,
        }
    }
}

impl EscapeThreshold {
    pub fn fixed(radius: f64) -> Result<Self, EscapeTimeError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(EscapeTimeError::InvalidThreshold { radius });
        }

        Ok(Self::Fixed { radius })
    }

    /// Squared radius for an orbit with fixed parameter `c`, so tests can skip the square root.
    #[inline]
    #[must_use]
    pub fn radius_squared(self, c: Complex) -> f64 {
        match self {
            Self::Fixed { radius } => radius * radius,
            Self::Adaptive => c
                .magnitude_squared()
                .max(DEFAULT_ESCAPE_RADIUS * DEFAULT_ESCAPE_RADIUS),
        }
    }
}
