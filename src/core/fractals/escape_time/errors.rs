use crate::core::data::complex::Complex;
use std::{error::Error, fmt};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum EscapeTimeError {
    ZeroMaxIterationsError,
    InvalidThreshold { radius: f64 },
    NonFiniteParameter { c: Complex },
}

impl fmt::Display for EscapeTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::InvalidThreshold { radius } => {
                write!(f, "escape radius must be a positive finite number: {}", radius)
            }
            Self::NonFiniteParameter { c } => {
                write!(f, "julia parameter must be finite: {}", c)
            }
        }
    }
}

impl Error for EscapeTimeError {}
