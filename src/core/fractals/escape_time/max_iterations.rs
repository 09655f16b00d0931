use crate::core::fractals::escape_time::errors::EscapeTimeError;
use std::fmt;

/// Iteration budget; always at least one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MaxIterations(u32);

impl MaxIterations {
    pub fn new(max_iterations: u32) -> Result<Self, EscapeTimeError> {
        if max_iterations == 0 {
            return Err(EscapeTimeError::ZeroMaxIterationsError);
        }

        Ok(Self(max_iterations))
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for MaxIterations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_iterations_must_be_greater_than_zero() {
        assert_eq!(
            MaxIterations::new(0),
            Err(EscapeTimeError::ZeroMaxIterationsError)
        );
    }

    #[test]
    fn test_valid_max_iterations() {
        assert_eq!(MaxIterations::new(1).unwrap().get(), 1);
        assert_eq!(MaxIterations::new(256).unwrap().get(), 256);
    }
}
