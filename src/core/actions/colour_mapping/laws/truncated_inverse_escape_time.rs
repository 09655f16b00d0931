use crate::core::actions::colour_mapping::errors::ColourMapError;
use crate::core::actions::colour_mapping::kinds::ColourLawKinds;
use crate::core::actions::colour_mapping::laws::escape_iterations;
use crate::core::actions::colour_mapping::ports::colour_law::ColourLaw;
use crate::core::data::escape_result::EscapeResult;
use crate::core::fractals::escape_time::max_iterations::MaxIterations;

/// `(N - k) / N`, except that `k == N` maps to `1 / N` so a late escape is not confused with
/// the interior.
#[derive(Debug, Clone, Copy, Default)]
pub struct TruncatedInverseEscapeTime;

impl ColourLaw for TruncatedInverseEscapeTime {
    fn normalise(
        &self,
        result: EscapeResult,
        max_iterations: MaxIterations,
    ) -> Result<f64, ColourMapError> {
        let Some(k) = escape_iterations(result, max_iterations)? else {
            return Ok(0.0);
        };

        let n = max_iterations.get();

        if k == n {
            Ok(1.0 / f64::from(n))
        } else {
            Ok(f64::from(n - k) / f64::from(n))
        }
    }

    fn kind(&self) -> ColourLawKinds {
        ColourLawKinds::TruncatedInverseEscapeTime
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budget(n: u32) -> MaxIterations {
        MaxIterations::new(n).unwrap()
    }

    #[test]
    fn test_interior_is_zero() {
        assert_eq!(
            TruncatedInverseEscapeTime.normalise(EscapeResult::DidNotEscape, budget(10)),
            Ok(0.0)
        );
    }

    #[test]
    fn test_gradient() {
        let law = TruncatedInverseEscapeTime;

        assert_eq!(law.normalise(EscapeResult::Escaped(0), budget(10)), Ok(1.0));
        assert_eq!(law.normalise(EscapeResult::Escaped(5), budget(10)), Ok(0.5));
        assert_eq!(law.normalise(EscapeResult::Escaped(9), budget(10)), Ok(0.1));
    }

    #[test]
    fn test_escape_at_budget_is_lifted_off_zero() {
        assert_eq!(
            TruncatedInverseEscapeTime.normalise(EscapeResult::Escaped(10), budget(10)),
            Ok(0.1)
        );
    }

    #[test]
    fn test_single_iteration_budget() {
        let law = TruncatedInverseEscapeTime;

        assert_eq!(law.normalise(EscapeResult::Escaped(0), budget(1)), Ok(1.0));
        assert_eq!(law.normalise(EscapeResult::Escaped(1), budget(1)), Ok(1.0));
    }

    #[test]
    fn test_rejects_escape_beyond_budget() {
        assert!(TruncatedInverseEscapeTime
            .normalise(EscapeResult::Escaped(4), budget(3))
            .is_err());
    }
}
