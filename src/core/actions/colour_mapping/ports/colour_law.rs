use crate::core::actions::colour_mapping::errors::ColourMapError;
use crate::core::actions::colour_mapping::kinds::ColourLawKinds;
use crate::core::data::escape_result::EscapeResult;
use crate::core::fractals::escape_time::max_iterations::MaxIterations;

/// Maps one escape result onto a value in `[0, 1]`.
pub trait ColourLaw: Send + Sync {
    fn normalise(
        &self,
        result: EscapeResult,
        max_iterations: MaxIterations,
    ) -> Result<f64, ColourMapError>;

    fn kind(&self) -> ColourLawKinds;

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl ColourLaw for Box<dyn ColourLaw> {
    fn normalise(
        &self,
        result: EscapeResult,
        max_iterations: MaxIterations,
    ) -> Result<f64, ColourMapError> {
        (**self).normalise(result, max_iterations)
    }

    fn kind(&self) -> ColourLawKinds {
        (**self).kind()
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}
