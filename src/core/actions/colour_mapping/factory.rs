use crate::core::actions::colour_mapping::kinds::ColourLawKinds;
use crate::core::actions::colour_mapping::laws::inverse_escape_time::InverseEscapeTime;
use crate::core::actions::colour_mapping::laws::truncated_inverse_escape_time::TruncatedInverseEscapeTime;
use crate::core::actions::colour_mapping::ports::colour_law::ColourLaw;

#[must_use]
pub fn colour_law_factory(kind: ColourLawKinds) -> Box<dyn ColourLaw> {
    match kind {
        ColourLawKinds::InverseEscapeTime => Box::new(InverseEscapeTime),
        ColourLawKinds::TruncatedInverseEscapeTime => Box::new(TruncatedInverseEscapeTime),
    }
}
