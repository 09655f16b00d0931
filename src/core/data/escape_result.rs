/// Outcome of iterating one sample against an iteration budget.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EscapeResult {
    /// The orbit left the escape radius at this iteration, in `0..=max_iterations`.
    Escaped(u32),
    /// The orbit stayed bounded for the whole budget.
    DidNotEscape,
}

impl EscapeResult {
    #[must_use]
    pub fn iterations(self) -> Option<u32> {
        match self {
            Self::Escaped(iteration) => Some(iteration),
            Self::DidNotEscape => None,
        }
    }

    #[must_use]
    pub fn escaped(self) -> bool {
        matches!(self, Self::Escaped(_))
    }
}

impl From<Option<u32>> for EscapeResult {
    fn from(iterations: Option<u32>) -> Self {
        iterations.map_or(Self::DidNotEscape, Self::Escaped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iterations() {
        assert_eq!(EscapeResult::Escaped(0).iterations(), Some(0));
        assert_eq!(EscapeResult::DidNotEscape.iterations(), None);
    }

    #[test]
    fn test_did_not_escape_is_distinct_from_every_count() {
        assert!(!EscapeResult::DidNotEscape.escaped());
        assert!(EscapeResult::Escaped(u32::MAX).escaped());
        assert_ne!(EscapeResult::DidNotEscape, EscapeResult::Escaped(0));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(EscapeResult::from(Some(7)), EscapeResult::Escaped(7));
        assert_eq!(EscapeResult::from(None), EscapeResult::DidNotEscape);
    }
}
