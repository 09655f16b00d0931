#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColourLawKinds {
    /// `(N - k + 1) / (N + 1)`
    #[default]
    InverseEscapeTime,
    /// `(N - k) / N`, with `k == N` lifted to `1 / N`
    TruncatedInverseEscapeTime,
}

impl ColourLawKinds {
    pub const ALL: &'static [Self] = &[Self::InverseEscapeTime, Self::TruncatedInverseEscapeTime];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::InverseEscapeTime => "Inverse escape time",
            Self::TruncatedInverseEscapeTime => "Truncated inverse escape time",
        }
    }
}

impl std::fmt::Display for ColourLawKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
