use std::fmt;

/// Sentinel the site uses for "no restriction" on a filter facet.
pub const ALL: &str = "all";

/// One filter facet: either unrestricted or pinned to a single value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Facet {
    #[default]
    All,
    Only(String),
}

impl Facet {
    /// Parses a facet value; empty strings and `"all"` (any case) map to
    /// [`Facet::All`].
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL) {
            Facet::All
        } else {
            Facet::Only(trimmed.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Facet::All)
    }

    /// Case-insensitive equality against a concrete value.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Facet::All => true,
            Facet::Only(expected) => expected.to_lowercase() == value.to_lowercase(),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Facet::All => ALL,
            Facet::Only(value) => value,
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Facet {
    fn from(value: &str) -> Self {
        Facet::parse(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_sentinel_is_case_insensitive() {
        assert_eq!(Facet::parse("ALL"), Facet::All);
        assert_eq!(Facet::parse("  "), Facet::All);
        assert_eq!(Facet::parse("Wedding Studio").as_str(), "Wedding Studio");
    }

    #[test]
    fn matches_ignores_case() {
        let facet = Facet::parse("gym website");
        assert!(facet.matches("Gym Website"));
        assert!(!facet.matches("Digital Agency"));
        assert!(Facet::All.matches("anything"));
    }
}
