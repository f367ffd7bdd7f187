use std::fmt;

/// Stable slug identifying a portfolio entry (e.g. `"photographer"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PortfolioItemId(pub String);

impl PortfolioItemId {
    pub fn new(slug: impl Into<String>) -> Self {
        PortfolioItemId(slug.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PortfolioItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PortfolioItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PortfolioItemId {
    fn from(value: &str) -> Self {
        PortfolioItemId(value.to_string())
    }
}
