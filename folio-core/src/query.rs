//! Portfolio list filtering by category, tech stack and free-text search.

use folio_model::{Facet, PortfolioItem};

/// Query parameter mirrored from the category facet.
pub const CATEGORY_QUERY_KEY: &str = "category";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortfolioFilters {
    pub category: Facet,
    /// Carried for the filter bar; items do not expose a tech stack yet, so
    /// this facet never excludes anything.
    pub tech_stack: Facet,
    pub search_query: String,
}

impl PortfolioFilters {
    /// Seed from the `category` query parameter.
    pub fn from_query(category: Option<&str>) -> Self {
        Self {
            category: category.map(Facet::parse).unwrap_or_default(),
            ..Self::default()
        }
    }

    pub fn set_category(&mut self, category: &str) {
        self.category = Facet::parse(category);
    }

    pub fn set_tech_stack(&mut self, tech_stack: &str) {
        self.tech_stack = Facet::parse(tech_stack);
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn has_active_filters(&self) -> bool {
        !self.category.is_all()
            || !self.tech_stack.is_all()
            || !self.search_query.is_empty()
    }

    /// Value for the `category` query parameter; `None` removes it.
    pub fn category_query(&self) -> Option<&str> {
        match &self.category {
            Facet::All => None,
            Facet::Only(value) => Some(value),
        }
    }

    pub fn matches(&self, item: &PortfolioItem) -> bool {
        if !self.category.matches(&item.category) {
            return false;
        }
        if self.search_query.is_empty() {
            return true;
        }
        let needle = self.search_query.to_lowercase();
        item.title.to_lowercase().contains(&needle)
            || item.category.to_lowercase().contains(&needle)
            || item
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
    }

    /// Items passing every facet, in their original order.
    pub fn apply<'a>(&self, items: &'a [PortfolioItem]) -> Vec<&'a PortfolioItem> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

/// Distinct categories in first-seen order, for the filter bar.
pub fn available_categories(items: &[PortfolioItem]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for item in items {
        if !seen.iter().any(|c| c.eq_ignore_ascii_case(&item.category)) {
            seen.push(&item.category);
        }
    }
    seen
}
