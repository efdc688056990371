//! Government scheme lookup panel.
//!
//! Filtering is pure and synchronous; the panel only remembers the search
//! term and category and recomputes the visible set on demand.

use std::sync::{Arc, Mutex};

use serde::Serialize;
use tracing::debug;

use super::lock;
use crate::data::schemes::{CategoryFilter, SCHEMES, Scheme, SchemeCategory};

#[cfg(test)]
#[path = "schemes_test.rs"]
mod tests;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SchemesState {
    pub search: String,
    pub category: CategoryFilter,
}

#[derive(Clone, Default)]
pub struct SchemesPanel {
    state: Arc<Mutex<SchemesState>>,
}

impl SchemesPanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn snapshot(&self) -> SchemesState {
        lock(&self.state).clone()
    }

    pub fn set_search(&self, term: impl Into<String>) {
        let term = term.into();
        debug!(panel = "schemes", %term, "search changed");
        lock(&self.state).search = term;
    }

    pub fn set_category(&self, category: CategoryFilter) {
        debug!(panel = "schemes", category = category.label(), "category changed");
        lock(&self.state).category = category;
    }

    /// Schemes matching the current search term and category.
    #[must_use]
    pub fn visible(&self) -> Vec<&'static Scheme> {
        let state = self.snapshot();
        filter_schemes(SCHEMES, &state.search, state.category)
    }

    /// Selector entries: "all" followed by every category.
    #[must_use]
    pub fn categories() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(SchemeCategory::ALL.into_iter().map(CategoryFilter::Only))
            .collect()
    }
}

/// Keep schemes whose name, localized name or description contains `search`
/// (case-insensitive) and whose category passes `category`.
///
/// An empty term matches everything. Applying the same filter to its own
/// output returns the same set.
pub fn filter_schemes<'a>(
    schemes: impl IntoIterator<Item = &'a Scheme>,
    search: &str,
    category: CategoryFilter,
) -> Vec<&'a Scheme> {
    let needle = search.to_lowercase();
    schemes
        .into_iter()
        .filter(|scheme| {
            let matches_search = scheme.name.to_lowercase().contains(&needle)
                || scheme.localized_name.to_lowercase().contains(&needle)
                || scheme.description.to_lowercase().contains(&needle);
            matches_search && category.matches(scheme.category)
        })
        .collect()
}
