//! # Navigation State
//!
//! Everything the browser remembers between events. Pure data: no catalog
//! contents, no timers, no UI types.
//!
//! ```text
//! NavigationState
//! ├── active_filter: FilterId     // selected category chip
//! ├── search: DebouncedSearch     // draft + committed query
//! └── status_message: String      // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::time::Duration;

use crate::core::catalog::{CatalogSnapshot, FilterId};
use crate::core::config::ResolvedConfig;
use crate::core::debounce::DebouncedSearch;
use crate::core::filter::{self, FilterOutcome, OfferVocabulary};

pub struct NavigationState {
    pub active_filter: FilterId,
    pub search: DebouncedSearch,
    pub status_message: String,
}

impl NavigationState {
    pub fn new(default_section: FilterId, debounce: Duration) -> Self {
        Self {
            active_filter: default_section,
            search: DebouncedSearch::new(debounce),
            status_message: String::new(),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.default_section, config.debounce)
    }

    /// The committed query.
    pub fn search_query(&self) -> &str {
        self.search.committed()
    }

    /// The draft as currently typed.
    pub fn local_search(&self) -> &str {
        self.search.local()
    }

    /// Filters `snapshot` by the active filter and the committed query.
    pub fn outcome<'a>(
        &self,
        snapshot: &'a CatalogSnapshot,
        vocabulary: &OfferVocabulary,
    ) -> FilterOutcome<'a> {
        filter::apply_snapshot(self.active_filter, self.search_query(), vocabulary, snapshot)
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(FilterId::default(), crate::core::debounce::DEFAULT_DEBOUNCE)
    }
}
