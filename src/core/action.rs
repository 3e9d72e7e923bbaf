//! # Actions
//!
//! Everything that can happen in the browser becomes an `Action`.
//! User clicks a filter chip? That's `Action::SelectFilter(id)`.
//! Debounce timer fires? That's `Action::DebounceElapsed(generation)`.
//!
//! The `update()` function applies an action to the state and returns the
//! `Effect` the shell has to carry out. No side effects here; timers and
//! rendering happen elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::core::catalog::{FilterId, ScrollTarget};
use crate::core::debounce::PendingCommit;
use crate::core::state::NavigationState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A filter chip was selected.
    SelectFilter(FilterId),
    /// The search draft changed (keystroke, paste, backspace).
    EditSearch(String),
    /// The clear button: empty the draft and commit right away.
    ClearSearch,
    /// The debounce timer for this generation fired.
    DebounceElapsed(u64),
    /// The committed query was set from outside the search box.
    SetSearchQuery(String),
    Quit,
}

/// What the shell has to do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Cancel any running debounce timer and start this one.
    ScheduleCommit(PendingCommit),
    /// Cancel any running debounce timer.
    CancelCommit,
    /// The committed query changed; notify observers and re-filter.
    QueryCommitted(String),
    /// The new filter wants this section in view.
    ScrollTo(ScrollTarget),
    Quit,
}

pub fn update(state: &mut NavigationState, action: Action) -> Effect {
    match action {
        Action::SelectFilter(filter) => {
            debug!("Filter selected: {}", filter);
            state.active_filter = filter;
            state.status_message = format!("Filter: {}", filter.label());
            match filter.scroll_target() {
                Some(target) => Effect::ScrollTo(target),
                None => Effect::None,
            }
        }
        Action::EditSearch(text) => match state.search.edit(text) {
            Some(pending) => Effect::ScheduleCommit(pending),
            None => Effect::None,
        },
        Action::ClearSearch => {
            state.search.clear();
            state.status_message.clear();
            Effect::QueryCommitted(String::new())
        }
        Action::DebounceElapsed(generation) => match state.search.elapsed(generation) {
            Some(query) => {
                debug!("Search committed: {:?}", query);
                Effect::QueryCommitted(query.to_string())
            }
            None => {
                debug!("Ignoring stale debounce generation {}", generation);
                Effect::None
            }
        },
        Action::SetSearchQuery(query) => {
            state.search.sync_external(query);
            Effect::CancelCommit
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit_generation(effect: &Effect) -> u64 {
        match effect {
            Effect::ScheduleCommit(pending) => pending.generation,
            other => panic!("expected ScheduleCommit, got {other:?}"),
        }
    }

    #[test]
    fn test_select_filter_resolves_scroll_target() {
        let mut state = NavigationState::default();
        assert_eq!(
            update(&mut state, Action::SelectFilter(FilterId::Sessions)),
            Effect::ScrollTo(ScrollTarget::Sessions)
        );
        assert_eq!(
            update(&mut state, Action::SelectFilter(FilterId::Shop)),
            Effect::ScrollTo(ScrollTarget::Offers)
        );
        assert_eq!(state.active_filter, FilterId::Shop);
        assert_eq!(update(&mut state, Action::SelectFilter(FilterId::All)), Effect::None);
    }

    #[test]
    fn test_select_unknown_filter_behaves_as_all() {
        let mut state = NavigationState::new(FilterId::Offers, Default::default());
        let effect = update(&mut state, Action::SelectFilter(FilterId::parse("landing")));
        assert_eq!(effect, Effect::None);
        assert_eq!(state.active_filter, FilterId::All);
    }

    #[test]
    fn test_edit_then_elapsed_commits() {
        let mut state = NavigationState::default();
        let effect = update(&mut state, Action::EditSearch("yoga".into()));
        let generation = commit_generation(&effect);
        assert_eq!(state.search_query(), "");

        let effect = update(&mut state, Action::DebounceElapsed(generation));
        assert_eq!(effect, Effect::QueryCommitted("yoga".into()));
        assert_eq!(state.search_query(), "yoga");
    }

    #[test]
    fn test_three_edits_commit_once() {
        let mut state = NavigationState::default();
        let generations: Vec<u64> = ["c", "ca", "car"]
            .into_iter()
            .map(|text| commit_generation(&update(&mut state, Action::EditSearch(text.into()))))
            .collect();

        let commits: Vec<Effect> = generations
            .into_iter()
            .map(|generation| update(&mut state, Action::DebounceElapsed(generation)))
            .filter(|effect| matches!(effect, Effect::QueryCommitted(_)))
            .collect();
        assert_eq!(commits, vec![Effect::QueryCommitted("car".into())]);
    }

    #[test]
    fn test_clear_commits_empty_immediately() {
        let mut state = NavigationState::default();
        let generation = commit_generation(&update(&mut state, Action::EditSearch("hip".into())));
        assert_eq!(update(&mut state, Action::ClearSearch), Effect::QueryCommitted(String::new()));
        assert_eq!(state.local_search(), "");
        assert_eq!(update(&mut state, Action::DebounceElapsed(generation)), Effect::None);
    }

    #[test]
    fn test_external_query_syncs_draft() {
        let mut state = NavigationState::default();
        update(&mut state, Action::EditSearch("draft".into()));
        let effect = update(&mut state, Action::SetSearchQuery("".into()));
        assert_eq!(effect, Effect::CancelCommit);
        assert_eq!(state.local_search(), "");
        assert_eq!(state.search_query(), "");
    }

    #[test]
    fn test_quit() {
        let mut state = NavigationState::default();
        assert_eq!(update(&mut state, Action::Quit), Effect::Quit);
    }
}
