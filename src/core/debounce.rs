//! # Debounced Search Input
//!
//! Holds the in-flight search draft (`local`) and the committed query
//! (`committed`). Edits only touch the draft; the draft becomes the query
//! once the debounce delay passes without another edit.
//!
//! ```text
//! edit("y")  edit("yo")  edit("yog")        300ms quiet
//!    │           │           │ ─────────────────────────▶ commit "yog"
//!    gen 1       gen 2       gen 3  (gens 1 and 2 are stale)
//! ```
//!
//! There is no timer in here. Every edit bumps a generation number and
//! hands back a [`PendingCommit`] for the shell to schedule. When the shell
//! reports that a generation elapsed, it is committed only if it is still
//! the latest one. External resets and clears also bump the generation, so
//! a timer that fires late can never overwrite them.

use std::time::Duration;

/// Quiet period before a draft becomes the committed query.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// A commit the shell should schedule after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingCommit {
    pub generation: u64,
    pub delay: Duration,
}

#[derive(Debug, Clone)]
pub struct DebouncedSearch {
    local: String,
    committed: String,
    generation: u64,
    pending: Option<u64>,
    delay: Duration,
}

impl DebouncedSearch {
    pub fn new(delay: Duration) -> Self {
        Self {
            local: String::new(),
            committed: String::new(),
            generation: 0,
            pending: None,
            delay,
        }
    }

    /// The draft as typed.
    pub fn local(&self) -> &str {
        &self.local
    }

    /// The query the catalog is filtered by.
    pub fn committed(&self) -> &str {
        &self.committed
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// True while an edit is waiting out the debounce delay.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Replaces the draft and supersedes any pending commit.
    /// Returns `None` if the draft did not change.
    pub fn edit(&mut self, text: impl Into<String>) -> Option<PendingCommit> {
        let text = text.into();
        if text == self.local {
            return None;
        }
        self.local = text;
        self.generation += 1;
        self.pending = Some(self.generation);
        Some(PendingCommit {
            generation: self.generation,
            delay: self.delay,
        })
    }

    /// The timer for `generation` fired. Commits the draft and returns it,
    /// or `None` if that generation was superseded.
    pub fn elapsed(&mut self, generation: u64) -> Option<&str> {
        if self.pending != Some(generation) {
            return None;
        }
        self.pending = None;
        self.committed.clone_from(&self.local);
        Some(&self.committed)
    }

    /// Empties the draft and commits "" right away, skipping the delay.
    pub fn clear(&mut self) {
        self.local.clear();
        self.committed.clear();
        self.generation += 1;
        self.pending = None;
    }

    /// The committed query was changed by someone else. The draft follows
    /// it immediately and any pending commit is dropped.
    pub fn sync_external(&mut self, query: impl Into<String>) {
        self.committed = query.into();
        self.local.clone_from(&self.committed);
        self.generation += 1;
        self.pending = None;
    }
}

impl Default for DebouncedSearch {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty_and_idle() {
        let search = DebouncedSearch::default();
        assert_eq!(search.local(), "");
        assert_eq!(search.committed(), "");
        assert!(!search.is_pending());
        assert_eq!(search.delay(), Duration::from_millis(300));
    }

    #[test]
    fn test_edit_does_not_commit() {
        let mut search = DebouncedSearch::default();
        let pending = search.edit("yoga").unwrap();
        assert_eq!(pending.delay, DEFAULT_DEBOUNCE);
        assert_eq!(search.local(), "yoga");
        assert_eq!(search.committed(), "");
        assert!(search.is_pending());
    }

    #[test]
    fn test_elapsed_commits_latest_draft() {
        let mut search = DebouncedSearch::default();
        let pending = search.edit("yoga").unwrap();
        assert_eq!(search.elapsed(pending.generation), Some("yoga"));
        assert_eq!(search.committed(), "yoga");
        assert!(!search.is_pending());
    }

    #[test]
    fn test_rapid_edits_commit_once_with_last_value() {
        let mut search = DebouncedSearch::default();
        let first = search.edit("y").unwrap();
        let second = search.edit("yo").unwrap();
        let third = search.edit("yog").unwrap();

        assert_eq!(search.elapsed(first.generation), None);
        assert_eq!(search.elapsed(second.generation), None);
        assert_eq!(search.elapsed(third.generation), Some("yog"));
        // Already committed; a duplicate delivery is ignored.
        assert_eq!(search.elapsed(third.generation), None);
    }

    #[test]
    fn test_unchanged_edit_schedules_nothing() {
        let mut search = DebouncedSearch::default();
        assert!(search.edit("").is_none());
        let pending = search.edit("zumba").unwrap();
        assert!(search.edit("zumba").is_none());
        assert_eq!(search.elapsed(pending.generation), Some("zumba"));
    }

    #[test]
    fn test_clear_commits_immediately_and_cancels_pending() {
        let mut search = DebouncedSearch::default();
        let pending = search.edit("salsa").unwrap();
        search.elapsed(pending.generation);
        let pending = search.edit("salsa dance").unwrap();

        search.clear();
        assert_eq!(search.local(), "");
        assert_eq!(search.committed(), "");
        assert!(!search.is_pending());
        assert_eq!(search.elapsed(pending.generation), None);
    }

    #[test]
    fn test_external_sync_overwrites_draft_without_waiting() {
        let mut search = DebouncedSearch::default();
        let pending = search.edit("draft").unwrap();

        search.sync_external("reset");
        assert_eq!(search.local(), "reset");
        assert_eq!(search.committed(), "reset");
        assert!(!search.is_pending());
        // The superseded timer can't clobber the external value.
        assert_eq!(search.elapsed(pending.generation), None);
        assert_eq!(search.committed(), "reset");
    }

    #[test]
    fn test_edit_after_sync_uses_fresh_generation() {
        let mut search = DebouncedSearch::default();
        let before = search.edit("a").unwrap();
        search.sync_external("");
        let after = search.edit("b").unwrap();
        assert!(after.generation > before.generation);
        assert_eq!(search.elapsed(after.generation), Some("b"));
    }
}
