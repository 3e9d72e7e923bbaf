//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the browser,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Each turn of the loop:
//!
//! 1. Drains debounce deliveries from the timer channel and reload results.
//! 2. Redraws if anything changed.
//! 3. Polls the terminal (50ms) and dispatches every pending event.
//!
//! The short poll keeps a committed search visible within a frame or two of
//! the debounce delay elapsing.

mod component;
mod components;
mod event;
mod ui;

use log::{info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::core::action::{Action, Effect};
use crate::core::catalog::CatalogSnapshot;
use crate::core::config::ResolvedConfig;
use crate::core::filter::OfferVocabulary;
use crate::core::source::{CatalogSource, SourceError};
use crate::core::state::NavigationState;
use crate::scheduler::{DebounceTimer, dispatch};
use crate::tui::component::EventHandler;
use crate::tui::components::{ResultsState, SearchBox, SearchEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

type ReloadResult = Result<CatalogSnapshot, SourceError>;

/// TUI-specific presentation state (not part of core navigation state)
pub struct TuiState {
    pub search_box: SearchBox,
    pub results: ResultsState,
    pub source_name: String,
}

impl TuiState {
    pub fn new(source_name: String) -> Self {
        Self {
            search_box: SearchBox::new(),
            results: ResultsState::new(),
            source_name,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

/// Everything the loop owns besides the terminal.
struct Browser {
    state: NavigationState,
    tui: TuiState,
    snapshot: CatalogSnapshot,
    vocabulary: OfferVocabulary,
    source: Arc<dyn CatalogSource>,
    timer: DebounceTimer,
    timer_rx: UnboundedReceiver<Action>,
    reload_tx: mpsc::Sender<ReloadResult>,
    reload_rx: mpsc::Receiver<ReloadResult>,
}

impl Browser {
    /// Dispatches an action and reacts to its effect.
    /// Returns true if the browser should quit.
    fn apply(&mut self, action: Action) -> bool {
        let effect = dispatch(&mut self.state, &mut self.timer, action);
        match effect {
            Effect::ScrollTo(target) => {
                let outcome = self.state.outcome(&self.snapshot, &self.vocabulary);
                self.tui.results.scroll_to(target, &outcome);
            }
            Effect::QueryCommitted(_) => {
                // Keep the active section in view as the results change
                let outcome = self.state.outcome(&self.snapshot, &self.vocabulary);
                match self.state.active_filter.scroll_target() {
                    Some(target) => self.tui.results.scroll_to(target, &outcome),
                    None => self.tui.results.offset = 0,
                }
            }
            Effect::Quit => return true,
            Effect::None | Effect::ScheduleCommit(_) | Effect::CancelCommit => {}
        }
        false
    }

    fn spawn_reload(&mut self) {
        let source = Arc::clone(&self.source);
        let tx = self.reload_tx.clone();
        self.state.status_message = "Reloading...".to_string();
        tokio::spawn(async move {
            let _ = tx.send(source.load().await);
        });
    }

    /// Applies background results. Returns true if anything arrived.
    fn drain_background(&mut self) -> bool {
        let mut changed = false;
        while let Ok(action) = self.timer_rx.try_recv() {
            self.apply(action);
            changed = true;
        }
        while let Ok(result) = self.reload_rx.try_recv() {
            match result {
                Ok(snapshot) => {
                    self.state.status_message = format!(
                        "Reloaded {} offers, {} courses",
                        snapshot.offers.len(),
                        snapshot.courses.len()
                    );
                    self.snapshot = snapshot;
                }
                Err(e) => {
                    warn!("Reload failed: {}", e);
                    self.state.status_message = format!("Reload failed: {}", e);
                }
            }
            changed = true;
        }
        changed
    }

    /// Routes one terminal event. Returns true if the browser should quit.
    fn handle_event(&mut self, event: TuiEvent) -> bool {
        match event {
            TuiEvent::Resize => false,
            TuiEvent::ForceQuit => self.apply(Action::Quit),
            TuiEvent::NextFilter => {
                let filter = self.state.active_filter.next();
                self.apply(Action::SelectFilter(filter))
            }
            TuiEvent::PrevFilter => {
                let filter = self.state.active_filter.prev();
                self.apply(Action::SelectFilter(filter))
            }
            TuiEvent::Reload => {
                self.spawn_reload();
                false
            }
            other => {
                if self.tui.results.handle_event(&other) {
                    return false;
                }
                match self.tui.search_box.handle_event(&other) {
                    Some(SearchEvent::Edited(text)) => self.apply(Action::EditSearch(text)),
                    Some(SearchEvent::Cleared) => self.apply(Action::ClearSearch),
                    None => false,
                }
            }
        }
    }

    fn draw(&mut self, terminal: &mut DefaultTerminal) -> std::io::Result<()> {
        // Props: the search box always shows the core's draft
        self.tui.search_box.text = self.state.local_search().to_string();
        self.tui.search_box.pending = self.state.search.is_pending();
        terminal.draw(|f| {
            ui::draw_ui(f, &self.state, &mut self.tui, &self.snapshot, &self.vocabulary)
        })?;
        Ok(())
    }
}

/// Runs the interactive browser until Ctrl+C.
///
/// `initial` is the first load from `source`; a failed load starts with an
/// empty catalog and the error in the status bar. Must be called from within
/// a tokio runtime (debounce timers and reloads are spawned on it).
pub fn run(
    config: ResolvedConfig,
    source: Arc<dyn CatalogSource>,
    initial: ReloadResult,
) -> std::io::Result<()> {
    let mut state = NavigationState::from_config(&config);
    let snapshot = match initial {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!("Starting with an empty catalog: {}", e);
            state.status_message = format!("Load failed: {}", e);
            CatalogSnapshot::default()
        }
    };

    let (timer_tx, timer_rx) = tokio::sync::mpsc::unbounded_channel();
    let (reload_tx, reload_rx) = mpsc::channel();

    let mut browser = Browser {
        state,
        tui: TuiState::new(source.name()),
        snapshot,
        vocabulary: config.offer_vocabulary.clone(),
        source,
        timer: DebounceTimer::new(timer_tx),
        timer_rx,
        reload_tx,
        reload_rx,
    };

    // Land on the configured section
    if let Some(target) = browser.state.active_filter.scroll_target() {
        let outcome = browser.state.outcome(&browser.snapshot, &browser.vocabulary);
        browser.tui.results.scroll_to(target, &outcome);
    }

    let mut terminal = ratatui::init();
    let terminal_mode_guard = TerminalModeGuard::new();
    if let Err(e) = &terminal_mode_guard {
        warn!("Failed to enable terminal modes: {}", e);
    }

    let result = event_loop(&mut terminal, &mut browser);

    drop(terminal_mode_guard);
    ratatui::restore();
    info!("Browser closed");
    result
}

fn event_loop(terminal: &mut DefaultTerminal, browser: &mut Browser) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if browser.drain_background() {
            needs_redraw = true;
        }

        if needs_redraw {
            browser.draw(terminal)?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(Duration::from_millis(50));
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if browser.handle_event(event) {
                return Ok(());
            }
        }
    }
}
