//! # Results Component
//!
//! Scrollable view of a `FilterOutcome`, laid out as two sections:
//!
//! ```text
//! Sessions (2)            ← ScrollTarget::Sessions
//!   • Afro Dance  @ Studio A
//!   • Yoga flow   @ Studio B
//!
//! Offers (1)              ← ScrollTarget::Offers
//!   [offer] Carte 10 séances  Valable 6 mois
//! ```
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ResultsState` (scroll offset) lives in `TuiState`
//! - `ResultsPane` is created each frame with borrowed state and outcome

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::core::catalog::ScrollTarget;
use crate::core::filter::{FilterOutcome, ItemKind, OfferVocabulary};
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

/// Lines moved by PageUp / PageDown.
const PAGE_SIZE: u16 = 10;

/// Persistent scroll state for the results pane.
#[derive(Debug, Default)]
pub struct ResultsState {
    pub offset: u16,
}

impl ResultsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a scroll key. Returns true if the event was consumed.
    pub fn handle_event(&mut self, event: &TuiEvent) -> bool {
        match event {
            TuiEvent::ScrollUp => self.offset = self.offset.saturating_sub(1),
            TuiEvent::ScrollDown => self.offset = self.offset.saturating_add(1),
            TuiEvent::ScrollPageUp => self.offset = self.offset.saturating_sub(PAGE_SIZE),
            TuiEvent::ScrollPageDown => self.offset = self.offset.saturating_add(PAGE_SIZE),
            _ => return false,
        }
        true
    }

    /// Brings a section header to the top of the pane.
    pub fn scroll_to(&mut self, target: ScrollTarget, outcome: &FilterOutcome<'_>) {
        let (sessions, offers) = section_starts(outcome);
        self.offset = match target {
            ScrollTarget::Sessions => sessions,
            ScrollTarget::Offers => offers,
        };
    }
}

/// Line index of each section header, matching `build_lines`.
pub fn section_starts(outcome: &FilterOutcome<'_>) -> (u16, u16) {
    let course_lines = outcome.filtered_course_items.len().max(1);
    // header + courses (or placeholder) + blank separator
    let offers = 1 + course_lines + 1;
    (0, to_u16(offers))
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn header(title: &str, count: usize) -> Line<'static> {
    Line::from(Span::styled(
        format!("{title} ({count})"),
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    ))
}

fn placeholder() -> Line<'static> {
    Line::from(Span::styled(
        "  (none)",
        Style::default().fg(Color::DarkGray),
    ))
}

fn kind_color(kind: ItemKind) -> Color {
    match kind {
        ItemKind::Session => Color::Cyan,
        ItemKind::Offer => Color::Yellow,
        ItemKind::Product => Color::Green,
    }
}

/// Renders both sections as lines. Header positions must agree with
/// `section_starts`.
pub fn build_lines<'a>(outcome: &FilterOutcome<'a>, vocabulary: &OfferVocabulary) -> Vec<Line<'a>> {
    let mut lines = Vec::new();

    lines.push(header("Sessions", outcome.filtered_course_items.len()));
    if outcome.filtered_course_items.is_empty() {
        lines.push(placeholder());
    }
    for course in outcome.filtered_course_items.iter().copied() {
        let mut spans = vec![Span::raw("  • "), Span::raw(course.name.as_str())];
        if let Some(location) = course.location_name.as_deref() {
            spans.push(Span::styled(
                format!("  @ {location}"),
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::default());

    lines.push(header("Offers", outcome.filtered_catalog_items.len()));
    if outcome.filtered_catalog_items.is_empty() {
        lines.push(placeholder());
    }
    for item in outcome.filtered_catalog_items.iter().copied() {
        let kind = ItemKind::classify(item, vocabulary);
        let mut spans = vec![
            Span::raw("  "),
            Span::styled(
                format!("[{}]", kind.label()),
                Style::default().fg(kind_color(kind)),
            ),
            Span::raw(" "),
            Span::raw(item.name.as_str()),
        ];
        if let Some(description) = item.description.as_deref() {
            spans.push(Span::styled(
                format!("  {description}"),
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(spans));
    }

    lines
}

/// Transient render wrapper for the results pane.
pub struct ResultsPane<'s, 'o> {
    state: &'s mut ResultsState,
    outcome: &'s FilterOutcome<'o>,
    vocabulary: &'s OfferVocabulary,
}

impl<'s, 'o> ResultsPane<'s, 'o> {
    pub fn new(
        state: &'s mut ResultsState,
        outcome: &'s FilterOutcome<'o>,
        vocabulary: &'s OfferVocabulary,
    ) -> Self {
        Self {
            state,
            outcome,
            vocabulary,
        }
    }
}

impl Component for ResultsPane<'_, '_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Results ")
            .padding(Padding::horizontal(1));

        if !self.outcome.has_results {
            self.state.offset = 0;
            let empty = Paragraph::new("No results. Try another filter or search.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let lines = build_lines(self.outcome, self.vocabulary);
        let max_offset = to_u16(lines.len()).saturating_sub(1);
        self.state.offset = self.state.offset.min(max_offset);

        let paragraph = Paragraph::new(lines)
            .block(block)
            .scroll((self.state.offset, 0));
        frame.render_widget(paragraph, area);
    }
}
