//! # SearchBox Component
//!
//! Single-line search field. The text shown is the search draft
//! (`localSearch`); the box mirrors it as a prop every frame so an external
//! reset shows up immediately.
//!
//! ## Responsibilities
//!
//! - Append typed and pasted characters, delete with Backspace
//! - Emit the whole new draft on every change (`SearchEvent::Edited`)
//! - Esc clears (`SearchEvent::Cleared`), which commits without waiting
//! - Show a placeholder when empty and a marker while a commit is pending
//!
//! The cursor always sits at the end of the text.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const PLACEHOLDER: &str = "Search an offer...";

/// High-level events emitted by the SearchBox
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// The draft changed; carries the full new text.
    Edited(String),
    /// The user cleared the field.
    Cleared,
}

pub struct SearchBox {
    /// Search draft (Prop, synced from NavigationState)
    pub text: String,
    /// Whether a debounced commit is waiting (Prop)
    pub pending: bool,
}

impl SearchBox {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            pending: false,
        }
    }
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = if self.pending {
            " Search … "
        } else {
            " Search (Esc to clear) "
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(title);

        let paragraph = if self.text.is_empty() {
            Paragraph::new(PLACEHOLDER).style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            Paragraph::new(self.text.as_str()).style(Style::default().fg(Color::White))
        };
        frame.render_widget(paragraph.block(block), area);

        // Inside the border, after the text
        let column = cursor_column(&self.text, area.width.saturating_sub(2));
        frame.set_cursor_position((area.x + 1 + column, area.y + 1));
    }
}

/// Cursor column after `text`, clamped to the last cell of `inner_width`.
fn cursor_column(text: &str, inner_width: u16) -> u16 {
    u16::try_from(text.width())
        .unwrap_or(u16::MAX)
        .min(inner_width.saturating_sub(1))
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.text.push(*c);
                Some(SearchEvent::Edited(self.text.clone()))
            }
            TuiEvent::Paste(pasted) => {
                // Single-line field: newlines become spaces
                let flattened: String = pasted
                    .chars()
                    .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                    .collect();
                if flattened.is_empty() {
                    return None;
                }
                self.text.push_str(&flattened);
                Some(SearchEvent::Edited(self.text.clone()))
            }
            TuiEvent::Backspace => self
                .text
                .pop()
                .map(|_| SearchEvent::Edited(self.text.clone())),
            TuiEvent::Escape => {
                self.text.clear();
                Some(SearchEvent::Cleared)
            }
            _ => None,
        }
    }
}
