//! # TitleBar Component
//!
//! Top status bar: catalog name, committed query, result counts and the
//! transient status message.
//!
//! ## Conditional Formatting
//!
//! 1. **Query committed**: `"catalog.json | search: \"yoga\" | 2 courses, 3 items"`
//! 2. **No query**: `"catalog.json | 2 courses, 3 items"`
//! 3. **Status message** is appended last when non-empty, so the counts stay
//!    visible on narrow terminals.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

/// Top status bar. All fields are props.
pub struct TitleBar {
    /// Where the catalog came from
    pub source_name: String,
    /// Committed search query
    pub query: String,
    pub course_count: usize,
    pub catalog_count: usize,
    /// Status message (e.g. "Filter: Shop", "Reload failed: ...")
    pub status_message: String,
}

impl TitleBar {
    pub fn text(&self) -> String {
        let mut text = self.source_name.clone();
        if !self.query.trim().is_empty() {
            text.push_str(&format!(" | search: {:?}", self.query));
        }
        text.push_str(&format!(
            " | {} courses, {} items",
            self.course_count, self.catalog_count
        ));
        if !self.status_message.is_empty() {
            text.push_str(" | ");
            text.push_str(&self.status_message);
        }
        text
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let span = Span::styled(self.text(), Style::default().fg(Color::Gray));
        frame.render_widget(span, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title_bar(query: &str, status: &str) -> TitleBar {
        TitleBar {
            source_name: "catalog.json".to_string(),
            query: query.to_string(),
            course_count: 2,
            catalog_count: 3,
            status_message: status.to_string(),
        }
    }

    #[test]
    fn test_text_without_query() {
        assert_eq!(title_bar("", "").text(), "catalog.json | 2 courses, 3 items");
    }

    #[test]
    fn test_text_with_query_and_status() {
        assert_eq!(
            title_bar("yoga", "Filter: Shop").text(),
            "catalog.json | search: \"yoga\" | 2 courses, 3 items | Filter: Shop"
        );
    }

    #[test]
    fn test_whitespace_query_is_hidden() {
        assert_eq!(title_bar("   ", "").text(), "catalog.json | 2 courses, 3 items");
    }
}
