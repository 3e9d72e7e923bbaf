//! # FilterBar Component
//!
//! Row of category chips (All / Sessions / Offers / Shop) with the active
//! one highlighted. Stateless: the active filter is a prop from
//! `NavigationState`, and Tab / Shift+Tab are translated into
//! `Action::SelectFilter` by the event loop, not here.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Tabs};

use crate::core::catalog::FilterId;
use crate::tui::component::Component;

pub struct FilterBar {
    /// Currently selected filter (Prop)
    pub active: FilterId,
}

impl FilterBar {
    pub fn new(active: FilterId) -> Self {
        Self { active }
    }
}

impl Component for FilterBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let titles: Vec<Line> = FilterId::ALL
            .iter()
            .map(|filter| Line::from(format!(" {} ", filter.label())))
            .collect();

        let tabs = Tabs::new(titles)
            .block(Block::bordered().title(" Filters (Tab) "))
            .select(self.active.index())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            )
            .divider("│");

        frame.render_widget(tabs, area);
    }
}
