use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::catalog::CatalogSnapshot;
use crate::core::filter::OfferVocabulary;
use crate::core::state::NavigationState;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{FilterBar, ResultsPane, TitleBar};

pub fn draw_ui(
    frame: &mut Frame,
    state: &NavigationState,
    tui: &mut TuiState,
    snapshot: &CatalogSnapshot,
    vocabulary: &OfferVocabulary,
) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(3), Length(3), Min(0)]);
    let [title_area, filter_area, search_area, results_area] = layout.areas(frame.area());

    let outcome = state.outcome(snapshot, vocabulary);

    let mut title_bar = TitleBar {
        source_name: tui.source_name.clone(),
        query: state.search_query().to_string(),
        course_count: outcome.filtered_course_items.len(),
        catalog_count: outcome.filtered_catalog_items.len(),
        status_message: state.status_message.clone(),
    };
    title_bar.render(frame, title_area);

    FilterBar::new(state.active_filter).render(frame, filter_area);

    ResultsPane::new(&mut tui.results, &outcome, vocabulary).render(frame, results_area);

    // Last, so the cursor position it sets sticks
    tui.search_box.render(frame, search_area);
}
