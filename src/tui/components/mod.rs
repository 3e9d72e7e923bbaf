//! # TUI Components
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: source, committed query, counts, status
//! - `FilterBar`: category chips with the active one highlighted
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `SearchBox`: search draft editor, emits `SearchEvent`
//! - `ResultsPane` / `ResultsState`: scrollable sessions + offers sections
//!
//! Components receive external data as props; none of them reads
//! `NavigationState` directly.
//!
//! ```text
//! components/
//! ├── mod.rs         (this file)
//! ├── title_bar.rs   (Top status bar)
//! ├── filter_bar.rs  (Category chips)
//! ├── search_box.rs  (Search draft input)
//! └── results.rs     (Filtered sessions and offers)
//! ```

pub mod filter_bar;
pub mod results;
pub mod search_box;
mod title_bar;

pub use filter_bar::FilterBar;
pub use results::{ResultsPane, ResultsState};
pub use search_box::{SearchBox, SearchEvent};
pub use title_bar::TitleBar;
