//! # Core Navigation Logic
//!
//! This module contains the browser's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (filter, query)│
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • filter::apply()      │
//!                    │                         │
//!                    │  No UI. No timers.      │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │ `filter`   │      │ scheduler  │
//!     │  Adapter   │      │ subcommand │      │ (tokio     │
//!     │ (ratatui)  │      │  (JSON)    │      │  timers)   │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: items, snapshots, filter ids, scroll anchors
//! - [`filter`]: the category + text predicates
//! - [`debounce`]: search draft vs. committed query
//! - [`state`]: `NavigationState`, everything the browser remembers
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: config file and override resolution
//! - [`source`]: where snapshots come from

pub mod action;
pub mod catalog;
pub mod config;
pub mod debounce;
pub mod filter;
pub mod source;
pub mod state;
