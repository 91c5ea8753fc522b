//! # Blog Grid
//!
//! A blog listing widget: a static JSON feed of posts rendered as a
//! paginated grid with category chips and a free-text search.
//!
//! # Architecture: One-Way Pipeline
//!
//! The feed is loaded once. After that, every interaction runs the same
//! one-directional pipeline:
//!
//! ```text
//! Action  →  BlogState       (select category / search / go to page)
//!         →  visible set     (category filter, then search filter)
//!         →  regions         (categories, grid → pagination)
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`load`] | Fetches and parses the feed; failures fall back to an empty list |
//! | [`filter`] | Category and search filters producing the visible set |
//! | [`categories`] | Distinct categories with post counts, for the chips |
//! | [`paginate`] | Page math and the windowed pagination strip |
//! | [`render`] | Maud markup for chips, cards, pagination and the standalone page |
//! | [`widget`] | State, host mount points, action dispatch and the public [`widget::BlogManager`] surface |
//! | [`config`] | `config.toml` loading and validation |
//! | [`types`] | Feed records and the category selection |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Explicit State, No Globals
//!
//! All mutable state lives in [`widget::BlogState`], owned by one
//! [`widget::BlogWidget`]. Independent widgets (and tests) never share state.
//!
//! ## Dispatch Table Over Event Delegation
//!
//! Clicks and input are decoded into [`widget::Action`] values and applied by
//! [`widget::BlogWidget::dispatch`]. Nothing needs a live document to test.
//!
//! ## Full Re-render
//!
//! Each state change replaces whole regions. At blog scale this is cheap and
//! leaves no diff state to drift out of sync; re-rendering is idempotent.
//!
//! ## Search Is Not Debounced
//!
//! Every input event refilters the full list. Fine for a blog's worth of
//! posts; a linear scan per keystroke is the scaling limit for large feeds.

pub mod categories;
pub mod config;
pub mod filter;
pub mod load;
pub mod output;
pub mod paginate;
pub mod render;
pub mod types;
pub mod widget;

#[cfg(test)]
pub(crate) mod test_helpers;
