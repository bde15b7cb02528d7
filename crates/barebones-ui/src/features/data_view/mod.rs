//! Data view feature slice.
//!
//! # Design
//! - Render strictly from `core::ui::data_section`; no view-local state.
//! - Refresh is delegated to the app shell through a callback.

pub(crate) mod view;
