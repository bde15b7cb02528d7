//! Health feature slice.
//!
//! # Design
//! - Read the badge state from the `AppStore` only.
//! - Probing lives in the app fetch runners; this slice never issues requests.

pub(crate) mod view;
