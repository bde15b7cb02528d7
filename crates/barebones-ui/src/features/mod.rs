//! Feature slices rendered inside the app shell.

pub(crate) mod data_view;
pub(crate) mod health;
