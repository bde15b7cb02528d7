//! Core, DOM-free primitives and helpers for the Web UI.
pub mod config;
pub mod error;
pub mod health;
pub mod store;
pub mod text;
pub mod ui;
