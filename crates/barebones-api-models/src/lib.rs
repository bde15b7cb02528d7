#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Barebones API.
//!
//! The front-end consumes two read-only endpoints: `GET /api/health` and
//! `GET /api/data`. These types mirror their JSON bodies and stay free of any
//! wasm dependency so decoding can be exercised with plain host tests.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;

/// Body returned by `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    /// Liveness status reported by the backend (e.g. `healthy`).
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Service name, when the backend reports one.
    pub service: Option<String>,
}

/// Identifier of a single [`Item`].
///
/// The contract only requires uniqueness, so any JSON number or string is
/// accepted. Integers that fit `i64` decode as [`ItemId::Number`]; larger
/// unsigned integers and fractional values get their own variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    /// Signed integer identifier.
    Number(i64),
    /// Unsigned integer identifier above `i64::MAX`.
    Unsigned(u64),
    /// Fractional numeric identifier.
    Float(f64),
    /// Textual identifier.
    Text(String),
}

impl ItemId {
    /// List key that stays distinct across variants.
    ///
    /// `1`, `1.0` and `"1"` all display as `1` but are different ids.
    #[must_use]
    pub fn key(&self) -> String {
        match self {
            Self::Number(_) | Self::Unsigned(_) => format!("n:{self}"),
            Self::Float(_) => format!("f:{self}"),
            Self::Text(_) => format!("s:{self}"),
        }
    }
}

impl PartialEq for ItemId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Unsigned(a), Self::Unsigned(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Text(a), Self::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for ItemId {}

impl Hash for ItemId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        match self {
            Self::Number(value) => value.hash(state),
            Self::Unsigned(value) => value.hash(state),
            Self::Float(value) => value.to_bits().hash(state),
            Self::Text(value) => value.hash(state),
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Unsigned(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Record rendered by the collection view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    /// Stable identifier used as the list key.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
}

/// Body returned by `GET /api/data`.
///
/// The documented shape is `{ "items": [...] }`; a bare array is accepted too
/// since older backends return the list unwrapped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ItemsPayload {
    /// `{ "items": [...] }` envelope.
    Envelope {
        /// Items in server order.
        items: Vec<Item>,
    },
    /// Bare `[...]` array.
    Bare(Vec<Item>),
}

impl ItemsPayload {
    /// Consume the payload and return the items in server order.
    #[must_use]
    pub fn into_items(self) -> Vec<Item> {
        match self {
            Self::Envelope { items } | Self::Bare(items) => items,
        }
    }
}
