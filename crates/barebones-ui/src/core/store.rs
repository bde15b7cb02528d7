//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store; health and items live in disjoint slices.
//! - The items view is a single tagged state, so loading and error never overlap.
//! - Every data fetch is tagged with a request sequence; only the latest is applied.

use crate::core::error::ApiError;
use crate::core::health::HealthIndicator;
use crate::core::text::FETCH_FAILED;
use barebones_api_models::{HealthResponse, Item};
use std::rc::Rc;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Eq, Store, Default)]
pub struct AppStore {
    /// API status badge state.
    pub health: HealthSlice,
    /// Item collection state.
    pub items: ItemsSlice,
}

/// Health probe state.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct HealthSlice {
    /// Current badge state.
    pub indicator: HealthIndicator,
}

/// Display state of the data section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewState {
    /// A fetch is in flight.
    Loading,
    /// The latest fetch failed; carries the user-facing message.
    Error(String),
    /// The latest fetch succeeded; items in server order (possibly empty).
    Ready(Rc<Vec<Item>>),
}

/// Monotonic tag assigned to each data fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestSeq(u64);

impl RequestSeq {
    /// The tag following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// Raw sequence number.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Item collection state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemsSlice {
    /// What the data section shows.
    pub view: ViewState,
    retained: Rc<Vec<Item>>,
    latest: RequestSeq,
}

impl Default for ItemsSlice {
    fn default() -> Self {
        Self {
            view: ViewState::Loading,
            retained: Rc::new(Vec::new()),
            latest: RequestSeq::default(),
        }
    }
}

impl ItemsSlice {
    /// Tag of the most recently issued fetch.
    #[must_use]
    pub const fn latest_request(&self) -> RequestSeq {
        self.latest
    }

    /// Items from the last successful fetch.
    ///
    /// They stay in memory while an error is displayed; the next successful
    /// fetch replaces them wholesale.
    #[must_use]
    pub fn retained(&self) -> &[Item] {
        &self.retained
    }

    /// Whether a fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.view, ViewState::Loading)
    }
}

/// How a completed fetch affected the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Items replaced; carries the new count.
    Loaded(usize),
    /// Error banner shown.
    Failed,
    /// A newer fetch was issued; nothing applied.
    Stale,
    /// The fetch was cancelled; nothing applied.
    Cancelled,
}

/// Apply a health probe result to the store.
///
/// Cancelled probes leave the badge untouched.
pub fn apply_health_probe(store: &mut AppStore, result: Result<HealthResponse, ApiError>) {
    if matches!(&result, Err(err) if err.is_aborted()) {
        return;
    }
    store.health.indicator = HealthIndicator::from_probe(result);
}

/// Start a data fetch: show loading, clear any error and issue a new tag.
pub fn begin_fetch(state: &mut ItemsSlice) -> RequestSeq {
    state.latest = state.latest.next();
    state.view = ViewState::Loading;
    state.latest
}

/// Finish the fetch tagged `seq`.
///
/// Results for superseded tags and cancelled requests are discarded. Any
/// other failure shows the fixed banner and keeps the retained items.
pub fn complete_fetch(
    state: &mut ItemsSlice,
    seq: RequestSeq,
    result: Result<Vec<Item>, ApiError>,
) -> FetchOutcome {
    if seq != state.latest {
        return FetchOutcome::Stale;
    }
    match result {
        Ok(items) => {
            let count = items.len();
            let items = Rc::new(items);
            state.retained = Rc::clone(&items);
            state.view = ViewState::Ready(items);
            FetchOutcome::Loaded(count)
        }
        Err(err) if err.is_aborted() => FetchOutcome::Cancelled,
        Err(_) => {
            state.view = ViewState::Error(FETCH_FAILED.to_string());
            FetchOutcome::Failed
        }
    }
}

/// Read the current data section state.
#[must_use]
pub fn select_view(store: &AppStore) -> ViewState {
    store.items.view.clone()
}

/// Read the current health badge state.
#[must_use]
pub fn select_health(store: &AppStore) -> HealthIndicator {
    store.health.indicator.clone()
}
