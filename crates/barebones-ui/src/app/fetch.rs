//! Fetch runners bound to the app's mounted lifetime.
//!
//! # Design
//! - One abort controller per mount; teardown aborts every request it issued.
//! - Completions observed after abort never touch the store.
//! - Data fetches are tagged so only the latest issued request is applied.

use crate::core::store::{AppStore, apply_health_probe, begin_fetch, complete_fetch};
use crate::services::api::ApiClient;
use gloo::console;
use std::rc::Rc;
use web_sys::{AbortController, AbortSignal};
use yewdux::prelude::Dispatch;

/// Cancellation handle for requests issued while the app is mounted.
pub(crate) struct FetchScope {
    controller: Option<AbortController>,
}

impl FetchScope {
    pub(crate) fn new() -> Self {
        let controller = AbortController::new().ok();
        if controller.is_none() {
            console::warn!("abort controller unavailable; requests will not be cancelled");
        }
        Self { controller }
    }

    pub(crate) fn signal(&self) -> Option<AbortSignal> {
        self.controller.as_ref().map(AbortController::signal)
    }

    pub(crate) fn close(&self) {
        if let Some(controller) = &self.controller {
            controller.abort();
        }
    }
}

fn aborted(signal: Option<&AbortSignal>) -> bool {
    signal.is_some_and(AbortSignal::aborted)
}

/// Probe backend liveness and update the status badge.
pub(crate) fn spawn_health_check(
    client: Rc<ApiClient>,
    signal: Option<AbortSignal>,
    dispatch: Dispatch<AppStore>,
) {
    yew::platform::spawn_local(async move {
        let result = client.fetch_health(signal.as_ref()).await;
        if aborted(signal.as_ref()) {
            return;
        }
        dispatch.reduce_mut(|store| apply_health_probe(store, result));
    });
}

/// Fetch the item collection, superseding any fetch still in flight.
pub(crate) fn spawn_fetch_items(
    client: Rc<ApiClient>,
    signal: Option<AbortSignal>,
    dispatch: Dispatch<AppStore>,
) {
    dispatch.reduce_mut(|store| {
        begin_fetch(&mut store.items);
    });
    let seq = dispatch.get().items.latest_request();
    yew::platform::spawn_local(async move {
        let result = client.fetch_items(signal.as_ref()).await;
        if aborted(signal.as_ref()) || dispatch.get().items.latest_request() != seq {
            return;
        }
        if let Err(err) = &result {
            console::error!("Error fetching data:", err.to_string());
        }
        dispatch.reduce_mut(|store| {
            complete_fetch(&mut store.items, seq, result);
        });
    });
}
