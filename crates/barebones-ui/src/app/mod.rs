//! Root component and boot sequence.
//!
//! # Design
//! - On mount, start the health probe and the first item fetch concurrently.
//! - Tear down the fetch scope on unmount so late responses are dropped.

use crate::app::fetch::{FetchScope, spawn_fetch_items, spawn_health_check};
use crate::components::shell::AppShell;
use crate::core::config::ApiConfig;
use crate::core::store::AppStore;
use crate::features::data_view::view::DataView;
use crate::features::health::view::HealthBadge;
use crate::services::api::ApiClient;
use yew::prelude::*;
use yewdux::prelude::Dispatch;

mod fetch;

#[function_component(BarebonesApp)]
pub(crate) fn barebones_app() -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let client = use_memo(|_| ApiClient::new(ApiConfig::default()), ());
    let scope = use_mut_ref(|| None as Option<FetchScope>);

    {
        let dispatch = dispatch.clone();
        let client = client.clone();
        let scope = scope.clone();
        use_effect_with_deps(
            move |_| {
                let fresh = FetchScope::new();
                spawn_health_check(client.clone(), fresh.signal(), dispatch.clone());
                spawn_fetch_items(client, fresh.signal(), dispatch);
                *scope.borrow_mut() = Some(fresh);
                move || {
                    if let Some(scope) = scope.borrow_mut().take() {
                        scope.close();
                    }
                }
            },
            (),
        );
    }

    let on_refresh = Callback::from(move |()| {
        let signal = scope.borrow().as_ref().and_then(FetchScope::signal);
        spawn_fetch_items(client.clone(), signal, dispatch.clone());
    });

    html! {
        <AppShell status={html! { <HealthBadge /> }}>
            <DataView {on_refresh} />
        </AppShell>
    }
}

/// Mount the app into `#root`, or the document body when it is missing.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<BarebonesApp>::with_root(root).render();
    } else {
        yew::Renderer::<BarebonesApp>::new().render();
    }
}
