//! API status badge.

use crate::core::store::select_health;
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(HealthBadge)]
pub(crate) fn health_badge() -> Html {
    let indicator = use_selector(select_health);
    let title = indicator.service().map(str::to_string);
    html! {
        <strong class={classes!("pill", indicator.tone())} title={title}>
            {indicator.label()}
        </strong>
    }
}
