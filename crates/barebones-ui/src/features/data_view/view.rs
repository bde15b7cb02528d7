//! Data section: heading, refresh control and the loading/error/list body.

use crate::core::store::select_view;
use crate::core::text::{DATA_HEADING, REFRESH_LABEL};
use crate::core::ui::{DataSection, ItemCard, data_section};
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub(crate) struct DataViewProps {
    pub(crate) on_refresh: Callback<()>,
}

#[function_component(DataView)]
pub(crate) fn data_view(props: &DataViewProps) -> Html {
    let view = use_selector(select_view);
    let on_click = {
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |_: MouseEvent| on_refresh.emit(()))
    };

    html! {
        <section class="panel data-view">
            <div class="panel-head">
                <h2>{DATA_HEADING}</h2>
                <button class="btn btn-primary btn-sm" onclick={on_click}>
                    {REFRESH_LABEL}
                </button>
            </div>
            {render_section(data_section(&view))}
        </section>
    }
}

fn render_section(section: DataSection) -> Html {
    match section {
        DataSection::Loading(text) => html! {
            <div class="placeholder" role="status" aria-live="polite">{text}</div>
        },
        DataSection::Banner(message) => html! {
            <div class="alert alert-error" role="alert">{message}</div>
        },
        DataSection::Empty(text) => html! {
            <div class="placeholder">{text}</div>
        },
        DataSection::Cards(cards) => html! {
            <div class="card-grid">
                {for cards.into_iter().map(render_card)}
            </div>
        },
    }
}

fn render_card(card: ItemCard) -> Html {
    html! {
        <div class="card" key={card.key}>
            <h3>{card.name}</h3>
            <p class="muted">{card.description}</p>
        </div>
    }
}
