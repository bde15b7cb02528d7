use crate::core::text::{APP_SUBTITLE, APP_TITLE, FOOTER, STATUS_LABEL};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub(crate) children: Children,
    pub(crate) status: Html,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    html! {
        <div class="app-shell">
            <header class="app-header">
                <h1>{APP_TITLE}</h1>
                <p class="muted">{APP_SUBTITLE}</p>
                <div class="api-status">
                    {STATUS_LABEL}{" "}{props.status.clone()}
                </div>
            </header>
            <main>
                {for props.children.iter()}
            </main>
            <footer class="app-footer">
                <p>{FOOTER}</p>
            </footer>
        </div>
    }
}
