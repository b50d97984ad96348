//! Action Bar
//!
//! v2 pages have no banner fragment; the action select is rendered from
//! the page config and every action navigates to its own page.

use leptos::prelude::*;
use web_sys::HtmlSelectElement;

use toolbase_core::actions::NEUTRAL_ACTION;

use crate::context::use_app_context;
use crate::dom;

#[component]
pub fn ActionBar() -> impl IntoView {
    let ctx = use_app_context();
    let actions = ctx.config().actions;

    view! {
        <form id="banner" on:submit=|ev| ev.prevent_default()>
            <select on:change=move |ev| {
                let select = event_target::<HtmlSelectElement>(&ev);
                ctx.dispatch_action(&select);
            }>
                <option value=NEUTRAL_ACTION>"Vælg handling"</option>
                {actions
                    .into_iter()
                    .map(|action| view! { <option value=action.id>{action.label}</option> })
                    .collect_view()}
            </select>
            <a
                href="#"
                class="print"
                on:click=|ev| {
                    ev.prevent_default();
                    dom::print_page();
                }
            >
                "Udskriv"
            </a>
        </form>
    }
}
