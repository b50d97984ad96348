//! Banner Panel
//!
//! Holds the selected type's banner fragment: the add link and the bulk
//! action select.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;

use super::delegate;
use crate::context::use_app_context;
use crate::dom;

#[component]
pub fn BannerPanel() -> impl IntoView {
    let ctx = use_app_context();

    let on_change = move |ev: web_sys::Event| {
        let select = dom::closest(ev.target(), "form#banner select")
            .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok());
        if let Some(select) = select {
            ctx.dispatch_action(&select);
        }
    };

    view! {
        <div
            id="banner"
            node_ref=ctx.regions.banner
            on:change=on_change
            on:click=move |ev| delegate::handle_click(ctx, &ev)
            on:submit=|ev| ev.prevent_default()
        ></div>
    }
}
