//! List Panel
//!
//! The object list region (`div#content`, or `div#main` in v2).

use leptos::prelude::*;

use toolbase_core::config::Variant;

use super::delegate;
use crate::context::use_app_context;

#[component]
pub fn ListPanel() -> impl IntoView {
    let ctx = use_app_context();
    let id = match ctx.variant() {
        Variant::V2 => "main",
        Variant::Toolbase | Variant::Toolcontrol => "content",
    };

    view! {
        <div
            id=id
            node_ref=ctx.regions.list
            on:click=move |ev| delegate::handle_click(ctx, &ev)
        ></div>
    }
}
