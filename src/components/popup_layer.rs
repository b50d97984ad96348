//! Popup Layer
//!
//! The popups, the dimming mask and the loader image. Popup content is
//! server HTML loaded into each popup's region; visibility comes from the
//! store's overlay state.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlFormElement, HtmlSelectElement, SubmitEvent};

use toolbase_core::popup::PopupId;

use super::{delegate, DeletePopup};
use crate::context::use_app_context;
use crate::dom;
use crate::store::UiStateStoreFields;

#[component]
pub fn PopupLayer() -> impl IntoView {
    let ctx = use_app_context();
    let overlay = ctx.store.overlay();
    let loader_src = ctx.config().loader_src;

    let on_submit = move |ev: SubmitEvent| {
        let target = ev.target();
        if let Some(form) = dom::closest(target.clone(), "form.inline")
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
        {
            ev.prevent_default();
            ctx.submit_inline(form);
        } else if let Some(form) = dom::closest(target, "form.add")
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
        {
            ev.prevent_default();
            ctx.submit_form(form);
        }
    };

    let on_change = move |ev: web_sys::Event| {
        let Some(el) = dom::closest(ev.target(), "select#id_model") else {
            return;
        };
        if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
            ctx.model_changed(&el, select.value());
        }
    };

    let popups = PopupId::ALL
        .into_iter()
        .filter(|id| *id != PopupId::Delete)
        .map(|id| {
            let class = move || {
                if overlay.with(|o| o.is_open(id)) { "popup visible" } else { "popup" }
            };
            view! { <div id=id.as_str() class=class node_ref=ctx.regions.popup(id)></div> }
        })
        .collect_view();

    view! {
        <div
            id="popups"
            on:click=move |ev| delegate::handle_click(ctx, &ev)
            on:submit=on_submit
            on:change=on_change
        >
            {popups}
            <DeletePopup />
        </div>
        <Show when=move || overlay.with(|o| o.mask_visible())>
            <div id="mask" on:click=move |_| ctx.dismiss()></div>
        </Show>
        <Show when=move || overlay.with(|o| o.is_loading())>
            <img id="loader" src=loader_src.clone() alt="" />
        </Show>
    }
}
