//! Menu Dropdown
//!
//! `div#menu` opens the hidden menu; any click elsewhere closes it.

use leptos::ev;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::dom;
use crate::store::UiStateStoreFields;

#[component]
pub fn MenuDropdown() -> impl IntoView {
    let ctx = use_app_context();
    let open = ctx.store.menu_open();
    let items = ctx.config().menu;

    let handle = window_event_listener(ev::click, move |_| {
        if open.get_untracked() {
            open.set(false);
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <div
            id="menu"
            on:click=move |ev| {
                ev.stop_propagation();
                open.update(|o| *o = !*o);
            }
        >
            "Menu"
        </div>
        <div
            id="menu_hidden"
            class=move || if open.get() { "visible" } else { "" }
            on:click=|ev| ev.stop_propagation()
        >
            {items
                .into_iter()
                .map(|item| {
                    let target = format!("/{}", item.id);
                    view! {
                        <div class="menu_item" id=item.id on:click=move |_| dom::navigate(&target)>
                            {item.label}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
