//! Message Box

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::UiStateStoreFields;

#[component]
pub fn MessageBox() -> impl IntoView {
    let ctx = use_app_context();
    let notifier = ctx.store.notifier();

    let class = move || if notifier.with(|n| n.is_visible()) { "visible" } else { "" };
    let messages = move || {
        notifier.with(|n| n.messages().iter().cloned().enumerate().collect::<Vec<_>>())
    };

    view! {
        <div id="message" class=class node_ref=ctx.regions.messages>
            <For
                each=messages
                key=|(i, message)| (*i, message.clone())
                children=|(_, message)| view! { <p>{message}</p> }
            />
        </div>
    }
}
