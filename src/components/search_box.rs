//! Search Box

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::UiStateStoreFields;

/// Search-as-you-type; cleared on tab change.
#[component]
pub fn SearchBox() -> impl IntoView {
    let ctx = use_app_context();
    let search = ctx.store.search();

    view! {
        <input
            id="search"
            type="text"
            placeholder="Søg"
            autocomplete="off"
            prop:value=move || search.get()
            on:keyup=move |ev| ctx.search_input(event_target_value(&ev))
        />
    }
}
