//! Delete Popup
//!
//! Asks before deleting the object picked from the list.

use leptos::prelude::*;

use toolbase_core::actions::delete_confirmation;
use toolbase_core::popup::PopupId;

use crate::context::use_app_context;
use crate::store::UiStateStoreFields;

#[component]
pub fn DeletePopup() -> impl IntoView {
    let ctx = use_app_context();
    let overlay = ctx.store.overlay();
    let target = ctx.store.delete_target();

    let class = move || {
        if overlay.with(|o| o.is_open(PopupId::Delete)) { "popup visible" } else { "popup" }
    };
    let question = move || {
        target
            .with(|t| t.as_ref().map(|t| delete_confirmation(&t.name)))
            .unwrap_or_default()
    };
    let object_id = move || target.with(|t| t.as_ref().map(|t| t.id.clone())).unwrap_or_default();

    view! {
        <div id="delete" class=class node_ref=ctx.regions.popup(PopupId::Delete)>
            <form
                id="delete"
                on:submit=move |ev| {
                    ev.prevent_default();
                    ctx.confirm_delete();
                }
            >
                <p>{question}</p>
                <input type="hidden" id="id" name="id" prop:value=object_id />
                <button type="submit">"Slet"</button>
                <button type="button" class="cancel">"Annuller"</button>
            </form>
        </div>
    }
}
