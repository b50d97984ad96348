//! Navigation Tabs
//!
//! One tab per object type; selecting one reloads banner, form and list.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::UiStateStoreFields;

#[component]
pub fn NavigationTabs() -> impl IntoView {
    let ctx = use_app_context();
    let selected = ctx.store.selected_tab();
    let tabs = ctx.config().tabs;

    view! {
        <table id="index_navigation">
            <tr>
                {tabs
                    .into_iter()
                    .map(|tab| {
                        let object_type = tab.object_type;
                        let class = move || {
                            if selected.get() == object_type { "selected" } else { "" }
                        };
                        view! {
                            <td
                                id=object_type.as_str()
                                class=class
                                on:click=move |_| ctx.select_tab(object_type)
                            >
                                {tab.label}
                            </td>
                        }
                    })
                    .collect_view()}
            </tr>
        </table>
    }
}
