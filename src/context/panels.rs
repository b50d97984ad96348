//! Panel Loading
//!
//! Banner, list and add-form regions for the selected object type.

use leptos::prelude::*;
use leptos::task::spawn_local;

use toolbase_core::config::Variant;
use toolbase_core::popup::PopupId;
use toolbase_core::query::Query;
use toolbase_core::ObjectType;

use super::{load_region, AppContext};
use crate::dom;
use crate::store::UiStateStoreFields;

impl AppContext {
    /// Load all regions for the selected tab.
    pub fn load_panels(&self) {
        if self.variant() == Variant::V2 {
            self.reload_list(true, None);
            return;
        }
        let object_type = self.selected_tab();
        tracing::info!(%object_type, "loading panels");

        let ctx = *self;
        spawn_local(async move {
            if let Err(e) = load_region(ctx.banner_loader, ctx.regions.banner, object_type.banner_path()).await {
                ctx.report(e);
            }
        });
        self.preload_add_form(object_type);
        self.reload_list(true, None);
    }

    /// Switch navigation tab: new panels, empty search.
    pub fn select_tab(&self, object_type: ObjectType) {
        self.store.update(|s| s.select_tab(object_type));
        self.search_debounce.update_value(|d| d.cancel());
        self.search_timer.set_value(None);
        self.load_panels();
    }

    /// Fetch the add form ahead of time so the popup opens filled.
    fn preload_add_form(&self, object_type: ObjectType) {
        let ctx = *self;
        spawn_local(async move {
            let url = object_type.form_path();
            if let Err(e) = load_region(ctx.popup_loader(PopupId::Add), ctx.regions.popup(PopupId::Add), url).await {
                ctx.report(e);
            }
        });
    }

    /// Current search and sort/order parameters.
    fn list_query(&self) -> Query {
        let search = self.store.search().get_untracked();
        let query = Query::new().with_search(&search);
        match (self.store.sorting().get_untracked(), self.variant()) {
            (Some(key), Variant::V2) => query.with("order_by", key),
            (Some(key), _) => query.with("sorting", key),
            (None, _) => query,
        }
    }

    fn list_url(&self, object_type: ObjectType) -> String {
        match self.variant() {
            Variant::V2 => self.list_query().url(&dom::pathname()),
            _ => self.list_query().url(&object_type.list_path()),
        }
    }

    /// Reload the selected tab's list with the current parameters.
    ///
    /// `masked` shows the loader and mask while the fetch runs. `message` is
    /// shown once the list is in place.
    pub fn reload_list(&self, masked: bool, message: Option<String>) {
        self.reload_list_of(self.selected_tab(), masked, message, |_| {});
    }

    /// Reload the list of `object_type` into the list region, then run
    /// `after` against the region.
    pub fn reload_list_of(
        &self,
        object_type: ObjectType,
        masked: bool,
        message: Option<String>,
        after: impl FnOnce(&web_sys::HtmlDivElement) + 'static,
    ) {
        let url = self.list_url(object_type);
        tracing::debug!(url = %url, masked, "reloading list");
        if masked {
            self.store.overlay().update(|o| o.begin_loading());
        }

        let ctx = *self;
        spawn_local(async move {
            let result = load_region(ctx.list_loader, ctx.regions.list, url).await;
            match result {
                Ok(applied) => {
                    // The newest load clears the mask, whichever load set it
                    if applied {
                        ctx.store.overlay().update(|o| o.end_loading());
                        if let Some(el) = ctx.regions.list.get_untracked() {
                            after(&el);
                        }
                    }
                    if let Some(message) = message {
                        ctx.show_message(message);
                    }
                }
                Err(e) => {
                    if !e.is_aborted() {
                        ctx.store.overlay().update(|o| o.end_loading());
                    }
                    ctx.report(e);
                }
            }
        });
    }

    /// `a.set_sorting`: reload ordered by `key`.
    pub fn sort_by(&self, key: String) {
        self.store.sorting().set(Some(key));
        self.reload_list(self.variant().masks_sorting(), None);
    }
}
