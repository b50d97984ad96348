//! Popup Handling
//!
//! Opening, centering and closing popups, plus the edit, delete and loan
//! flows that run through them.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::HtmlDivElement;

use toolbase_core::actions::{delete_flow, delete_request, loan_to_loaner, DeleteFlow};
use toolbase_core::popup::{PopupId, POPUP_PADDING};
use toolbase_core::query::Query;
use toolbase_core::selection::SELECTED_CLASS;
use toolbase_core::{id_selector, ObjectType};

use super::{load_region, AppContext};
use crate::commands;
use crate::dom;
use crate::store::{DeleteTarget, UiStateStoreFields};

impl AppContext {
    /// Show a popup with whatever it currently contains.
    pub fn open_popup(&self, id: PopupId) {
        tracing::debug!(popup = %id, "open popup");
        self.store.overlay().update(|o| o.open(id));
        self.center_popup(id);
    }

    /// Measure once the popup is displayed.
    fn center_popup(&self, id: PopupId) {
        let node = self.regions.popup(id);
        request_animation_frame(move || {
            if let Some(el) = node.get_untracked() {
                dom::center(&el, POPUP_PADDING);
            }
        });
    }

    /// Load `url` into the popup, run `after` on it, then show it.
    pub fn open_popup_with(
        &self,
        id: PopupId,
        url: String,
        after: impl FnOnce(&HtmlDivElement) + 'static,
    ) {
        let ctx = *self;
        spawn_local(async move {
            let target = ctx.regions.popup(id);
            match load_region(ctx.popup_loader(id), target, url).await {
                Ok(true) => {
                    if let Some(el) = target.get_untracked() {
                        after(&el);
                    }
                    ctx.open_popup(id);
                }
                Ok(false) => {}
                Err(e) => ctx.report(e),
            }
        });
    }

    /// `a.popup#add`: fresh form for the selected tab.
    pub fn open_add(&self) {
        self.open_popup_with(PopupId::Add, self.selected_tab().form_path(), |_| {});
    }

    /// Close every popup (submit, cancel).
    pub fn close_popups(&self) {
        self.store.overlay().update(|o| o.close());
        self.store.inline_forms().update(|f| f.reset());
    }

    /// Mask click: popups and mask go away.
    pub fn dismiss(&self) {
        self.store.overlay().update(|o| o.dismiss());
        self.store.inline_forms().update(|f| f.reset());
    }

    /// `a.edit`: the add popup with the object's form.
    pub fn edit(&self, object_type: ObjectType, id: String) {
        let url = Query::new().with("id", id).url(&object_type.form_path());
        self.open_popup_with(PopupId::Add, url, |_| {});
    }

    /// `a.delete`: toolbase deletes the link's object type right away,
    /// the other variants ask first.
    pub fn delete_link(&self, link_id: &str, id: String) {
        match delete_flow(self.variant(), self.selected_tab(), link_id, &id) {
            DeleteFlow::Immediate { object_type, url } => {
                let ctx = *self;
                spawn_local(async move {
                    match commands::delete_object(&url).await {
                        Ok(message) => ctx.reload_list_of(object_type, false, message, |_| {}),
                        Err(e) => ctx.report(e),
                    }
                });
            }
            DeleteFlow::Confirm { object_type, name } => {
                self.store.delete_target().set(Some(DeleteTarget { object_type, id, name }));
                self.open_popup(PopupId::Delete);
            }
        }
    }

    /// Delete popup confirmed.
    pub fn confirm_delete(&self) {
        let Some(target) = self.store.delete_target().get_untracked() else {
            return;
        };
        self.store.delete_target().set(None);
        self.close_popups();

        let ctx = *self;
        spawn_local(async move {
            let url = delete_request(target.object_type, &target.id);
            match commands::delete_object(&url).await {
                Ok(message) => {
                    let row = ctx
                        .regions
                        .list
                        .get_untracked()
                        .and_then(|list| dom::query(&list, &id_selector("tr", &target.id, Some("object_line"))));
                    if let Some(row) = row {
                        dom::set_class(&row, SELECTED_CLASS, false);
                        dom::set_class(&row, "removed", true);
                    }
                    if let Some(message) = message {
                        ctx.show_message(message);
                    }
                }
                Err(e) => ctx.report(e),
            }
        });
    }

    /// `a.delete_event` / `a.delete_reservation`: delete, then refresh the
    /// tool list they belong to.
    pub fn delete_related(&self, related: ObjectType, id: String) {
        let ctx = *self;
        spawn_local(async move {
            match commands::delete_object(&delete_request(related, &id)).await {
                Ok(message) => ctx.reload_list_of(related.list_after_submit(), false, message, |_| {}),
                Err(e) => ctx.report(e),
            }
        });
    }

    /// Toolbase `a.loan` in the loaner picker: lend the carried tools.
    pub fn lend_to(&self, loaner_id: String) {
        let ids = self.store.loan_ids().get_untracked();
        self.close_popups();

        let ctx = *self;
        spawn_local(async move {
            let (path, body) = loan_to_loaner(&ids, &loaner_id);
            match commands::post_action(&path, body).await {
                Ok(message) => ctx.reload_list_of(ObjectType::Tool, false, message, |_| {}),
                Err(e) => ctx.report(e),
            }
        });
    }
}
