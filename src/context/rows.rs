//! Row Selection & Bulk Actions

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlOptionElement, HtmlSelectElement};

use toolbase_core::actions::{self, Dispatch, NEUTRAL_ACTION};
use toolbase_core::id_selector;
use toolbase_core::popup::PopupId;
use toolbase_core::selection::{RowSelection, SELECTED_CLASS};

use super::AppContext;
use crate::commands;
use crate::dom;
use crate::store::UiStateStoreFields;

const ROW_CHECKBOX: &str = "input.object_checkbox";

impl AppContext {
    fn row_checkboxes(&self) -> Vec<Element> {
        match self.regions.list.get_untracked() {
            Some(list) => dom::query_all(&list, ROW_CHECKBOX),
            None => Vec::new(),
        }
    }

    /// Checkbox states of the rendered list.
    fn read_selection(&self) -> RowSelection {
        RowSelection::from_rows(self.row_checkboxes().iter().filter_map(|el| {
            let input = dom::as_input(el)?;
            Some((input.name(), input.checked()))
        }))
    }

    fn mark_row(&self, id: &str, selected: bool) {
        let Some(list) = self.regions.list.get_untracked() else {
            return;
        };
        match dom::query(&list, &id_selector("tr", id, Some("object_line"))) {
            Some(row) => dom::set_class(&row, SELECTED_CLASS, selected),
            None => tracing::debug!(id, "row not found"),
        }
    }

    /// `input.object_checkbox` click: the browser has already flipped it.
    pub fn toggle_row(&self, checkbox: &Element) {
        let Some(input) = dom::as_input(checkbox) else {
            return;
        };
        self.mark_row(&input.name(), input.checked());
        self.sync_mark_all(self.read_selection().all_checked());
    }

    fn sync_mark_all(&self, checked: bool) {
        let Some(list) = self.regions.list.get_untracked() else {
            return;
        };
        for el in dom::query_all(&list, "input.mark_all") {
            if let Some(input) = dom::as_input(&el) {
                input.set_checked(checked);
            }
        }
    }

    /// `input.mark_all`: every row follows.
    pub fn mark_all(&self, checked: bool) {
        let mut selection = self.read_selection();
        selection.mark_all(checked);

        for el in self.row_checkboxes() {
            if let Some(input) = dom::as_input(&el) {
                input.set_checked(checked);
            }
        }
        for row in selection.rows() {
            self.mark_row(&row.id, row.checked);
        }
    }

    /// Banner action select changed.
    pub fn dispatch_action(&self, select: &HtmlSelectElement) {
        let action = selected_action(select);
        let selection = self.read_selection();
        let ids = selection.checked_ids();
        let object_type = self.selected_tab();
        let found = actions::dispatch(self.variant(), object_type, &action, &ids, &dom::pathname());
        select.set_value(NEUTRAL_ACTION);

        let Some(found) = found else {
            return;
        };
        match found {
            Dispatch::Post { path, body } => {
                let ctx = *self;
                spawn_local(async move {
                    match commands::post_action(&path, body).await {
                        Ok(message) => ctx.reload_list_of(object_type, false, message, |_| {}),
                        Err(e) => ctx.report(e),
                    }
                });
            }
            Dispatch::FormPopup {
                popup,
                source,
                hidden_field,
                ids,
            } => {
                self.open_popup_with(popup, source, move |el| {
                    dom::set_input_value(el, &format!("input#{}", hidden_field), &ids);
                });
            }
            Dispatch::PickLoaner { source, ids } => {
                self.store.loan_ids().set(ids);
                self.open_popup_with(PopupId::Loaner, source, |_| {});
            }
            Dispatch::Navigate { url } => dom::navigate(&url),
        }
    }
}

/// The chosen option's `name`, falling back to its value.
fn selected_action(select: &HtmlSelectElement) -> String {
    let index = select.selected_index();
    if index < 0 {
        return String::new();
    }
    match select.item(index as u32) {
        Some(option) => option
            .get_attribute("name")
            .filter(|n| !n.is_empty())
            .or_else(|| option.dyn_ref::<HtmlOptionElement>().map(|o| o.value()))
            .unwrap_or_default(),
        None => select.value(),
    }
}
