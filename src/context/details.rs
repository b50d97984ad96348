//! Detail Rows

use leptos::prelude::*;
use leptos::task::spawn_local;

use toolbase_core::detail::DetailKind;

use super::AppContext;
use crate::commands;
use crate::dom;

/// Class on a detail row that is currently shown.
pub const EXPANDED_CLASS: &str = "expanded";

impl AppContext {
    /// Hide a shown detail row, or load and show a hidden one.
    pub fn toggle_detail(&self, kind: DetailKind, id: String) {
        let Some(list) = self.regions.list.get_untracked() else {
            return;
        };
        let Some(row) = dom::query(&list, &kind.row_selector(&id)) else {
            tracing::debug!(?kind, id = %id, "detail row not found");
            return;
        };
        if dom::has_class(&row, EXPANDED_CLASS) {
            dom::set_class(&row, EXPANDED_CLASS, false);
            return;
        }

        let object_type = self.selected_tab();
        let ctx = *self;
        spawn_local(async move {
            match commands::fetch_detail(kind, &id, object_type).await {
                Ok(html) => {
                    // The cell's inner div holds the fragment; bare rows take it whole
                    match dom::query(&row, "div") {
                        Some(slot) => slot.set_inner_html(&html),
                        None => row.set_inner_html(&html),
                    }
                    dom::set_class(&row, EXPANDED_CLASS, true);
                }
                Err(e) => ctx.report(e),
            }
        });
    }
}
