//! Form Submission
//!
//! Add/edit forms, inline sub-forms and the fields that depend on the
//! chosen model.

use std::str::FromStr;

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{Element, HtmlFormElement};

use toolbase_core::id_selector;
use toolbase_core::inline::{container_id, select_id};
use toolbase_core::outcome::FormOutcome;
use toolbase_core::popup::POPUP_PADDING;
use toolbase_core::ObjectType;

use super::AppContext;
use crate::commands;
use crate::dom;
use crate::store::UiStateStoreFields;

/// Class on an inline form that is shown.
const VISIBLE_CLASS: &str = "visible";

/// Object type a form posts to, from its id.
fn form_type(form: &HtmlFormElement) -> Option<ObjectType> {
    ObjectType::from_str(&form.id()).ok()
}

impl AppContext {
    /// `form.add` submitted from a popup.
    pub fn submit_form(&self, form: HtmlFormElement) {
        let object_type = form_type(&form).unwrap_or_else(|| self.selected_tab());
        tracing::debug!(%object_type, "submitting form");

        let ctx = *self;
        spawn_local(async move {
            let outcome = match commands::submit_form(object_type, &form).await {
                Ok(outcome) => outcome,
                Err(e) => return ctx.report(e),
            };
            match outcome {
                FormOutcome::Saved { message, .. } => {
                    ctx.close_popups();
                    ctx.reload_list_of(object_type.list_after_submit(), false, message, |_| {});
                }
                FormOutcome::Rejected { form_html, message } => {
                    tracing::info!(%object_type, "form rejected");
                    if let Some(popup) = form.closest("div.popup").ok().flatten() {
                        if !form_html.is_empty() {
                            popup.set_inner_html(&form_html);
                        }
                        if let Some(el) = dom::as_html(&popup) {
                            dom::center(el, POPUP_PADDING);
                        }
                    }
                    if let Some(message) = message {
                        ctx.show_message(message);
                    }
                }
            }
        });
    }

    /// `a.inline_toggle`: expand or collapse the field's inline form.
    pub fn toggle_inline(&self, field: &str) {
        let expanded = self
            .store
            .inline_forms()
            .try_update(|f| f.toggle(field))
            .unwrap_or(false);
        self.show_inline(field, expanded);
    }

    fn show_inline(&self, field: &str, shown: bool) {
        let selector = id_selector("div", &container_id(field), Some("inline_form"));
        match self.open_popup_element().and_then(|p| dom::query(&p, &selector)) {
            Some(el) => dom::set_class(&el, VISIBLE_CLASS, shown),
            None => tracing::debug!(field, "inline form not found"),
        }
    }

    /// Element of the popup currently shown.
    fn open_popup_element(&self) -> Option<Element> {
        let id = self.store.overlay().with_untracked(|o| o.open_popup())?;
        self.regions.popup(id).get_untracked().map(Into::into)
    }

    /// `form.inline` submitted: create the related object and offer it in
    /// the main form's select.
    pub fn submit_inline(&self, form: HtmlFormElement) {
        let Some(object_type) = form_type(&form) else {
            tracing::warn!(id = %form.id(), "inline form without object type");
            return;
        };
        let field = inline_field(&form).unwrap_or_else(|| object_type.as_str().to_string());

        let ctx = *self;
        spawn_local(async move {
            let outcome = match commands::submit_form(object_type, &form).await {
                Ok(outcome) => outcome,
                Err(e) => return ctx.report(e),
            };
            match outcome {
                FormOutcome::Saved { message, created } => {
                    if let Some(option) = created {
                        let selector = id_selector("select", &select_id(&field), None);
                        match ctx.open_popup_element().and_then(|p| dom::query(&p, &selector)) {
                            Some(select) => {
                                let _ = select.insert_adjacent_html("beforeend", &option.to_html());
                            }
                            None => tracing::warn!(field = %field, "select for new option not found"),
                        }
                    }
                    form.reset();
                    ctx.store.inline_forms().update(|f| f.collapse(&field));
                    ctx.show_inline(&field, false);
                    if let Some(message) = message {
                        ctx.show_message(message);
                    }
                }
                FormOutcome::Rejected { form_html, message } => {
                    if !form_html.is_empty() {
                        form.set_inner_html(&form_html);
                    }
                    if let Some(message) = message {
                        ctx.show_message(message);
                    }
                }
            }
        });
    }

    /// `select#id_model` changed: copy the model's defaults into the form.
    /// A zero or missing price leaves the entered price alone.
    pub fn model_changed(&self, select: &Element, model_id: String) {
        if model_id.is_empty() {
            return;
        }
        let form = select.closest("form").ok().flatten();
        let ctx = *self;
        spawn_local(async move {
            let defaults = match commands::get_model_defaults(&model_id).await {
                Ok(defaults) => defaults,
                Err(e) => return ctx.report(e),
            };
            let Some(root) = form.or_else(|| ctx.open_popup_element()) else {
                return;
            };
            if let Some(interval) = defaults.service_interval.as_deref() {
                dom::set_input_value(&root, "input#id_service_interval", interval);
            }
            if let Some(price) = defaults.price_update() {
                dom::set_input_value(&root, "input#id_price", price);
            }
        });
    }
}

/// Field an inline form feeds: its `data-field`, or its container's id.
fn inline_field(form: &HtmlFormElement) -> Option<String> {
    form.get_attribute("data-field")
        .filter(|f| !f.is_empty())
        .or_else(|| {
            let container = form.closest("div.inline_form").ok().flatten()?;
            container
                .id()
                .strip_prefix("inline_")
                .map(str::to_string)
        })
}
