//! Region Event Delegation
//!
//! Fragments are server HTML, so their links and inputs are handled by a
//! listener on the region they are loaded into, matched by class.

use std::str::FromStr;

use web_sys::{Element, MouseEvent};

use toolbase_core::detail::DetailKind;
use toolbase_core::popup::PopupId;
use toolbase_core::ObjectType;

use crate::context::AppContext;
use crate::dom;

/// Link classes handled here, in match priority.
const LINK_CLASSES: [&str; 11] = [
    "set_sorting",
    "order_by",
    "edit",
    "delete",
    "delete_event",
    "delete_reservation",
    "print",
    "popup",
    "loan",
    "cancel",
    "inline_toggle",
];

/// Id a link refers to: its `href` target, or its id.
fn link_object_id(link: &Element) -> String {
    let fragment = dom::href_fragment(link);
    if fragment.is_empty() {
        link.id()
    } else {
        fragment
    }
}

/// Click inside a region.
pub fn handle_click(ctx: AppContext, ev: &MouseEvent) {
    let target = ev.target();

    // Checkboxes keep their default so the browser flips them
    if let Some(el) = dom::closest(target.clone(), "input.object_checkbox") {
        ctx.toggle_row(&el);
        return;
    }
    if let Some(el) = dom::closest(target.clone(), "input.mark_all") {
        if let Some(input) = dom::as_input(&el) {
            ctx.mark_all(input.checked());
        }
        return;
    }

    let Some(link) = dom::closest(target, "a, button.cancel") else {
        return;
    };
    let class = LINK_CLASSES
        .iter()
        .chain(DetailKind::LINK_CLASSES.iter())
        .find(|class| dom::has_class(&link, class));
    let Some(class) = class else {
        return;
    };
    ev.prevent_default();

    if let Some(kind) = DetailKind::from_link_class(class) {
        let id = link.id();
        let id = if id.is_empty() { dom::href_fragment(&link) } else { id };
        ctx.toggle_detail(kind, id);
        return;
    }

    match *class {
        "set_sorting" => ctx.sort_by(link.id()),
        "order_by" => ctx.order_by(&link.get_attribute("href").unwrap_or_default()),
        "edit" => {
            let object_type = ObjectType::from_str(&link.id()).unwrap_or_else(|_| ctx.selected_tab());
            ctx.edit(object_type, dom::href_fragment(&link));
        }
        "delete" => ctx.delete_link(&link.id(), dom::href_fragment(&link)),
        "delete_event" => ctx.delete_related(ObjectType::Event, link_object_id(&link)),
        "delete_reservation" => ctx.delete_related(ObjectType::Reservation, link_object_id(&link)),
        "print" => dom::print_page(),
        "popup" => match PopupId::from_str(&link.id()) {
            Ok(PopupId::Add) => ctx.open_add(),
            Ok(id) => ctx.open_popup(id),
            Err(e) => tracing::warn!(error = %e, "unknown popup link"),
        },
        "loan" => ctx.lend_to(dom::href_fragment(&link)),
        "cancel" => ctx.close_popups(),
        "inline_toggle" => match link.get_attribute("data-field") {
            Some(field) => ctx.toggle_inline(&field),
            None => tracing::warn!("inline toggle without data-field"),
        },
        other => tracing::debug!(class = other, "unhandled link"),
    }
}
