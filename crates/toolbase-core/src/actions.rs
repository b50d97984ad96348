//! Bulk & Delete Actions
//!
//! Decides what choosing an entry in the banner's action select does with
//! the checked rows.

use crate::config::Variant;
use crate::object_type::ObjectType;
use crate::popup::PopupId;
use crate::query::Query;

/// Value the action select is reset to after every dispatch.
pub const NEUTRAL_ACTION: &str = "nothing";

/// What the UI should do for a chosen action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// POST the action and refresh the list with the returned message
    Post { path: String, body: Query },
    /// Open a popup with a form and put the ids into a hidden field
    FormPopup {
        popup: PopupId,
        source: String,
        /// Id of the hidden input receiving the ids
        hidden_field: &'static str,
        ids: String,
    },
    /// Toolbase: pick a loaner from a list; the loan links carry the ids
    PickLoaner { source: String, ids: String },
    /// v2: the action is its own page
    Navigate { url: String },
}

/// Classify an action. `None` for the neutral entry.
pub fn dispatch(
    variant: Variant,
    object_type: ObjectType,
    action: &str,
    ids: &[&str],
    pathname: &str,
) -> Option<Dispatch> {
    let action = action.trim();
    if action.is_empty() || action == NEUTRAL_ACTION {
        return None;
    }
    let joined = ids.join(",");

    if variant == Variant::V2 {
        let url = Query::new()
            .with("object_ids", joined)
            .url(&format!("{}{}/", pathname, action));
        return Some(Dispatch::Navigate { url });
    }

    let form_popup = |popup: PopupId, target: ObjectType, hidden_field: &'static str| {
        Dispatch::FormPopup {
            popup,
            source: target.form_path(),
            hidden_field,
            ids: joined.clone(),
        }
    };

    let dispatch = match action {
        "loan" if variant == Variant::Toolbase => Dispatch::PickLoaner {
            source: ObjectType::Loaner.list_path(),
            ids: joined.clone(),
        },
        "loan" => form_popup(PopupId::Loan, ObjectType::Loan, "id_tools"),
        "reserve" | "reservation" => {
            form_popup(PopupId::Reservation, ObjectType::Reservation, "id_tools")
        }
        "container_loan" => {
            form_popup(PopupId::ContainerLoan, ObjectType::ContainerLoan, "id_containers")
        }
        _ => Dispatch::Post {
            path: object_type.action_path(),
            body: Query::new()
                .with("object_ids", joined.clone())
                .with("action", action),
        },
    };
    tracing::debug!(%object_type, action, count = ids.len(), ?dispatch, "bulk action");
    Some(dispatch)
}

/// Body for the toolbase loan link: tools go to the chosen loaner.
pub fn loan_to_loaner(ids: &str, loaner_id: &str) -> (String, Query) {
    (
        ObjectType::Tool.action_path(),
        Query::new()
            .with("object_ids", ids)
            .with("action", "loan")
            .with("loaner_id", loaner_id),
    )
}

/// Confirmation text for the delete popup.
pub fn delete_confirmation(name: &str) -> String {
    format!("Er du sikker på, at du vil slette {}?", name)
}

/// What an `a.delete` list link does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteFlow {
    /// Toolbase: the link id names the object type and the delete runs
    /// without asking
    Immediate { object_type: ObjectType, url: String },
    /// Ask in the delete popup; the link id is the object's display name
    Confirm { object_type: ObjectType, name: String },
}

pub fn delete_flow(
    variant: Variant,
    selected: ObjectType,
    link_id: &str,
    object_id: &str,
) -> DeleteFlow {
    match variant {
        Variant::Toolbase => {
            let object_type = link_id.parse().unwrap_or(selected);
            DeleteFlow::Immediate {
                object_type,
                url: delete_request(object_type, object_id),
            }
        }
        Variant::Toolcontrol | Variant::V2 => DeleteFlow::Confirm {
            object_type: selected,
            name: link_id.to_string(),
        },
    }
}

/// Request deleting one object.
pub fn delete_request(object_type: ObjectType, id: &str) -> String {
    Query::new().with("id", id).url(&object_type.delete_path())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_action_is_ignored() {
        assert_eq!(dispatch(Variant::Toolcontrol, ObjectType::Tool, "nothing", &["1"], "/"), None);
        assert_eq!(dispatch(Variant::Toolcontrol, ObjectType::Tool, " ", &["1"], "/"), None);
    }

    #[test]
    fn test_plain_action_posts() {
        let d = dispatch(Variant::Toolcontrol, ObjectType::Employee, "make_inactive", &["3", "9"], "/")
            .unwrap();
        let Dispatch::Post { path, body } = d else { panic!("expected post") };
        assert_eq!(path, "/employee_action/");
        assert_eq!(body.get("object_ids"), Some("3,9"));
        assert_eq!(body.get("action"), Some("make_inactive"));
    }

    #[test]
    fn test_popup_actions() {
        let d = dispatch(Variant::Toolcontrol, ObjectType::Tool, "reserve", &["1", "2"], "/").unwrap();
        assert_eq!(
            d,
            Dispatch::FormPopup {
                popup: PopupId::Reservation,
                source: "/reservation_form/".to_string(),
                hidden_field: "id_tools",
                ids: "1,2".to_string(),
            }
        );

        let d = dispatch(Variant::Toolcontrol, ObjectType::Container, "container_loan", &["5"], "/")
            .unwrap();
        let Dispatch::FormPopup { popup, hidden_field, source, .. } = d else { panic!() };
        assert_eq!(popup, PopupId::ContainerLoan);
        assert_eq!(hidden_field, "id_containers");
        assert_eq!(source, "/container_loan_form/");
    }

    #[test]
    fn test_toolbase_loan_picks_loaner() {
        let d = dispatch(Variant::Toolbase, ObjectType::Tool, "loan", &["4", "8"], "/").unwrap();
        assert_eq!(
            d,
            Dispatch::PickLoaner { source: "/loaner_list/".to_string(), ids: "4,8".to_string() }
        );
        let (path, body) = loan_to_loaner("4,8", "2");
        assert_eq!(path, "/tool_action/");
        assert_eq!(body.encode(), "object_ids=4%2C8&action=loan&loaner_id=2");
    }

    #[test]
    fn test_v2_navigates() {
        let d = dispatch(Variant::V2, ObjectType::Tool, "udlaan", &["1", "2"], "/version2/vaerktoej/")
            .unwrap();
        assert_eq!(
            d,
            Dispatch::Navigate { url: "/version2/vaerktoej/udlaan/?object_ids=1%2C2".to_string() }
        );
    }

    #[test]
    fn test_delete_helpers() {
        assert_eq!(delete_request(ObjectType::Model, "12"), "/model_delete/?id=12");
        assert_eq!(delete_confirmation("Hilti"), "Er du sikker på, at du vil slette Hilti?");
    }

    #[test]
    fn test_toolbase_deletes_without_asking() {
        let flow = delete_flow(Variant::Toolbase, ObjectType::Tool, "loaner", "7");
        assert_eq!(
            flow,
            DeleteFlow::Immediate {
                object_type: ObjectType::Loaner,
                url: "/loaner_delete/?id=7".to_string(),
            }
        );

        // Link without a type id falls back to the shown tab
        let flow = delete_flow(Variant::Toolbase, ObjectType::Model, "", "3");
        assert_eq!(
            flow,
            DeleteFlow::Immediate {
                object_type: ObjectType::Model,
                url: "/model_delete/?id=3".to_string(),
            }
        );
    }

    #[test]
    fn test_toolcontrol_asks_before_delete() {
        let flow = delete_flow(Variant::Toolcontrol, ObjectType::Tool, "Hilti TE 30", "7");
        assert_eq!(
            flow,
            DeleteFlow::Confirm { object_type: ObjectType::Tool, name: "Hilti TE 30".to_string() }
        );
    }
}
