//! End-to-end interaction scenarios over the core state types.

use crate::actions::{dispatch, Dispatch, NEUTRAL_ACTION};
use crate::config::{UiConfig, Variant};
use crate::csrf::{token_for, PageOrigin};
use crate::model_defaults::ModelDefaults;
use crate::popup::{Overlay, PopupId};
use crate::request::LatestOnly;
use crate::selection::RowSelection;
use crate::ObjectType;

/// Price input as the UI updates it.
fn apply_model(price_input: &mut String, body: &str) {
    let defaults = ModelDefaults::from_body(body).unwrap();
    if let Some(price) = defaults.price_update() {
        *price_input = price.to_string();
    }
}

#[test]
fn test_loan_three_selected_tools() {
    let cfg = UiConfig::default();
    let tab = cfg.initial_tab();
    assert_eq!(tab, ObjectType::Tool);

    let mut rows = RowSelection::from_rows([
        ("101", false),
        ("102", false),
        ("103", false),
        ("104", false),
        ("105", false),
    ]);
    rows.toggle("101");
    rows.toggle("103");
    rows.toggle("105");

    let mut overlay = Overlay::default();
    let d = dispatch(cfg.variant, tab, "loan", &rows.checked_ids(), "/").unwrap();
    let Dispatch::FormPopup { popup, source, hidden_field, ids } = d else {
        panic!("loan must open a popup");
    };
    overlay.open(popup);

    assert_eq!(popup, PopupId::Loan);
    assert_eq!(source, "/loan_form/");
    assert_eq!(hidden_field, "id_tools");
    assert_eq!(ids, "101,103,105");
    assert_eq!(overlay.mask_count(), 1);

    // The select goes back to neutral, which dispatches nothing
    assert!(dispatch(cfg.variant, tab, NEUTRAL_ACTION, &rows.checked_ids(), "/").is_none());
}

#[test]
fn test_mark_all_then_bulk_post() {
    let mut rows = RowSelection::from_rows([("1", true), ("2", false)]);
    rows.mark_all(true);
    let d = dispatch(Variant::Toolcontrol, ObjectType::Tool, "service", &rows.checked_ids(), "/")
        .unwrap();
    let Dispatch::Post { path, body } = d else { panic!("service posts") };
    assert_eq!(path, "/tool_action/");
    assert_eq!(body.encode(), "object_ids=1%2C2&action=service");
}

#[test]
fn test_model_change_price_rule() {
    let mut price = "999".to_string();

    let zero = serde_json::json!({
        "model": r#"[{"fields": {"service_interval": 6, "price": 0}}]"#
    })
    .to_string();
    apply_model(&mut price, &zero);
    assert_eq!(price, "999");

    let priced = serde_json::json!({
        "model": r#"[{"fields": {"service_interval": 6, "price": 150}}]"#
    })
    .to_string();
    apply_model(&mut price, &priced);
    assert_eq!(price, "150");
}

#[test]
fn test_form_submit_csrf() {
    let origin = PageOrigin::new("http:", "localhost:8000");
    let cookies = "csrftoken=abc123";
    assert_eq!(
        token_for("POST", "/tool_form/", &origin, cookies, "csrftoken").as_deref(),
        Some("abc123")
    );
    assert_eq!(token_for("GET", "/tool_form/", &origin, cookies, "csrftoken"), None);
}

#[test]
fn test_mask_lifecycle() {
    let mut overlay = Overlay::default();
    overlay.open(PopupId::Add);
    overlay.open(PopupId::Add);
    assert_eq!(overlay.mask_count(), 1);
    overlay.dismiss();
    assert_eq!(overlay.mask_count(), 0);
    assert!(PopupId::ALL.iter().all(|p| !overlay.is_open(*p)));
}

#[test]
fn test_banner_failure_keeps_list_mask() {
    let mut overlay = Overlay::default();
    let mut list = LatestOnly::default();
    let mut banner = LatestOnly::default();

    // Tab change: masked list load and a banner load start together
    overlay.begin_loading();
    let list_ticket = list.begin();
    let banner_ticket = banner.begin();

    // Banner answers 500 first; only the message is shown
    assert!(banner.is_current(banner_ticket));
    assert!(overlay.mask_visible());
    assert!(overlay.is_loading());

    // A replaced list load failing late is stale and keeps the mask too
    let newer = list.begin();
    assert!(!list.is_current(list_ticket));
    assert!(overlay.mask_visible());

    // The current list load ends loading, success or failure
    assert!(list.is_current(newer));
    overlay.end_loading();
    assert!(!overlay.mask_visible());
}
