//! Detail Rows
//!
//! List rows can expand a hidden row underneath with a fragment loaded on
//! demand (tool history, a loaner's loans, the tools of a model/category).

use crate::id_selector;
use crate::object_type::ObjectType;
use crate::query::Query;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailKind {
    History,
    Loans,
    ModelTools,
    CategoryTools,
    /// v2 tool details
    ToolDetails,
}

impl DetailKind {
    /// Map the triggering link's class.
    pub fn from_link_class(class: &str) -> Option<Self> {
        match class {
            "show_history" => Some(DetailKind::History),
            "show_loans" => Some(DetailKind::Loans),
            "show_model_tools" => Some(DetailKind::ModelTools),
            "show_category_tools" => Some(DetailKind::CategoryTools),
            "show_details" => Some(DetailKind::ToolDetails),
            _ => None,
        }
    }

    pub const LINK_CLASSES: [&'static str; 5] = [
        "show_history",
        "show_loans",
        "show_model_tools",
        "show_category_tools",
        "show_details",
    ];

    /// Fragment URL for parent `id`.
    pub fn url(self, id: &str, object_type: ObjectType) -> String {
        match self {
            DetailKind::History => Query::new().with("tool_id", id).url("/event_list/"),
            DetailKind::Loans => Query::new()
                .with("loaner_id", id)
                .with("object_type", object_type.as_str())
                .url("/loan_list/"),
            DetailKind::ModelTools => Query::new()
                .with("model_id", id)
                .with("show_model", "false")
                .url("/simple_tool_list/"),
            DetailKind::CategoryTools => Query::new()
                .with("category_id", id)
                .with("show_model", "true")
                .url("/simple_tool_list/"),
            DetailKind::ToolDetails => format!("/version2/vaerktoej/{}/", id),
        }
    }

    /// Selector of the expandable row.
    pub fn row_selector(self, id: &str) -> String {
        match self {
            DetailKind::History | DetailKind::Loans => id_selector("tr", id, Some("history")),
            DetailKind::ModelTools | DetailKind::CategoryTools => {
                id_selector("tr", id, Some("tools"))
            }
            DetailKind::ToolDetails => id_selector("tr", &format!("details-{}", id), None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        assert_eq!(DetailKind::History.url("7", ObjectType::Tool), "/event_list/?tool_id=7");
        assert_eq!(
            DetailKind::Loans.url("3", ObjectType::BuildingSite),
            "/loan_list/?loaner_id=3&object_type=building_site"
        );
        assert_eq!(
            DetailKind::CategoryTools.url("2", ObjectType::Category),
            "/simple_tool_list/?category_id=2&show_model=true"
        );
        assert_eq!(DetailKind::ToolDetails.url("9", ObjectType::Tool), "/version2/vaerktoej/9/");
    }

    #[test]
    fn test_row_selectors() {
        assert_eq!(DetailKind::History.row_selector("7"), r#"tr.history[id="7"]"#);
        assert_eq!(DetailKind::ModelTools.row_selector("7"), r#"tr.tools[id="7"]"#);
        assert_eq!(DetailKind::ToolDetails.row_selector("7"), r#"tr[id="details-7"]"#);
    }

    #[test]
    fn test_link_classes() {
        for class in DetailKind::LINK_CLASSES {
            assert!(DetailKind::from_link_class(class).is_some());
        }
        assert_eq!(DetailKind::from_link_class("edit"), None);
    }
}
