//! Global UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the
//! transient state the page used to keep in the DOM.

use leptos::prelude::*;
use reactive_stores::Store;

use toolbase_core::inline::InlineForms;
use toolbase_core::notifier::Notifier;
use toolbase_core::popup::Overlay;
use toolbase_core::ObjectType;

/// Object pending deletion in the delete popup
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteTarget {
    pub object_type: ObjectType,
    pub id: String,
    pub name: String,
}

/// Global UI state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Selected navigation tab
    pub selected_tab: ObjectType,
    /// Text in the search box
    pub search: String,
    /// Sort key last applied to the list
    pub sorting: Option<String>,
    /// Open popup and loading mask
    pub overlay: Overlay,
    /// Messages in the message box
    pub notifier: Notifier,
    /// Expanded inline sub-forms
    pub inline_forms: InlineForms,
    /// Object the delete popup asks about
    pub delete_target: Option<DeleteTarget>,
    /// Tool ids carried by the toolbase loaner picker
    pub loan_ids: String,
    /// Whether the menu dropdown is open
    pub menu_open: bool,
}

impl UiState {
    pub fn new(selected_tab: ObjectType) -> Self {
        Self {
            selected_tab,
            ..Default::default()
        }
    }

    /// Tab click. Clicking the shown tab resets it too, acting as a refresh.
    pub fn select_tab(&mut self, selected_tab: ObjectType) {
        self.selected_tab = selected_tab;
        self.search.clear();
        self.sorting = None;
        self.inline_forms.reset();
    }
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reselecting_tab_resets_list_state() {
        let mut state = UiState::new(ObjectType::Tool);
        state.search = "hilti".to_string();
        state.sorting = Some("-name".to_string());
        state.inline_forms.toggle("model");

        state.select_tab(ObjectType::Tool);
        assert_eq!(state.selected_tab, ObjectType::Tool);
        assert!(state.search.is_empty());
        assert_eq!(state.sorting, None);
        assert_eq!(state.inline_forms, InlineForms::default());

        state.select_tab(ObjectType::Loaner);
        assert_eq!(state.selected_tab, ObjectType::Loaner);
    }
}
