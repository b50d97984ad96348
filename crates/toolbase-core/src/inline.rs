//! Inline Sub-forms
//!
//! A form field backed by a select can expand a small form to create a new
//! related object without leaving the main form.

use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineForms {
    expanded: BTreeSet<String>,
}

impl InlineForms {
    /// Flip a field's inline form. Returns whether it is now expanded.
    pub fn toggle(&mut self, field: &str) -> bool {
        if self.expanded.remove(field) {
            false
        } else {
            self.expanded.insert(field.to_string());
            true
        }
    }

    pub fn collapse(&mut self, field: &str) {
        self.expanded.remove(field);
    }

    #[cfg(test)]
    pub fn is_expanded(&self, field: &str) -> bool {
        self.expanded.contains(field)
    }

    /// Forget everything, e.g. when the form is replaced.
    pub fn reset(&mut self) {
        self.expanded.clear();
    }
}

/// Element id of the inline form container for `field`.
pub fn container_id(field: &str) -> String {
    format!("inline_{}", field)
}

/// Element id of the select that receives new options.
pub fn select_id(field: &str) -> String {
    format!("id_{}", field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_per_field() {
        let mut forms = InlineForms::default();
        assert!(forms.toggle("category"));
        assert!(forms.toggle("model"));
        assert!(!forms.toggle("category"));
        assert!(forms.is_expanded("model"));
        assert!(!forms.is_expanded("category"));

        forms.collapse("model");
        assert!(!forms.is_expanded("model"));
    }

    #[test]
    fn test_ids() {
        assert_eq!(container_id("category"), "inline_category");
        assert_eq!(select_id("category"), "id_category");
    }
}
