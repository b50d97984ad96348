//! Row Selection
//!
//! Snapshot of the list's row checkboxes. The UI reads it from the DOM
//! before acting and writes the resulting states back.

/// CSS class marking a selected row.
pub const SELECTED_CLASS: &str = "selected";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: String,
    pub checked: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowSelection {
    rows: Vec<Row>,
}

impl RowSelection {
    pub fn from_rows<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|(id, checked)| Row { id: id.into(), checked })
                .collect(),
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Flip one row. Returns the new state, `None` for an unknown id.
    #[cfg(test)]
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        let row = self.rows.iter_mut().find(|r| r.id == id)?;
        row.checked = !row.checked;
        Some(row.checked)
    }

    /// Set every row to `checked`.
    pub fn mark_all(&mut self, checked: bool) {
        for row in &mut self.rows {
            row.checked = checked;
        }
    }

    /// Ids of the checked rows in list order.
    pub fn checked_ids(&self) -> Vec<&str> {
        self.rows
            .iter()
            .filter(|r| r.checked)
            .map(|r| r.id.as_str())
            .collect()
    }

    /// Checked ids joined by commas, as the action endpoints expect.
    pub fn joined_ids(&self) -> String {
        self.checked_ids().join(",")
    }

    pub fn all_checked(&self) -> bool {
        !self.rows.is_empty() && self.rows.iter().all(|r| r.checked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_rows() -> RowSelection {
        RowSelection::from_rows([("11", false), ("12", true), ("13", false)])
    }

    #[test]
    fn test_toggle() {
        let mut sel = three_rows();
        assert_eq!(sel.toggle("11"), Some(true));
        assert_eq!(sel.toggle("12"), Some(false));
        assert_eq!(sel.toggle("99"), None);
        assert_eq!(sel.checked_ids(), vec!["11"]);
    }

    #[test]
    fn test_mark_all_sets_every_row() {
        let mut sel = three_rows();
        sel.mark_all(true);
        assert!(sel.all_checked());
        assert_eq!(sel.joined_ids(), "11,12,13");

        sel.mark_all(false);
        assert!(sel.rows().iter().all(|r| !r.checked));
        assert_eq!(sel.joined_ids(), "");
    }

    #[test]
    fn test_empty_selection() {
        let sel = RowSelection::default();
        assert!(!sel.all_checked());
        assert!(sel.checked_ids().is_empty());
    }
}
