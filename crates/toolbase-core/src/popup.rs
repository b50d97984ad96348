//! Popup & Mask State
//!
//! At most one popup is open. The mask is shown while a popup is open or the
//! list is loading, and there is never more than one of it.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Padding plus border added around a popup when centering it.
pub const POPUP_PADDING: f64 = 24.0;
/// Padding used when centering the message box.
pub const MESSAGE_PADDING: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PopupId {
    /// Create/edit form of the selected object type
    Add,
    Loan,
    Reservation,
    ContainerLoan,
    /// Loaner picker used by the toolbase loan flow
    Loaner,
    Delete,
}

impl PopupId {
    pub const ALL: [PopupId; 6] = [
        PopupId::Add,
        PopupId::Loan,
        PopupId::Reservation,
        PopupId::ContainerLoan,
        PopupId::Loaner,
        PopupId::Delete,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PopupId::Add => "add",
            PopupId::Loan => "loan",
            PopupId::Reservation => "reservation",
            PopupId::ContainerLoan => "container_loan",
            PopupId::Loaner => "loaner",
            PopupId::Delete => "delete",
        }
    }
}

impl fmt::Display for PopupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PopupId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PopupId::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| Error::UnknownPopup(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overlay {
    open: Option<PopupId>,
    loading: bool,
}

impl Overlay {
    pub fn open_popup(&self) -> Option<PopupId> {
        self.open
    }

    pub fn is_open(&self, id: PopupId) -> bool {
        self.open == Some(id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Opening a popup replaces any other open popup.
    pub fn open(&mut self, id: PopupId) {
        self.open = Some(id);
    }

    /// Close all popups. The mask stays only if a load is still running.
    pub fn close(&mut self) {
        self.open = None;
    }

    /// Mask click: everything goes away.
    pub fn dismiss(&mut self) {
        self.open = None;
        self.loading = false;
    }

    pub fn begin_loading(&mut self) {
        self.loading = true;
    }

    pub fn end_loading(&mut self) {
        self.loading = false;
    }

    pub fn mask_visible(&self) -> bool {
        self.open.is_some() || self.loading
    }

    /// Number of mask elements the page should contain.
    #[cfg(test)]
    pub fn mask_count(&self) -> usize {
        usize::from(self.mask_visible())
    }
}

/// Negative margins that center a fixed box anchored at 50%/50%.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub left: f64,
}

pub fn centering_margins(width: f64, height: f64, padding: f64) -> Margins {
    Margins {
        top: -((height + padding) / 2.0),
        left: -((width + padding) / 2.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_mask_while_open() {
        let mut o = Overlay::default();
        assert_eq!(o.mask_count(), 0);

        o.open(PopupId::Add);
        assert_eq!(o.mask_count(), 1);

        // Opening another popup does not add a second mask
        o.open(PopupId::Loan);
        o.begin_loading();
        assert_eq!(o.mask_count(), 1);
        assert!(o.is_open(PopupId::Loan));
        assert!(!o.is_open(PopupId::Add));
    }

    #[test]
    fn test_dismiss_clears_everything() {
        let mut o = Overlay::default();
        o.open(PopupId::Delete);
        o.begin_loading();
        o.dismiss();
        assert_eq!(o.mask_count(), 0);
        assert_eq!(o.open_popup(), None);
    }

    #[test]
    fn test_close_keeps_mask_for_running_load() {
        let mut o = Overlay::default();
        o.begin_loading();
        o.open(PopupId::Add);
        o.close();
        assert_eq!(o.mask_count(), 1);
        o.end_loading();
        assert_eq!(o.mask_count(), 0);
    }

    #[test]
    fn test_centering_margins() {
        let m = centering_margins(400.0, 300.0, POPUP_PADDING);
        assert_eq!(m.top, -162.0);
        assert_eq!(m.left, -212.0);
    }

    #[test]
    fn test_popup_names() {
        for p in PopupId::ALL {
            assert_eq!(p.as_str().parse::<PopupId>().unwrap(), p);
        }
        assert!("modal".parse::<PopupId>().is_err());
    }
}
