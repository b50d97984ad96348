//! UI Components
//!
//! The page skeleton. Server fragments are loaded into the regions these
//! components render.

mod action_bar;
mod banner_panel;
mod delegate;
mod delete_popup;
mod list_panel;
mod menu_dropdown;
mod message_box;
mod navigation_tabs;
mod popup_layer;
mod search_box;

pub use action_bar::ActionBar;
pub use banner_panel::BannerPanel;
pub use delete_popup::DeletePopup;
pub use list_panel::ListPanel;
pub use menu_dropdown::MenuDropdown;
pub use message_box::MessageBox;
pub use navigation_tabs::NavigationTabs;
pub use popup_layer::PopupLayer;
pub use search_box::SearchBox;
