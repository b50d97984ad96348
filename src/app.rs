//! Toolbase Frontend App
//!
//! Page skeleton per front end. The backend fills the regions with HTML
//! fragments; this component provides the context and triggers the first
//! load.

use leptos::prelude::*;

use toolbase_core::config::{UiConfig, Variant};

use crate::components::{
    ActionBar, BannerPanel, ListPanel, MenuDropdown, MessageBox, NavigationTabs, PopupLayer,
    SearchBox,
};
use crate::context::AppContext;

#[component]
pub fn App(config: UiConfig) -> impl IntoView {
    let variant = config.variant;
    let ctx = AppContext::new(config);
    provide_context(ctx);

    // Regions are mounted once this runs
    Effect::new(move |_| ctx.load_panels());

    let header = match variant {
        Variant::V2 => view! {
            <div id="header">
                <MenuDropdown />
                <SearchBox />
                <ActionBar />
            </div>
        }
        .into_any(),
        Variant::Toolbase | Variant::Toolcontrol => view! {
            <div id="header">
                <MenuDropdown />
                <NavigationTabs />
                <SearchBox />
            </div>
            <BannerPanel />
        }
        .into_any(),
    };

    view! {
        {header}
        <ListPanel />
        <PopupLayer />
        <MessageBox />
    }
}
