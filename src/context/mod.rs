//! Application Context
//!
//! Shared handles provided via the Leptos Context API: the UI store, page
//! config, the regions fragments are loaded into, and the timers and loaders
//! that belong to them. Operations live in the submodules as `impl` blocks.

mod details;
mod forms;
mod messages;
mod panels;
mod popups;
mod rows;
mod search;

use gloo_timers::callback::Timeout;
use leptos::html::Div;
use leptos::prelude::*;

use toolbase_core::config::{UiConfig, Variant};
use toolbase_core::debounce::Debounce;
use toolbase_core::popup::PopupId;
use toolbase_core::ObjectType;

use crate::commands::{self, FetchError};
use crate::loader::RegionLoader;
use crate::store::{UiState, UiStateStoreFields, UiStore};

/// Elements fragments are written into
#[derive(Clone, Copy)]
pub struct Regions {
    pub banner: NodeRef<Div>,
    /// List region (`div#content`, or `div#main` in v2)
    pub list: NodeRef<Div>,
    pub messages: NodeRef<Div>,
    pub add: NodeRef<Div>,
    pub loan: NodeRef<Div>,
    pub reservation: NodeRef<Div>,
    pub container_loan: NodeRef<Div>,
    pub loaner: NodeRef<Div>,
    pub delete: NodeRef<Div>,
}

impl Regions {
    fn new() -> Self {
        Self {
            banner: NodeRef::new(),
            list: NodeRef::new(),
            messages: NodeRef::new(),
            add: NodeRef::new(),
            loan: NodeRef::new(),
            reservation: NodeRef::new(),
            container_loan: NodeRef::new(),
            loaner: NodeRef::new(),
            delete: NodeRef::new(),
        }
    }

    pub fn popup(&self, id: PopupId) -> NodeRef<Div> {
        match id {
            PopupId::Add => self.add,
            PopupId::Loan => self.loan,
            PopupId::Reservation => self.reservation,
            PopupId::ContainerLoan => self.container_loan,
            PopupId::Loaner => self.loaner,
            PopupId::Delete => self.delete,
        }
    }
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: UiStore,
    pub regions: Regions,
    config: StoredValue<UiConfig>,
    banner_loader: StoredValue<RegionLoader, LocalStorage>,
    list_loader: StoredValue<RegionLoader, LocalStorage>,
    form_loader: StoredValue<RegionLoader, LocalStorage>,
    action_popup_loader: StoredValue<RegionLoader, LocalStorage>,
    search_debounce: StoredValue<Debounce>,
    search_timer: StoredValue<Option<Timeout>, LocalStorage>,
    message_timer: StoredValue<Option<Timeout>, LocalStorage>,
}

impl AppContext {
    pub fn new(config: UiConfig) -> Self {
        let store = UiStore::new(UiState::new(config.initial_tab()));
        let search_debounce = StoredValue::new(Debounce::new(config.search_delay_ms));
        Self {
            store,
            regions: Regions::new(),
            config: StoredValue::new(config),
            banner_loader: StoredValue::new_local(RegionLoader::default()),
            list_loader: StoredValue::new_local(RegionLoader::default()),
            form_loader: StoredValue::new_local(RegionLoader::default()),
            action_popup_loader: StoredValue::new_local(RegionLoader::default()),
            search_debounce,
            search_timer: StoredValue::new_local(None),
            message_timer: StoredValue::new_local(None),
        }
    }

    /// The add popup has its own loader so a bulk-action popup cannot
    /// cancel the add form's preload.
    fn popup_loader(&self, id: PopupId) -> StoredValue<RegionLoader, LocalStorage> {
        match id {
            PopupId::Add => self.form_loader,
            _ => self.action_popup_loader,
        }
    }

    pub fn config(&self) -> UiConfig {
        self.config.get_value()
    }

    pub fn variant(&self) -> Variant {
        self.config.with_value(|c| c.variant)
    }

    pub fn selected_tab(&self) -> ObjectType {
        self.store.selected_tab().get_untracked()
    }

    /// Surface a failed request. Aborted requests were replaced by newer
    /// ones and stay silent. Loading state belongs to the list load and is
    /// left alone here.
    pub fn report(&self, err: FetchError) {
        if err.is_aborted() {
            tracing::debug!("request superseded");
            return;
        }
        tracing::error!(error = %err, "request failed");
        self.show_message(format!("Der opstod en fejl: {}", err));
    }
}

/// Load `url` into `target`. `Ok(false)` when a newer load on the same
/// loader replaced this one.
async fn load_region(
    loader: StoredValue<RegionLoader, LocalStorage>,
    target: NodeRef<Div>,
    url: String,
) -> Result<bool, FetchError> {
    let Some((ticket, abort)) = loader.try_update_value(|l| l.begin()) else {
        return Ok(false);
    };
    let html = match commands::fetch_fragment(&url, abort).await {
        Ok(html) => html,
        Err(e) => {
            // A failure of a replaced load is as stale as its response
            if loader.try_update_value(|l| l.finish(ticket)).unwrap_or(false) {
                return Err(e);
            }
            tracing::debug!(url = %url, error = %e, "stale request failed");
            return Ok(false);
        }
    };

    if !loader.try_update_value(|l| l.finish(ticket)).unwrap_or(false) {
        tracing::debug!(url = %url, "stale response dropped");
        return Ok(false);
    }
    match target.get_untracked() {
        Some(el) => el.set_inner_html(&html),
        None => tracing::warn!(url = %url, "region not mounted"),
    }
    Ok(true)
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
