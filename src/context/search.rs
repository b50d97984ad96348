//! Search & Ordering

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use toolbase_core::ordering::OrderKey;

use super::AppContext;
use crate::dom;
use crate::store::UiStateStoreFields;

impl AppContext {
    /// Search box keyup: remember the text and reload once typing pauses.
    pub fn search_input(&self, text: String) {
        self.store.search().set(text);

        let debounce = self.search_debounce;
        let Some((ticket, delay)) =
            debounce.try_update_value(|d| (d.trigger(), d.delay_ms()))
        else {
            return;
        };

        let ctx = *self;
        let timer = Timeout::new(delay, move || {
            let due = debounce.try_update_value(|d| d.fire(ticket)).unwrap_or(false);
            if due {
                ctx.reload_list(false, None);
            }
        });
        self.search_timer.set_value(Some(timer));
    }

    /// v2 `a.order_by`: reload ordered by the link's target, then point the
    /// link at the opposite direction.
    pub fn order_by(&self, target: &str) {
        let Some(key) = OrderKey::parse(target) else {
            tracing::warn!(target, "bad order_by target");
            return;
        };
        self.store.sorting().set(Some(key.param()));

        self.reload_list_of(self.selected_tab(), false, None, move |list| {
            let selector = format!("a[id=\"{}\"]", key.link_id());
            let link = dom::query(list, &selector).or_else(|| dom::query_document(&selector));
            match link {
                Some(link) => {
                    let _ = link.set_attribute("href", &key.next_link_target());
                }
                None => tracing::debug!(selector = %selector, "order link not found"),
            }
        });
    }
}
