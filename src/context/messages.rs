//! Message Box

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use toolbase_core::popup::MESSAGE_PADDING;

use super::AppContext;
use crate::dom;
use crate::store::UiStateStoreFields;

impl AppContext {
    /// Append `message` and restart the dismissal timer.
    pub fn show_message(&self, message: impl Into<String>) {
        let message = message.into();
        if message.trim().is_empty() {
            return;
        }
        tracing::info!(message = %message, "message");

        let Some(ticket) = self.store.notifier().try_update(|n| n.push(message)) else {
            return;
        };

        let store = self.store;
        let timer = Timeout::new(self.config.with_value(|c| c.message_delay_ms()), move || {
            store.notifier().update(|n| {
                n.dismiss(ticket);
            });
        });
        // Dropping the old Timeout cancels it
        self.message_timer.set_value(Some(timer));

        let node = self.regions.messages;
        request_animation_frame(move || {
            if let Some(el) = node.get_untracked() {
                dom::center(&el, MESSAGE_PADDING);
            }
        });
    }
}
