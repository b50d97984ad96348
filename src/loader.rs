//! Region Loader
//!
//! One per page region. Starting a load aborts the one still in flight, and
//! only the newest load may write into the region.

use web_sys::AbortController;

use toolbase_core::request::{LatestOnly, RequestTicket};

#[derive(Default)]
pub struct RegionLoader {
    slot: LatestOnly,
    inflight: Option<AbortController>,
}

impl RegionLoader {
    pub fn begin(&mut self) -> (RequestTicket, Option<AbortController>) {
        if let Some(previous) = self.inflight.take() {
            previous.abort();
        }
        let controller = AbortController::new().ok();
        self.inflight = controller.clone();
        (self.slot.begin(), controller)
    }

    /// Whether the response for `ticket` may be applied. Clears the
    /// in-flight handle once the newest load is done.
    pub fn finish(&mut self, ticket: RequestTicket) -> bool {
        let current = self.slot.is_current(ticket);
        if current {
            self.inflight = None;
        }
        current
    }
}
