//! Latest-only Requests
//!
//! A region hands out a ticket per load; only the newest ticket may apply
//! its response.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LatestOnly {
    generation: u64,
}

impl LatestOnly {
    pub fn begin(&mut self) -> RequestTicket {
        self.generation += 1;
        RequestTicket(self.generation)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.generation == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slow_earlier_response_is_dropped() {
        let mut slot = LatestOnly::default();
        let slow = slot.begin();
        let fast = slot.begin();
        // fast answers first and applies, slow answers later and must not
        assert!(slot.is_current(fast));
        assert!(!slot.is_current(slow));
    }
}
