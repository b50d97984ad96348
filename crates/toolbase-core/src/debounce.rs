//! Debounce
//!
//! Single scalar timer: every trigger cancels the pending one and starts a
//! new window. Only the timer of the latest trigger runs the action; the
//! timer itself measures the window, so wall-clock jumps cannot drop it.

pub const SEARCH_DELAY_MS: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

#[derive(Debug, Clone)]
pub struct Debounce {
    delay_ms: u32,
    generation: u64,
    pending: bool,
}

impl Debounce {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            generation: 0,
            pending: false,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Register a keystroke. Schedule a timer of `delay_ms` for the ticket.
    pub fn trigger(&mut self) -> DebounceTicket {
        self.generation += 1;
        self.pending = true;
        DebounceTicket(self.generation)
    }

    /// Whether the timer scheduled for `ticket` should run the action.
    /// Consumes the pending window on success.
    pub fn fire(&mut self, ticket: DebounceTicket) -> bool {
        if !self.pending || ticket.0 != self.generation {
            return false;
        }
        self.pending = false;
        true
    }

    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = false;
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

impl Default for Debounce {
    fn default() -> Self {
        Self::new(SEARCH_DELAY_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replay keystrokes, letting every scheduled timer try to fire at its
    /// own deadline. Returns the times at which the action ran.
    fn replay(keystrokes: &[f64]) -> Vec<f64> {
        let mut d = Debounce::default();
        let mut timers = Vec::new();
        let mut fired = Vec::new();
        let mut events: Vec<(f64, Option<DebounceTicket>)> =
            keystrokes.iter().map(|t| (*t, None)).collect();

        // Interleave keystrokes with timer expiries in time order
        let mut i = 0;
        while i < events.len() {
            let (t, ticket) = events[i];
            match ticket {
                None => {
                    let ticket = d.trigger();
                    timers.push((t + f64::from(SEARCH_DELAY_MS), ticket));
                }
                Some(ticket) => {
                    if d.fire(ticket) {
                        fired.push(t);
                    }
                }
            }
            for (due, ticket) in timers.drain(..) {
                events.push((due, Some(ticket)));
            }
            events[i + 1..].sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
            i += 1;
        }
        fired
    }

    #[test]
    fn test_burst_collapses_to_one_fire() {
        let fired = replay(&[0.0, 100.0, 250.0, 400.0, 899.0]);
        assert_eq!(fired, vec![1399.0]);
    }

    #[test]
    fn test_separate_bursts_fire_separately() {
        let fired = replay(&[0.0, 100.0, 2000.0, 2100.0]);
        assert_eq!(fired, vec![600.0, 2600.0]);
    }

    #[test]
    fn test_at_most_one_fire_per_window() {
        let keystrokes: Vec<f64> = (0..40).map(|i| f64::from(i) * 120.0).collect();
        let fired = replay(&keystrokes);
        assert_eq!(fired.len(), 1);
        for pair in fired.windows(2) {
            assert!(pair[1] - pair[0] >= f64::from(SEARCH_DELAY_MS));
        }
    }

    #[test]
    fn test_stale_ticket_and_cancel() {
        let mut d = Debounce::new(500);
        let first = d.trigger();
        let second = d.trigger();
        assert!(!d.fire(first));
        assert!(d.is_pending());
        assert!(d.fire(second));
        assert!(!d.fire(second));
        assert!(!d.is_pending());

        let third = d.trigger();
        d.cancel();
        assert!(!d.is_pending());
        assert!(!d.fire(third));
    }

    #[test]
    fn test_latest_timer_runs_after_clock_step_back() {
        // No clock is read: a timer delivered after a backwards clock
        // correction still runs the search.
        let mut d = Debounce::default();
        let ticket = d.trigger();
        assert!(d.fire(ticket));
        assert!(!d.is_pending());

        // The next burst still debounces normally
        let a = d.trigger();
        let b = d.trigger();
        assert!(!d.fire(a));
        assert!(d.fire(b));
    }
}
