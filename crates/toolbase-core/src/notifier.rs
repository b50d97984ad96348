//! Message Notifier
//!
//! Short-lived status messages. Each new message restarts the dismissal
//! window; a dismissal scheduled for an older message is ignored.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissTicket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notifier {
    messages: Vec<String>,
    generation: u64,
}

impl Notifier {
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn is_visible(&self) -> bool {
        !self.messages.is_empty()
    }

    /// Append a message. The returned ticket is the only one that may
    /// dismiss the box.
    pub fn push(&mut self, message: impl Into<String>) -> DismissTicket {
        self.messages.push(message.into());
        self.generation += 1;
        DismissTicket(self.generation)
    }

    /// Clear the box if `ticket` belongs to the newest message.
    pub fn dismiss(&mut self, ticket: DismissTicket) -> bool {
        if ticket.0 != self.generation || self.messages.is_empty() {
            return false;
        }
        self.messages.clear();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut n = Notifier::default();
        let t = n.push("Værktøj oprettet");
        assert!(n.is_visible());
        assert!(n.dismiss(t));
        assert!(!n.is_visible());
        assert!(!n.dismiss(t));
    }

    #[test]
    fn test_newer_message_cancels_older_dismissal() {
        let mut n = Notifier::default();
        let first = n.push("Model oprettet");
        let second = n.push("Model slettet");

        // The first timer expires while the second message is still fresh
        assert!(!n.dismiss(first));
        assert_eq!(n.messages(), ["Model oprettet", "Model slettet"]);

        assert!(n.dismiss(second));
        assert!(n.messages().is_empty());
    }
}
