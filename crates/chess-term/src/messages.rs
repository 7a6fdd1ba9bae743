//! On-screen message queue.
//!
//! Messages display in one of two slots, above or below the board. Once
//! messages drain as they are displayed; recurring messages persist until
//! the queue is cleared (a game reset).

use std::collections::VecDeque;

/// How often a message displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    Once,
    Recurring,
}

/// Where a message displays relative to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Above,
    Below,
}

/// One message bound for the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub frequency: Frequency,
    pub slot: Slot,
}

impl Message {
    pub fn new(text: impl Into<String>, frequency: Frequency, slot: Slot) -> Self {
        Message {
            text: text.into(),
            frequency,
            slot,
        }
    }

    pub fn once_above(text: impl Into<String>) -> Self {
        Message::new(text, Frequency::Once, Slot::Above)
    }

    pub fn once_below(text: impl Into<String>) -> Self {
        Message::new(text, Frequency::Once, Slot::Below)
    }

    pub fn recurring_above(text: impl Into<String>) -> Self {
        Message::new(text, Frequency::Recurring, Slot::Above)
    }
}

/// The two-slot queue the turn loop feeds.
#[derive(Debug, Default)]
pub struct MessageQueue {
    above: VecDeque<Message>,
    below: VecDeque<Message>,
    recurring: Vec<Message>,
}

impl MessageQueue {
    pub fn new() -> Self {
        MessageQueue::default()
    }

    /// Queues a message in its slot.
    pub fn push(&mut self, message: Message) {
        match message.frequency {
            Frequency::Recurring => self.recurring.push(message),
            Frequency::Once => match message.slot {
                Slot::Above => self.above.push_back(message),
                Slot::Below => self.below.push_back(message),
            },
        }
    }

    /// Lines for the slot above the board: recurring first, then the
    /// queued once messages, which this call consumes.
    pub fn drain_above(&mut self) -> Vec<String> {
        Self::drain_slot(&self.recurring, &mut self.above, Slot::Above)
    }

    /// Lines for the slot below the board.
    pub fn drain_below(&mut self) -> Vec<String> {
        Self::drain_slot(&self.recurring, &mut self.below, Slot::Below)
    }

    /// Drops everything, recurring messages included.
    pub fn clear(&mut self) {
        self.above.clear();
        self.below.clear();
        self.recurring.clear();
    }

    fn drain_slot(
        recurring: &[Message],
        queue: &mut VecDeque<Message>,
        slot: Slot,
    ) -> Vec<String> {
        let mut lines: Vec<String> = recurring
            .iter()
            .filter(|message| message.slot == slot)
            .map(|message| message.text.clone())
            .collect();
        lines.extend(queue.drain(..).map(|message| message.text));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn once_messages_drain() {
        let mut queue = MessageQueue::new();
        queue.push(Message::once_above("first"));
        queue.push(Message::once_above("second"));
        queue.push(Message::once_below("footer"));

        assert_eq!(queue.drain_above(), vec!["first", "second"]);
        assert_eq!(queue.drain_above(), Vec::<String>::new());
        assert_eq!(queue.drain_below(), vec!["footer"]);
        assert_eq!(queue.drain_below(), Vec::<String>::new());
    }

    #[test]
    fn recurring_messages_persist() {
        let mut queue = MessageQueue::new();
        queue.push(Message::recurring_above("banner"));
        queue.push(Message::once_above("one shot"));

        assert_eq!(queue.drain_above(), vec!["banner", "one shot"]);
        assert_eq!(queue.drain_above(), vec!["banner"]);

        queue.clear();
        assert_eq!(queue.drain_above(), Vec::<String>::new());
    }

    #[test]
    fn slots_are_independent() {
        let mut queue = MessageQueue::new();
        queue.push(Message::once_below("below"));
        assert_eq!(queue.drain_above(), Vec::<String>::new());
        assert_eq!(queue.drain_below(), vec!["below"]);
    }
}
