//! Deferred event queue
//!
//! Systems push events during a tick; the consumer drains them afterwards.
//! Delivery order is push order.

/// FIFO buffer of events of one type, typically stored as a world resource
#[derive(Debug, Clone)]
pub struct EventQueue<E> {
    events: Vec<E>,
}

impl<E> Default for EventQueue<E> {
    fn default() -> Self {
        Self { events: Vec::new() }
    }
}

impl<E> EventQueue<E> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event
    pub fn push(&mut self, event: E) {
        self.events.push(event);
    }

    /// Take every queued event, leaving the queue empty
    pub fn drain(&mut self) -> Vec<E> {
        std::mem::take(&mut self.events)
    }

    /// Queued events, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.events.iter()
    }

    /// Number of queued events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_preserves_order_and_empties() {
        let mut queue = EventQueue::new();
        queue.push(1);
        queue.push(2);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.drain(), vec![1, 2]);
        assert!(queue.is_empty());
    }
}
