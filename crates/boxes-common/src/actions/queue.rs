use std::collections::VecDeque;

use super::Action;

/// FIFO of pending [`Action`]s between the host and the renderer.
///
/// Bounded: when full, the oldest action is dropped so a stalled consumer
/// cannot grow the queue without limit.
#[derive(Debug)]
pub struct ActionQueue {
    items: VecDeque<Action>,
    capacity: usize,
}

impl ActionQueue {
    /// Creates a new queue with the given maximum capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    /// Enqueue an action, evicting the oldest one if the queue is full.
    pub fn push(&mut self, action: Action) {
        if self.items.len() >= self.capacity {
            if let Some(dropped) = self.items.pop_front() {
                tracing::warn!("action queue full, dropping {:?}", dropped);
            }
        }
        self.items.push_back(action);
    }

    /// Remove and return every pending action in arrival order.
    pub fn drain(&mut self) -> impl Iterator<Item = Action> + '_ {
        self.items.drain(..)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for ActionQueue {
    fn default() -> Self {
        Self::new(64)
    }
}
