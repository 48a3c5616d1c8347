//! FIFO message queue attached to each direction of a link.

use std::collections::VecDeque;
use std::fmt;

use super::{TopoError, TopoResult};

/// An ordered FIFO sequence of opaque payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Append a single item at the tail.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Append every item of `items` at the tail, in order of appearance.
    pub fn enqueue_many<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        for item in items {
            self.enqueue(item);
        }
    }

    /// Remove and return the head item.
    pub fn dequeue(&mut self) -> TopoResult<T> {
        self.items.pop_front().ok_or(TopoError::EmptyQueue)
    }

    /// The head item, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Number of queued items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate from head to tail.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.enqueue_many(iter);
    }
}

impl<T: fmt::Debug> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}
