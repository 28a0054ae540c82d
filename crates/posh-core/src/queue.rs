//! FIFO-evicting sequences with a fixed maximum length.

use std::collections::VecDeque;

use tracing::trace;

use crate::CoreError;

/// Appends `element` to `seq`, dropping the oldest elements so that
/// `seq.len() <= capacity` afterwards.
///
/// A capacity of zero clears the sequence and discards `element`.
pub fn append_bounded<T>(seq: &mut Vec<T>, element: T, capacity: usize) {
    if capacity == 0 {
        seq.clear();
        return;
    }
    if seq.len() >= capacity {
        let excess = seq.len() + 1 - capacity;
        trace!(excess, capacity, "evicting oldest elements");
        seq.drain(..excess);
    }
    seq.push(element);
}

/// An ordered sequence that never holds more than `capacity` elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedQueue<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedQueue<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::new(),
            capacity,
        }
    }

    /// Like [`new`](Self::new), for capacities coming from signed input.
    pub fn try_new(capacity: i64) -> Result<Self, CoreError> {
        let capacity = usize::try_from(capacity).map_err(|_| {
            CoreError::invalid_argument(
                "capacity",
                format!("{} is negative or too large", capacity),
            )
        })?;
        Ok(Self::new(capacity))
    }

    /// Appends `element`, returning the evicted oldest element if the queue
    /// was full. With zero capacity the element itself is handed back.
    pub fn push(&mut self, element: T) -> Option<T> {
        if self.capacity == 0 {
            return Some(element);
        }
        let evicted = if self.items.len() >= self.capacity {
            self.items.pop_front()
        } else {
            None
        };
        self.items.push_back(element);
        evicted
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items.into()
    }
}

impl<T> Extend<T> for BoundedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push(element);
        }
    }
}
