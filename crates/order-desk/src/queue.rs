//! # Active Queue
//!
//! Orders waiting to be served, first in first out, never more than
//! [`ACTIVE_QUEUE_CAPACITY`] at a time.
//!
//! The queue is a fixed ring of slots with a head index and an explicit length: enqueue
//! writes at `(head + len) % capacity`, dequeue takes the slot at `head` and moves `head`
//! forward. Both are O(1), nothing is shifted, and the slot array is allocated once so the
//! queue cannot grow past its capacity.
//!
//! The queue does not look at what it holds. Rejecting duplicate codes is the desk's job
//! (see [`OrderDesk::place_order`](crate::lifecycle::OrderDesk::place_order)).

use crate::model::Order;
use thiserror::Error;

/// Orders the active queue can hold.
pub const ACTIVE_QUEUE_CAPACITY: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("active queue is full ({capacity} orders)")]
    Full { capacity: usize },
    #[error("active queue is empty")]
    Empty,
}

#[derive(Debug)]
pub struct ActiveQueue<T = Order> {
    slots: Box<[Option<T>]>,
    head: usize,
    len: usize,
}

impl<T> Default for ActiveQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ActiveQueue<T> {
    pub fn new() -> Self {
        Self {
            slots: (0..ACTIVE_QUEUE_CAPACITY).map(|_| None).collect(),
            head: 0,
            len: 0,
        }
    }

    /// Appends at the tail. A full queue rejects the value and is left unchanged.
    ///
    /// On failure the value is handed back so the caller keeps ownership.
    pub fn enqueue(&mut self, value: T) -> Result<(), (QueueError, T)> {
        if self.is_full() {
            return Err((
                QueueError::Full {
                    capacity: self.capacity(),
                },
                value,
            ));
        }
        let tail = (self.head + self.len) % self.capacity();
        self.slots[tail] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the head.
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        if self.len == 0 {
            return Err(QueueError::Empty);
        }
        let value = self.slots[self.head].take().ok_or(QueueError::Empty)?;
        self.head = (self.head + 1) % self.capacity();
        self.len -= 1;
        Ok(value)
    }

    pub fn peek(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.slots[self.head].as_ref()
    }

    /// Held values, head to tail.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let capacity = self.capacity();
        (0..self.len).filter_map(move |offset| self.slots[(self.head + offset) % capacity].as_ref())
    }

    /// An owned copy of the held values, head to tail. Later queue changes do not affect it.
    pub fn traverse(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    pub fn size(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.head = 0;
        self.len = 0;
    }
}

impl ActiveQueue<Order> {
    pub fn contains_code(&self, code: &str) -> bool {
        self.iter().any(|order| order.code == code)
    }

    /// 1-based place in line of the order with this code.
    pub fn position_of(&self, code: &str) -> Option<usize> {
        self.iter()
            .position(|order| order.code == code)
            .map(|index| index + 1)
    }
}
