// Attendance Queue Domain Model
//
// Fixed-capacity circular FIFO shared by every request handler.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::error::{DomainError, Result};

/// Default number of identifiers the attendance queue can hold
pub const DEFAULT_QUEUE_CAPACITY: usize = 100;

/// Queue of customer document identifiers waiting to be served
pub type AttendanceQueue = BoundedQueue<String>;

/// Bounded, thread-safe FIFO backed by a fixed ring of slots.
///
/// Every operation takes the same lock, so `(head, tail, count)` is never
/// observed half-updated. Nothing blocks waiting for space or data: a full
/// queue rejects `enqueue` and an empty queue yields `None` from `dequeue`.
#[derive(Debug)]
pub struct BoundedQueue<T> {
    capacity: usize,
    inner: Mutex<Ring<T>>,
}

#[derive(Debug)]
struct Ring<T> {
    slots: Box<[Option<T>]>,
    count: usize,
    head: usize,
    tail: usize,
}

impl<T> BoundedQueue<T> {
    /// Create an empty queue holding at most `capacity` entries
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(DomainError::InvalidCapacity(capacity));
        }

        Ok(Self::with_slots(capacity))
    }

    fn with_slots(capacity: usize) -> Self {
        let slots = (0..capacity).map(|_| None).collect::<Vec<_>>();

        Self {
            capacity,
            inner: Mutex::new(Ring {
                slots: slots.into_boxed_slice(),
                count: 0,
                head: 0,
                // First enqueue advances tail onto slot 0
                tail: capacity - 1,
            }),
        }
    }

    /// Append to the back of the queue.
    ///
    /// Returns `false` and leaves the queue untouched when it is full.
    pub fn enqueue(&self, item: T) -> bool {
        let mut ring = self.lock();
        if ring.count == self.capacity {
            return false;
        }

        let tail = (ring.tail + 1) % self.capacity;
        ring.slots[tail] = Some(item);
        ring.tail = tail;
        ring.count += 1;
        true
    }

    /// Remove and return the oldest entry, or `None` when empty
    pub fn dequeue(&self) -> Option<T> {
        let mut ring = self.lock();
        if ring.count == 0 {
            return None;
        }

        let head = ring.head;
        let item = ring.slots[head].take();
        ring.head = (head + 1) % self.capacity;
        ring.count -= 1;
        item
    }

    pub fn is_empty(&self) -> bool {
        self.lock().count == 0
    }

    pub fn is_full(&self) -> bool {
        self.lock().count == self.capacity
    }

    /// Number of entries currently queued
    pub fn len(&self) -> usize {
        self.lock().count
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // No operation can panic while the ring is mid-update, so a poisoned
    // lock still guards a consistent ring.
    fn lock(&self) -> MutexGuard<'_, Ring<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Clone> BoundedQueue<T> {
    /// Copy of the queued entries, oldest first, taken under the lock
    pub fn snapshot(&self) -> Vec<T> {
        let ring = self.lock();
        let mut entries = Vec::with_capacity(ring.count);
        let mut index = ring.head;
        for _ in 0..ring.count {
            let slot = &ring.slots[index];
            // Every slot in head..head+count is occupied
            debug_assert!(slot.is_some(), "empty slot {} inside queue window", index);
            entries.extend(slot.iter().cloned());
            index = (index + 1) % self.capacity;
        }
        entries
    }
}

impl<T> Default for BoundedQueue<T> {
    fn default() -> Self {
        Self::with_slots(DEFAULT_QUEUE_CAPACITY)
    }
}
