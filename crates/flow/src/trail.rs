//! Bounded FIFO of past particle position snapshots.
//!
//! Backed by a fixed set of slots and a read cursor: once full, each push
//! overwrites the oldest slot in place and reuses its allocation.

use flowart_core::error::EngineError;
use glam::DVec2;

/// Ring buffer holding at most `capacity` position snapshots, oldest first.
///
/// Snapshots are value copies taken at push time; later integration steps
/// never alter them.
#[derive(Debug, Clone)]
pub struct TrailBuffer {
    slots: Vec<Vec<DVec2>>,
    /// Index of the oldest snapshot once the buffer has wrapped; 0 before that.
    head: usize,
    capacity: usize,
}

impl TrailBuffer {
    /// Returns `EngineError::InvalidHistory` if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, EngineError> {
        if capacity == 0 {
            return Err(EngineError::InvalidHistory);
        }
        Ok(Self {
            slots: Vec::with_capacity(capacity),
            head: 0,
            capacity,
        })
    }

    /// Stores a copy of `positions`, evicting the oldest snapshot when full.
    pub fn push(&mut self, positions: &[DVec2]) {
        if self.slots.len() < self.capacity {
            self.slots.push(positions.to_vec());
            return;
        }
        let oldest = &mut self.slots[self.head];
        oldest.clear();
        oldest.extend_from_slice(positions);
        self.head = (self.head + 1) % self.capacity;
    }

    /// Stored snapshots from oldest to newest.
    pub fn snapshots(&self) -> impl ExactSizeIterator<Item = &[DVec2]> + '_ {
        let len = self.slots.len();
        (0..len).map(move |k| self.slots[(self.head + k) % len].as_slice())
    }

    pub fn oldest(&self) -> Option<&[DVec2]> {
        self.slots.get(self.head).map(Vec::as_slice)
    }

    pub fn newest(&self) -> Option<&[DVec2]> {
        let len = self.slots.len();
        if len == 0 {
            return None;
        }
        Some(&self.slots[(self.head + len - 1) % len])
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
