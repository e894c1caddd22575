//! Active-edit update buffer
//!
//! While a note is being edited, index updates are parked here keyed by
//! note id. Each new update replaces the parked value and pushes the
//! deadline back by the configured delay. The owner polls
//! [`UpdateBuffer::take_due_at`] and flushes everything with
//! [`UpdateBuffer::drain`] when editing stops.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Pending values keyed by id, with one shared deadline per burst
#[derive(Debug, Clone)]
pub struct UpdateBuffer<T> {
    delay: Duration,
    editing: bool,
    pending: BTreeMap<String, T>,
    deadline: Option<Instant>,
}

impl<T> UpdateBuffer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            editing: false,
            pending: BTreeMap::new(),
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Switch editing on or off; returns the previous state
    pub fn set_editing(&mut self, editing: bool) -> bool {
        std::mem::replace(&mut self.editing, editing)
    }

    /// Park `value` under `key`, replacing any older value, and restart the delay.
    ///
    /// Returns true if an older value was replaced.
    pub fn push_at(&mut self, key: impl Into<String>, value: T, now: Instant) -> bool {
        self.deadline = Some(now + self.delay);
        self.pending.insert(key.into(), value).is_some()
    }

    /// Latest parked value for `key`
    pub fn get(&self, key: &str) -> Option<&T> {
        self.pending.get(key)
    }

    /// Drop the parked value for `key`
    pub fn remove(&mut self, key: &str) -> Option<T> {
        let removed = self.pending.remove(key);
        if self.pending.is_empty() {
            self.deadline = None;
        }
        removed
    }

    /// When the parked values become due, if any are parked
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take all parked values if the deadline has passed at `now`
    pub fn take_due_at(&mut self, now: Instant) -> Vec<T> {
        match self.deadline {
            Some(deadline) if deadline <= now => self.drain(),
            _ => Vec::new(),
        }
    }

    /// Take all parked values regardless of the deadline
    pub fn drain(&mut self) -> Vec<T> {
        self.deadline = None;
        std::mem::take(&mut self.pending).into_values().collect()
    }

    /// Forget everything parked
    pub fn clear(&mut self) {
        self.pending.clear();
        self.deadline = None;
    }
}
