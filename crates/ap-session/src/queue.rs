//! `EventQueue` — the single ordered inbox of a session.
//!
//! Strict FIFO.  Events pushed while another is being handled go to the
//! back, after everything already waiting, so no handler ever runs inside
//! another.

use std::collections::VecDeque;

use crate::Event;

#[derive(Debug, Default)]
pub struct EventQueue {
    inner: VecDeque<Event>,
    /// Total events ever popped.
    handled: u64,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: Event) {
        self.inner.push_back(event);
    }

    pub fn pop(&mut self) -> Option<Event> {
        let event = self.inner.pop_front()?;
        self.handled += 1;
        Some(event)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn handled(&self) -> u64 {
        self.handled
    }

    /// Peek at waiting events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &Event> + '_ {
        self.inner.iter()
    }
}
