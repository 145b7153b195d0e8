//! Board listeners
//!
//! A board holds at most one listener and calls it synchronously while a
//! cascade resolves. The listener only sees events; it has no access to the
//! board, so it cannot re-enter a move.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc;

use crate::types::BoardEvent;

/// Receives board events in the order the cascade produces them.
pub trait BoardListener<T> {
    fn on_event(&mut self, event: &BoardEvent<T>);
}

impl<T, F> BoardListener<T> for F
where
    F: FnMut(&BoardEvent<T>),
{
    fn on_event(&mut self, event: &BoardEvent<T>) {
        self(event)
    }
}

/// Forward every event into an mpsc channel.
///
/// Sends to a dropped receiver are ignored; the board keeps resolving.
pub fn channel_listener<T: Clone>(tx: mpsc::Sender<BoardEvent<T>>) -> impl FnMut(&BoardEvent<T>) {
    move |event: &BoardEvent<T>| {
        let _ = tx.send(event.clone());
    }
}

/// Shared in-memory event log.
///
/// Clones share the same buffer, so one clone can be registered on the board
/// while another is kept for inspection.
#[derive(Debug)]
pub struct EventRecorder<T> {
    events: Rc<RefCell<Vec<BoardEvent<T>>>>,
}

impl<T> Clone for EventRecorder<T> {
    fn clone(&self) -> Self {
        Self {
            events: Rc::clone(&self.events),
        }
    }
}

impl<T> Default for EventRecorder<T> {
    fn default() -> Self {
        Self {
            events: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl<T: Clone> EventRecorder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    pub fn events(&self) -> Vec<BoardEvent<T>> {
        self.events.borrow().clone()
    }

    /// Remove and return everything recorded so far.
    pub fn drain(&self) -> Vec<BoardEvent<T>> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl<T: Clone> BoardListener<T> for EventRecorder<T> {
    fn on_event(&mut self, event: &BoardEvent<T>) {
        self.events.borrow_mut().push(event.clone());
    }
}
