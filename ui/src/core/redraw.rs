//! Registry of theme-dependent redraw callbacks.
//!
//! Components whose output depends on the theme (charts) register a callback
//! and keep the returned [`RedrawHandle`] alive for as long as they are mounted.
//! [`RedrawRegistry::notify`] runs every live callback; with no registrations it
//! does nothing.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Callback = Rc<dyn Fn()>;

#[derive(Default)]
struct Entries {
    next_id: u64,
    callbacks: Vec<(u64, Callback)>,
}

#[derive(Clone, Default)]
pub struct RedrawRegistry {
    entries: Rc<RefCell<Entries>>,
}

impl RedrawRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, callback: impl Fn() + 'static) -> RedrawHandle {
        let mut entries = self.entries.borrow_mut();
        let id = entries.next_id;
        entries.next_id = entries.next_id.wrapping_add(1);
        entries.callbacks.push((id, Rc::new(callback)));

        RedrawHandle {
            id,
            entries: Rc::downgrade(&self.entries),
        }
    }

    /// Invoke every registered callback, returning how many ran.
    pub fn notify(&self) -> usize {
        // Snapshot first: a callback may register or drop handles.
        let callbacks: Vec<Callback> = self
            .entries
            .borrow()
            .callbacks
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();

        for callback in &callbacks {
            callback();
        }
        callbacks.len()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for RedrawRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedrawRegistry")
            .field("registered", &self.len())
            .finish()
    }
}

/// Unregisters its callback when dropped.
pub struct RedrawHandle {
    id: u64,
    entries: Weak<RefCell<Entries>>,
}

impl Drop for RedrawHandle {
    fn drop(&mut self) {
        if let Some(entries) = self.entries.upgrade() {
            entries
                .borrow_mut()
                .callbacks
                .retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn notify_without_listeners_is_a_no_op() {
        let registry = RedrawRegistry::new();
        assert_eq!(registry.notify(), 0);
    }

    #[test]
    fn dropped_handles_stop_receiving() {
        let registry = RedrawRegistry::new();
        let hits = Rc::new(Cell::new(0));

        let counter = hits.clone();
        let handle = registry.register(move || counter.set(counter.get() + 1));
        let counter = hits.clone();
        let _kept = registry.register(move || counter.set(counter.get() + 10));

        assert_eq!(registry.notify(), 2);
        assert_eq!(hits.get(), 11);

        drop(handle);
        assert_eq!(registry.notify(), 1);
        assert_eq!(hits.get(), 21);
    }

    #[test]
    fn handle_outliving_registry_is_harmless() {
        let registry = RedrawRegistry::new();
        let handle = registry.register(|| {});
        drop(registry);
        drop(handle);
    }
}
