//! Lifetime-scoped background work.
//!
//! A [`TaskScope`] owns abort handles for every future it spawned. Dropping the
//! scope (component unmount, controller teardown, end of a test) aborts all
//! pending timers and fetches.

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::{Rc, Weak};

use futures::future::{AbortHandle, Abortable};

use super::platform;

#[derive(Debug, Default)]
struct ScopeInner {
    next_id: u64,
    handles: HashMap<u64, AbortHandle>,
}

#[derive(Debug, Default)]
pub struct TaskScope {
    inner: Rc<RefCell<ScopeInner>>,
}

impl TaskScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + 'static,
    {
        let (handle, registration) = AbortHandle::new_pair();
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id = inner.next_id.wrapping_add(1);
            inner.handles.insert(id, handle);
            id
        };

        let owner: Weak<RefCell<ScopeInner>> = Rc::downgrade(&self.inner);
        platform::spawn_future(async move {
            // Completed tasks drop their own handle so long-lived scopes stay small.
            if Abortable::new(future, registration).await.is_ok() {
                if let Some(inner) = owner.upgrade() {
                    inner.borrow_mut().handles.remove(&id);
                }
            }
        });
    }

    /// Number of spawned tasks that have neither finished nor been cancelled.
    pub fn pending(&self) -> usize {
        self.inner.borrow().handles.len()
    }

    pub fn cancel_all(&self) {
        let handles: Vec<AbortHandle> = self
            .inner
            .borrow_mut()
            .handles
            .drain()
            .map(|(_, handle)| handle)
            .collect();
        for handle in handles {
            handle.abort();
        }
    }
}

impl Drop for TaskScope {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
