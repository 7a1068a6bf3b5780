//! Observable values with synchronous change notification.
//!
//! A [`Subject`] owns the latest value and notifies every registered
//! listener when it changes. Consumers only ever see the read-only
//! [`Observable`] half. Each call to [`Observable::subscribe`] returns a
//! [`Subscription`]; dropping it unregisters the listener, so the
//! subscription lives exactly as long as the component holding it.
//!
//! ```text
//! Subject::set ──→ value updated ──→ listeners(&value)
//!                                       ↑
//!             Observable::subscribe ────┘ (returns Subscription)
//! ```

use parking_lot::Mutex;
use std::sync::{Arc, Weak};

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Inner<T> {
    value: T,
    next_id: u64,
    listeners: Vec<(u64, Listener<T>)>,
}

/// Writable side of an observable value.
pub struct Subject<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

/// Read-only view of a [`Subject`].
pub struct Observable<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

/// Handle returned by [`Observable::subscribe`].
///
/// The listener stays registered until this handle is dropped (or
/// [`Subscription::unsubscribe`] is called).
#[must_use = "dropping a Subscription immediately unregisters its listener"]
pub struct Subscription {
    id: u64,
    detach: Option<Box<dyn FnOnce(u64) + Send + Sync>>,
}

impl<T> Subject<T>
where
    T: Clone + PartialEq + Send + 'static,
{
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                value,
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Current value.
    pub fn get(&self) -> T {
        self.inner.lock().value.clone()
    }

    /// Replace the value and notify listeners if it changed.
    ///
    /// Returns `true` when listeners were notified.
    pub fn set(&self, value: T) -> bool {
        let listeners = {
            let mut inner = self.inner.lock();
            if inner.value == value {
                return false;
            }
            inner.value = value.clone();
            snapshot(&inner)
        };
        // Lock released: listeners may read or subscribe re-entrantly.
        for listener in listeners {
            listener(&value);
        }
        true
    }

    /// Read-only handle sharing this subject's value.
    pub fn observable(&self) -> Observable<T> {
        Observable {
            inner: Arc::clone(&self.inner),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.lock().listeners.len()
    }
}

impl<T> Observable<T>
where
    T: Clone + PartialEq + Send + 'static,
{
    /// Current value.
    pub fn get(&self) -> T {
        self.inner.lock().value.clone()
    }

    /// Register `listener`.
    ///
    /// The listener is invoked immediately with the current value, then
    /// again after every change, until the returned [`Subscription`] is
    /// dropped.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let listener: Listener<T> = Arc::new(listener);
        let (id, current) = {
            let mut inner = self.inner.lock();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, Arc::clone(&listener)));
            (id, inner.value.clone())
        };
        listener(&current);

        let weak: Weak<Mutex<Inner<T>>> = Arc::downgrade(&self.inner);
        Subscription {
            id,
            detach: Some(Box::new(move |id| {
                if let Some(inner) = weak.upgrade() {
                    inner.lock().listeners.retain(|(entry, _)| *entry != id);
                }
            })),
        }
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.inner.lock().listeners.len()
    }
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        self.detach_now();
    }

    fn detach_now(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach(self.id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach_now();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.detach.is_some())
            .finish()
    }
}

fn snapshot<T>(inner: &Inner<T>) -> Vec<Listener<T>> {
    inner
        .listeners
        .iter()
        .map(|(_, listener)| Arc::clone(listener))
        .collect()
}
