//! Change notifications.
//!
//! An [`EventEmitter`] keeps a list of listeners and calls them
//! synchronously on [`emit`](EventEmitter::emit). Listeners are invoked
//! after the emitter's lock is released, so a listener may subscribe,
//! unsubscribe, or call back into the table that emitted the event.
//!
//! [`EventReceiver`] adapts an emitter to a tokio channel for hosts that
//! drive rendering from an async loop.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::Weak;

use log::trace;
use tokio::sync::mpsc;

type Listener<E> = Arc<dyn Fn(&E) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ListenerId(u64);

struct EmitterInner<E> {
    next_id: u64,
    listeners: Vec<(ListenerId, Listener<E>)>,
    /// Keep the last event for late subscribers.
    replay: bool,
    last: Option<E>,
}

/// A list of listeners for one kind of event.
pub struct EventEmitter<E> {
    inner: Arc<Mutex<EmitterInner<E>>>,
}

impl<E: Clone + Send + 'static> EventEmitter<E> {
    /// Create an emitter that only delivers future events.
    pub fn new() -> Self {
        Self::build(false)
    }

    /// Create an emitter that immediately hands the most recent event to
    /// each new listener.
    pub fn replaying() -> Self {
        Self::build(true)
    }

    fn build(replay: bool) -> Self {
        Self {
            inner: Arc::new(Mutex::new(EmitterInner {
                next_id: 0,
                listeners: Vec::new(),
                replay,
                last: None,
            })),
        }
    }

    /// Register a listener.
    ///
    /// The listener stays registered until the returned [`Subscription`] is
    /// dropped or unsubscribed.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        let listener: Listener<E> = Arc::new(listener);
        let (id, replayed) = match self.inner.lock() {
            Ok(mut guard) => {
                let id = ListenerId(guard.next_id);
                guard.next_id += 1;
                guard.listeners.push((id, Arc::clone(&listener)));
                let replayed = if guard.replay { guard.last.clone() } else { None };
                (id, replayed)
            }
            Err(_) => return Subscription::empty(),
        };

        if let Some(event) = replayed {
            listener(&event);
        }

        let weak: Weak<Mutex<EmitterInner<E>>> = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade()
                && let Ok(mut guard) = inner.lock()
            {
                guard.listeners.retain(|(existing, _)| *existing != id);
            }
        })
    }

    /// Deliver an event to every registered listener.
    pub fn emit(&self, event: &E) {
        let listeners: Vec<Listener<E>> = match self.inner.lock() {
            Ok(mut guard) => {
                if guard.replay {
                    guard.last = Some(event.clone());
                }
                guard.listeners.iter().map(|(_, l)| Arc::clone(l)).collect()
            }
            Err(_) => return,
        };
        trace!("emitting event to {} listener(s)", listeners.len());
        for listener in listeners {
            listener(event);
        }
    }

    /// Get the number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.lock().map(|g| g.listeners.len()).unwrap_or(0)
    }

    /// Subscribe a channel instead of a callback.
    pub fn channel(&self) -> EventReceiver<E> {
        let (tx, rx) = mpsc::unbounded_channel();
        let subscription = self.subscribe(move |event: &E| {
            // Receiver dropped = subscription is being torn down.
            let _ = tx.send(event.clone());
        });
        EventReceiver {
            rx,
            _subscription: subscription,
        }
    }
}

impl<E: Clone + Send + 'static> Default for EventEmitter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for EventEmitter<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E> std::fmt::Debug for EventEmitter<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.inner.lock().map(|g| g.listeners.len()).unwrap_or(0);
        f.debug_struct("EventEmitter")
            .field("listeners", &count)
            .finish()
    }
}

/// Guard for a registered listener.
///
/// Dropping the guard removes the listener. Use [`detach`](Subscription::detach)
/// to keep the listener for as long as the emitter lives.
#[must_use = "dropping a Subscription immediately unsubscribes the listener"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    fn new<F>(cancel: F) -> Self
    where
        F: FnOnce() + Send + Sync + 'static,
    {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    fn empty() -> Self {
        Self { cancel: None }
    }

    /// Remove the listener now.
    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }

    /// Keep the listener registered without holding a guard.
    pub fn detach(mut self) {
        self.cancel = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// Receiving half of an event channel.
///
/// Dropping the receiver unsubscribes it from the emitter.
pub struct EventReceiver<E> {
    rx: mpsc::UnboundedReceiver<E>,
    _subscription: Subscription,
}

impl<E> EventReceiver<E> {
    /// Wait for the next event.
    ///
    /// Returns `None` once the emitter has been dropped.
    pub async fn recv(&mut self) -> Option<E> {
        self.rx.recv().await
    }

    /// Take the next event if one is already queued.
    pub fn try_recv(&mut self) -> Option<E> {
        self.rx.try_recv().ok()
    }

    /// Take every queued event.
    pub fn drain(&mut self) -> Vec<E> {
        let mut events = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            events.push(event);
        }
        events
    }
}

impl<E> std::fmt::Debug for EventReceiver<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventReceiver").finish_non_exhaustive()
    }
}
