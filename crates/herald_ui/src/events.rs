//! Visibility notifications.
//!
//! Two flavors, both explicit: registered callbacks (with symmetric
//! subscribe/unsubscribe) and crossbeam channel subscribers. Notifications
//! fire AFTER the lifecycle state has mutated; an observer that reads the
//! controller from its callback sees the new state.

use crossbeam_channel::{unbounded, Receiver, Sender};
use parking_lot::Mutex;

/// A lifecycle transition, broadcast to channel subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityEvent {
    /// The overlay was inserted and is fading in.
    Shown,
    /// The overlay was removed.
    Dismissed,
}

/// Handle returned by [`ListenerSet::subscribe`]; pass it back to
/// [`ListenerSet::unsubscribe`] to deregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Callback = Box<dyn FnMut(bool) + Send>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    callbacks: Vec<(ListenerId, Callback)>,
    channels: Vec<Sender<VisibilityEvent>>,
}

/// Listener registry for visibility transitions.
///
/// Interior mutability via `parking_lot::Mutex` so a shared controller can
/// notify without exclusive access to the registry.
#[derive(Default)]
pub struct ListenerSet {
    registry: Mutex<Registry>,
}

impl ListenerSet {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback invoked with the observable visibility flag.
    pub fn subscribe(&self, callback: impl FnMut(bool) + Send + 'static) -> ListenerId {
        let mut registry = self.registry.lock();
        registry.next_id += 1;
        let id = ListenerId(registry.next_id);
        registry.callbacks.push((id, Box::new(callback)));
        id
    }

    /// Deregisters a callback; returns false if the id was already removed.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut registry = self.registry.lock();
        let before = registry.callbacks.len();
        registry.callbacks.retain(|(listener, _)| *listener != id);
        registry.callbacks.len() != before
    }

    /// Creates a channel subscription for visibility events.
    ///
    /// Dropping the receiver is enough to deregister: disconnected senders
    /// are pruned on the next notify.
    pub fn watch(&self) -> Receiver<VisibilityEvent> {
        let (sender, receiver) = unbounded();
        self.registry.lock().channels.push(sender);
        receiver
    }

    /// Broadcasts a transition. Called after state mutation.
    pub fn notify(&self, visible: bool) {
        let event = if visible {
            VisibilityEvent::Shown
        } else {
            VisibilityEvent::Dismissed
        };

        let mut registry = self.registry.lock();
        for (_, callback) in &mut registry.callbacks {
            callback(visible);
        }
        registry.channels.retain(|sender| sender.send(event).is_ok());
    }

    /// Number of registered callbacks.
    #[must_use]
    pub fn callback_count(&self) -> usize {
        self.registry.lock().callbacks.len()
    }
}
