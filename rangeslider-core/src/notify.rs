//! Change notification: a small single-threaded event emitter.
//!
//! A [`Notifier`] is a cheaply clonable handle onto one subscriber registry.
//! Handles own one, the controller owns another and forwards into it from
//! subscriptions on its two handles.
//!
//! Everything here lives on the UI thread, so the registry is `Rc<RefCell<_>>`
//! and `Notifier` is `!Send`.
//!
//! An event emitted from inside a callback is queued and delivered after the
//! current event has reached every subscriber.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

/// Token returned by [`Notifier::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<E> = Box<dyn FnMut(&E)>;

struct Registry<E> {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Callback<E>)>,
    /// Set while the subscriber list is checked out for delivery.
    emitting: bool,
    /// Events emitted re-entrantly, waiting for the current delivery.
    queued: VecDeque<E>,
    /// Unsubscribes requested while the subscriber list was checked out.
    pending_removal: Vec<SubscriptionId>,
}

pub struct Notifier<E> {
    registry: Rc<RefCell<Registry<E>>>,
}

impl<E> Notifier<E> {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                subscribers: Vec::new(),
                emitting: false,
                queued: VecDeque::new(),
                pending_removal: Vec::new(),
            })),
        }
    }

    /// Register `callback` to be called with every emitted event, in
    /// subscription order.
    pub fn subscribe(&self, callback: impl FnMut(&E) + 'static) -> SubscriptionId {
        let mut registry = self.registry.borrow_mut();
        let id = SubscriptionId(registry.next_id);
        registry.next_id += 1;
        registry.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber. Returns false if `id` was not subscribed here.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut registry = self.registry.borrow_mut();
        if let Some(pos) = registry.subscribers.iter().position(|(sid, _)| *sid == id) {
            registry.subscribers.remove(pos);
            return true;
        }
        if registry.emitting && id.0 < registry.next_id {
            registry.pending_removal.push(id);
            return true;
        }
        false
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().subscribers.len()
    }
}

impl<E: Clone> Notifier<E> {
    /// Deliver `event` to every subscriber.
    ///
    /// The subscriber list is checked out for the duration of the call, so
    /// callbacks may subscribe or unsubscribe on this same notifier. Those
    /// changes take effect from the next event. A callback that emits on
    /// this notifier has its event queued behind the current one.
    pub fn emit(&self, event: &E) {
        {
            let mut registry = self.registry.borrow_mut();
            if registry.emitting {
                registry.queued.push_back(event.clone());
                return;
            }
        }

        self.deliver(event);
        loop {
            let next = self.registry.borrow_mut().queued.pop_front();
            match next {
                Some(queued) => self.deliver(&queued),
                None => break,
            }
        }
    }

    fn deliver(&self, event: &E) {
        let mut active = {
            let mut registry = self.registry.borrow_mut();
            registry.emitting = true;
            std::mem::take(&mut registry.subscribers)
        };

        for (_, callback) in active.iter_mut() {
            callback(event);
        }

        let mut registry = self.registry.borrow_mut();
        registry.emitting = false;
        let added = std::mem::take(&mut registry.subscribers);
        active.extend(added);
        if !registry.pending_removal.is_empty() {
            let removed = std::mem::take(&mut registry.pending_removal);
            active.retain(|(id, _)| !removed.contains(id));
        }
        registry.subscribers = active;
    }
}

impl<E> Clone for Notifier<E> {
    fn clone(&self) -> Self {
        Self {
            registry: Rc::clone(&self.registry),
        }
    }
}

impl<E> Default for Notifier<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Notifier<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
