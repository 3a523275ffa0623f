//! Slide change notification
//!
//! Observers register with the controller and receive a [`SlideChangedEvent`]
//! synchronously, inside the call that changed the slide. Registered objects
//! are held weakly: dropping an observer ends its subscription even if it
//! never unsubscribed.

use crate::types::SlideChangedEvent;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Something that reacts to slide changes
pub trait SlideObserver {
    fn on_slide_changed(&mut self, event: &SlideChangedEvent);
}

/// Handle returned by a subscription, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

enum Handler {
    Observer(Weak<RefCell<dyn SlideObserver>>),
    Callback(Box<dyn FnMut(&SlideChangedEvent)>),
}

struct Subscriber {
    id: SubscriptionId,
    handler: Handler,
}

/// Ordered registry of slide observers
#[derive(Default)]
pub struct SlideChangedNotifier {
    next_id: u64,
    subscribers: Vec<Subscriber>,
}

impl SlideChangedNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a shared observer without keeping it alive
    pub fn subscribe<O>(&mut self, observer: &Rc<RefCell<O>>) -> SubscriptionId
    where
        O: SlideObserver + 'static,
    {
        let weak = Rc::downgrade(observer);
        let weak: Weak<RefCell<dyn SlideObserver>> = weak;
        self.push(Handler::Observer(weak))
    }

    /// Register a callback owned by the notifier until unsubscribed
    pub fn subscribe_fn<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&SlideChangedEvent) + 'static,
    {
        self.push(Handler::Callback(Box::new(callback)))
    }

    /// Remove a subscription; false if it was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|subscriber| subscriber.id != id);
        self.subscribers.len() != before
    }

    /// Number of live subscriptions
    pub fn len(&self) -> usize {
        self.subscribers
            .iter()
            .filter(|subscriber| match &subscriber.handler {
                Handler::Observer(weak) => weak.strong_count() > 0,
                Handler::Callback(_) => true,
            })
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deliver an event to every subscriber in registration order
    pub fn notify(&mut self, event: &SlideChangedEvent) {
        self.subscribers.retain(|subscriber| match &subscriber.handler {
            Handler::Observer(weak) => weak.strong_count() > 0,
            Handler::Callback(_) => true,
        });

        for subscriber in &mut self.subscribers {
            match &mut subscriber.handler {
                Handler::Observer(weak) => {
                    let Some(observer) = weak.upgrade() else {
                        continue;
                    };
                    match observer.try_borrow_mut() {
                        Ok(mut observer) => observer.on_slide_changed(event),
                        Err(_) => log::warn!(
                            "[Notify] Observer {:?} is busy, skipping slide '{}'",
                            subscriber.id,
                            event.id
                        ),
                    }
                }
                Handler::Callback(callback) => callback(event),
            }
        }
    }

    fn push(&mut self, handler: Handler) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push(Subscriber { id, handler });
        id
    }
}

impl std::fmt::Debug for SlideChangedNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlideChangedNotifier")
            .field("subscribers", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        seen: Vec<String>,
    }

    impl SlideObserver for Recorder {
        fn on_slide_changed(&mut self, event: &SlideChangedEvent) {
            self.seen.push(event.id.clone());
        }
    }

    fn event(id: &str) -> SlideChangedEvent {
        SlideChangedEvent {
            id: id.to_string(),
            header: String::new(),
            body: String::new(),
            footer: String::new(),
        }
    }

    #[test]
    fn observers_receive_events_in_order() {
        let mut notifier = SlideChangedNotifier::new();
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        notifier.subscribe(&recorder);

        notifier.notify(&event("a"));
        notifier.notify(&event("b"));

        assert_eq!(recorder.borrow().seen, vec!["a", "b"]);
    }

    #[test]
    fn unsubscribed_observer_is_not_called() {
        let mut notifier = SlideChangedNotifier::new();
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        let id = notifier.subscribe(&recorder);

        assert!(notifier.unsubscribe(id));
        assert!(!notifier.unsubscribe(id));
        notifier.notify(&event("a"));

        assert!(recorder.borrow().seen.is_empty());
    }

    #[test]
    fn dropped_observer_is_pruned() {
        let mut notifier = SlideChangedNotifier::new();
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        notifier.subscribe(&recorder);
        assert_eq!(notifier.len(), 1);

        drop(recorder);
        assert!(notifier.is_empty());
        notifier.notify(&event("a"));
    }

    #[test]
    fn callbacks_stay_until_unsubscribed() {
        let mut notifier = SlideChangedNotifier::new();
        let count = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&count);
        let id = notifier.subscribe_fn(move |_| *counter.borrow_mut() += 1);

        notifier.notify(&event("a"));
        notifier.unsubscribe(id);
        notifier.notify(&event("b"));

        assert_eq!(*count.borrow(), 1);
    }
}
