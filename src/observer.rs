//! Ordered, non-owning listener registry.

use std::rc::{Rc, Weak};

/// An ordered set of weakly held listeners.
///
/// Listeners are notified in registration order. The set never keeps a
/// listener alive; dropped listeners are pruned lazily.
pub struct ObserverSet<T: ?Sized> {
    entries: Vec<Weak<T>>,
}

impl<T: ?Sized> ObserverSet<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a listener. Adding the same listener twice is a no-op.
    pub fn add(&mut self, observer: &Rc<T>) {
        let weak = Rc::downgrade(observer);
        if self.entries.iter().any(|w| Weak::ptr_eq(w, &weak)) {
            return;
        }
        self.entries.push(weak);
    }

    pub fn remove(&mut self, observer: &Rc<T>) {
        let weak = Rc::downgrade(observer);
        self.entries.retain(|w| !Weak::ptr_eq(w, &weak));
    }

    /// Live listeners, in registration order.
    pub fn all(&self) -> Vec<Rc<T>> {
        self.entries.iter().filter_map(Weak::upgrade).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.iter().filter(|w| w.strong_count() > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Call `f` for every live listener, dropping dead entries.
    ///
    /// Listeners are snapshotted first so `f` may safely cause new
    /// registrations.
    pub fn for_each(&mut self, mut f: impl FnMut(&T)) {
        self.entries.retain(|w| w.strong_count() > 0);
        for observer in self.all() {
            f(&observer);
        }
    }
}

impl<T: ?Sized> Default for ObserverSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    trait Listener {
        fn notify(&self, log: &RefCell<Vec<&'static str>>);
    }

    struct Named(&'static str);

    impl Listener for Named {
        fn notify(&self, log: &RefCell<Vec<&'static str>>) {
            log.borrow_mut().push(self.0);
        }
    }

    #[test]
    fn test_notifies_in_registration_order() {
        let a: Rc<dyn Listener> = Rc::new(Named("a"));
        let b: Rc<dyn Listener> = Rc::new(Named("b"));
        let mut set: ObserverSet<dyn Listener> = ObserverSet::new();
        set.add(&b);
        set.add(&a);
        set.add(&b);

        let log = RefCell::new(Vec::new());
        set.for_each(|l| l.notify(&log));
        assert_eq!(*log.borrow(), vec!["b", "a"]);
    }

    #[test]
    fn test_does_not_keep_listeners_alive() {
        let mut set: ObserverSet<dyn Listener> = ObserverSet::new();
        {
            let a: Rc<dyn Listener> = Rc::new(Named("a"));
            set.add(&a);
            assert_eq!(set.len(), 1);
        }
        assert!(set.is_empty());

        let log = RefCell::new(Vec::new());
        set.for_each(|l| l.notify(&log));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_remove() {
        let a: Rc<dyn Listener> = Rc::new(Named("a"));
        let mut set: ObserverSet<dyn Listener> = ObserverSet::new();
        set.add(&a);
        set.remove(&a);
        assert!(set.is_empty());
    }
}
