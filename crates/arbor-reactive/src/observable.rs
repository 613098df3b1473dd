#![forbid(unsafe_code)]

//! Version-tracked observable values.
//!
//! An [`Observable<T>`] owns a value behind `Rc<RefCell<..>>` and pushes
//! every change to its subscribers. Subscribers are held weakly: the
//! strong side lives in the [`Subscription`] returned by
//! [`subscribe()`](Observable::subscribe), so dropping the subscription
//! is all it takes to disconnect.
//!
//! # Invariants
//!
//! 1. `version()` increments exactly once per mutation that changes the
//!    value; equal writes do not count.
//! 2. Subscribers fire in registration order.
//! 3. Dead subscriber slots are pruned lazily during notification, never
//!    eagerly.
//! 4. The interior borrow is released before any callback runs, so
//!    callbacks may freely read, write, or subscribe to the same
//!    observable.
//!
//! # Failure Modes
//!
//! - A callback that writes the observable it is observing re-enters
//!   notification; the equality guard is what bounds that recursion.
//!   Writing a genuinely new value from a callback on every pass will
//!   not terminate, exactly like any other unbounded feedback loop.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// A registered callback for one observable.
struct Subscriber<T> {
    notify: Box<dyn Fn(&T)>,
}

/// Object-safe erasure so [`Subscription`] can hold any `Subscriber<T>`.
trait AnySubscriber {}

impl<T: 'static> AnySubscriber for Subscriber<T> {}

/// RAII guard for a registered callback.
///
/// The observable only holds the callback weakly; this guard is the
/// strong reference. Dropping it disconnects the callback before the
/// next notification cycle.
#[must_use = "dropping a Subscription disconnects its callback"]
pub struct Subscription {
    _slot: Rc<dyn AnySubscriber>,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish()
    }
}

struct ObservableInner<T> {
    value: T,
    version: u64,
    subscribers: Vec<Weak<Subscriber<T>>>,
}

/// A shared, version-tracked value with change notification.
///
/// Cloning an `Observable` creates a new handle to the **same** value.
pub struct Observable<T> {
    inner: Rc<RefCell<ObservableInner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Observable")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> Observable<T> {
    /// Wrap an initial value.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ObservableInner {
                value,
                version: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Clone out the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Read the current value by reference without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Replace the value, notifying subscribers.
    ///
    /// Writing a value equal to the current one is a complete no-op: no
    /// version bump, no notifications. This guard is what makes two-way
    /// bindings converge instead of echoing forever.
    pub fn set(&self, value: T) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return;
            }
            inner.value = value.clone();
            inner.version += 1;
        }
        self.notify(&value);
    }

    /// Mutate the value in place, notifying subscribers if it changed.
    ///
    /// The closure runs against the live value; afterwards the result is
    /// compared with a pre-mutation snapshot, so a closure that ends up
    /// changing nothing costs one clone and produces no notification.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let changed = {
            let mut inner = self.inner.borrow_mut();
            let before = inner.value.clone();
            f(&mut inner.value);
            if inner.value == before {
                None
            } else {
                inner.version += 1;
                Some(inner.value.clone())
            }
        };
        if let Some(value) = changed {
            self.notify(&value);
        }
    }

    /// Register a change callback, fired on every mutation that changes
    /// the value. The callback is not invoked with the current value at
    /// registration time; pair with [`get()`](Self::get) when an initial
    /// sync is wanted.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let slot = Rc::new(Subscriber {
            notify: Box::new(callback),
        });
        self.inner.borrow_mut().subscribers.push(Rc::downgrade(&slot));
        Subscription { _slot: slot }
    }

    /// How many mutations have changed the value so far.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Number of live subscribers. Prunes dead slots as a side effect.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        let mut inner = self.inner.borrow_mut();
        inner.subscribers.retain(|weak| weak.strong_count() > 0);
        inner.subscribers.len()
    }

    /// Deliver `value` to every live subscriber, in registration order.
    ///
    /// Upgrades the whole subscriber list first and releases the borrow,
    /// so callbacks can re-enter this observable. Slots added during the
    /// pass are not in the snapshot and will first fire on the next
    /// mutation.
    fn notify(&self, value: &T) {
        let live: Vec<Rc<Subscriber<T>>> = {
            let mut inner = self.inner.borrow_mut();
            let mut upgraded = Vec::with_capacity(inner.subscribers.len());
            inner.subscribers.retain(|weak| match weak.upgrade() {
                Some(slot) => {
                    upgraded.push(slot);
                    true
                }
                None => false,
            });
            upgraded
        };
        for slot in live {
            (slot.notify)(value);
        }
    }
}

impl<T: Clone + PartialEq + Default + 'static> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn set_notifies_with_new_value() {
        let obs = Observable::new(1);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = Rc::clone(&seen);
        let _sub = obs.subscribe(move |v| seen_clone.borrow_mut().push(*v));

        obs.set(2);
        obs.set(3);
        assert_eq!(*seen.borrow(), vec![2, 3]);
    }

    #[test]
    fn equal_set_is_a_complete_noop() {
        let obs = Observable::new(42);
        let fired = Rc::new(Cell::new(0u32));
        let fired_clone = Rc::clone(&fired);
        let _sub = obs.subscribe(move |_| fired_clone.set(fired_clone.get() + 1));

        obs.set(42);
        assert_eq!(obs.version(), 0, "no version bump on equal write");
        assert_eq!(fired.get(), 0, "no notification on equal write");

        obs.set(43);
        assert_eq!(obs.version(), 1);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn version_counts_only_real_changes() {
        let obs = Observable::new(String::from("a"));
        obs.set(String::from("a"));
        obs.set(String::from("b"));
        obs.set(String::from("b"));
        obs.set(String::from("c"));
        assert_eq!(obs.version(), 2);
    }

    #[test]
    fn update_notifies_once_per_real_change() {
        let obs = Observable::new(vec![1, 2]);
        let fired = Rc::new(Cell::new(0u32));
        let fired_clone = Rc::clone(&fired);
        let _sub = obs.subscribe(move |_| fired_clone.set(fired_clone.get() + 1));

        obs.update(|v| v.push(3));
        assert_eq!(obs.get(), vec![1, 2, 3]);
        assert_eq!(fired.get(), 1);

        obs.update(|_| {});
        assert_eq!(fired.get(), 1, "no-op update does not notify");
        assert_eq!(obs.version(), 1);
    }

    #[test]
    fn subscribers_fire_in_registration_order() {
        let obs = Observable::new(0);
        let order = Rc::new(RefCell::new(Vec::new()));
        let o1 = Rc::clone(&order);
        let o2 = Rc::clone(&order);
        let o3 = Rc::clone(&order);
        let _s1 = obs.subscribe(move |_| o1.borrow_mut().push("first"));
        let _s2 = obs.subscribe(move |_| o2.borrow_mut().push("second"));
        let _s3 = obs.subscribe(move |_| o3.borrow_mut().push("third"));

        obs.set(1);
        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn dropping_subscription_disconnects() {
        let obs = Observable::new(0);
        let fired = Rc::new(Cell::new(0u32));
        let fired_clone = Rc::clone(&fired);
        let sub = obs.subscribe(move |_| fired_clone.set(fired_clone.get() + 1));

        obs.set(1);
        assert_eq!(fired.get(), 1);

        drop(sub);
        obs.set(2);
        assert_eq!(fired.get(), 1, "dropped subscription no longer fires");
    }

    #[test]
    fn subscriber_count_prunes_dead_slots() {
        let obs = Observable::new(0);
        let s1 = obs.subscribe(|_| {});
        let _s2 = obs.subscribe(|_| {});
        assert_eq!(obs.subscriber_count(), 2);

        drop(s1);
        assert_eq!(obs.subscriber_count(), 1);
    }

    #[test]
    fn callback_may_write_back_without_panicking() {
        let obs = Observable::new(0);
        let obs_clone = obs.clone();
        // Clamp writes above 10 back down; terminates via the equality guard.
        let _sub = obs.subscribe(move |v| {
            if *v > 10 {
                obs_clone.set(10);
            }
        });

        obs.set(50);
        assert_eq!(obs.get(), 10);
    }

    #[test]
    fn subscriber_added_during_notify_fires_next_pass() {
        let obs = Observable::new(0);
        let late_fired = Rc::new(Cell::new(0u32));
        let held: Rc<RefCell<Vec<Subscription>>> = Rc::new(RefCell::new(Vec::new()));

        let obs_clone = obs.clone();
        let late_clone = Rc::clone(&late_fired);
        let held_clone = Rc::clone(&held);
        let _sub = obs.subscribe(move |_| {
            if held_clone.borrow().is_empty() {
                let late = Rc::clone(&late_clone);
                let sub = obs_clone.subscribe(move |_| late.set(late.get() + 1));
                held_clone.borrow_mut().push(sub);
            }
        });

        obs.set(1);
        assert_eq!(late_fired.get(), 0, "not part of the pass that added it");

        obs.set(2);
        assert_eq!(late_fired.get(), 1);
    }

    #[test]
    fn clones_share_one_value() {
        let a = Observable::new(5);
        let b = a.clone();
        b.set(9);
        assert_eq!(a.get(), 9);
        assert_eq!(a.version(), b.version());
    }

    #[test]
    fn with_reads_without_cloning() {
        let obs = Observable::new(String::from("hello"));
        let len = obs.with(|s| s.len());
        assert_eq!(len, 5);
    }
}
