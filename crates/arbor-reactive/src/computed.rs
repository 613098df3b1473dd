#![forbid(unsafe_code)]

//! Lazy computed values derived from [`Observable`] dependencies.
//!
//! A [`Computed<T>`] pairs a compute function with a cached result. When
//! any dependency changes, the cache is marked dirty; the next
//! [`get()`](Computed::get) recomputes and re-caches. Nothing is pushed:
//! a computed value is always pulled.
//!
//! # Invariants
//!
//! 1. `get()` is never stale: it reflects every dependency mutation that
//!    completed before the call.
//! 2. The compute function runs at most once per dependency change cycle
//!    (memoization), and only from `get()`/`with()`.
//! 3. Version increments by exactly 1 per recomputation.
//!
//! # Failure Modes
//!
//! - Compute function panics: the previous cached value survives and the
//!   dirty flag stays set, so the next `get()` retries.
//! - Dependency dropped: the subscription goes inert; the computed value
//!   keeps returning its last cached result.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::observable::{Observable, Subscription};

/// Shared interior for [`Computed<T>`].
struct ComputedInner<T> {
    compute: Box<dyn Fn() -> T>,
    /// None only before the first computation.
    cached: Option<T>,
    dirty: Cell<bool>,
    version: u64,
    /// Guards keeping dependency callbacks alive; never read again.
    _subscriptions: Vec<Subscription>,
}

impl<T> ComputedInner<T> {
    fn refresh_if_dirty(&mut self) {
        if self.dirty.get() || self.cached.is_none() {
            let value = (self.compute)();
            self.cached = Some(value);
            self.dirty.set(false);
            self.version += 1;
        }
    }
}

/// A lazily-evaluated, memoized value derived from observables.
///
/// Cloning a `Computed` creates a new handle to the **same** inner
/// state.
pub struct Computed<T> {
    inner: Rc<RefCell<ComputedInner<T>>>,
}

impl<T> Clone for Computed<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Computed<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Computed")
            .field("cached", &inner.cached)
            .field("dirty", &inner.dirty.get())
            .field("version", &inner.version)
            .finish()
    }
}

/// Subscribe `inner` to a source so any source change marks it dirty.
fn mark_dirty_on_change<S, T>(
    inner: &Rc<RefCell<ComputedInner<T>>>,
    source: &Observable<S>,
) -> Subscription
where
    S: Clone + PartialEq + 'static,
    T: 'static,
{
    let weak: Weak<RefCell<ComputedInner<T>>> = Rc::downgrade(inner);
    source.subscribe(move |_| {
        if let Some(strong) = weak.upgrade() {
            strong.borrow().dirty.set(true);
        }
    })
}

impl<T: Clone + 'static> Computed<T> {
    fn from_parts(compute: Box<dyn Fn() -> T>) -> Rc<RefCell<ComputedInner<T>>> {
        Rc::new(RefCell::new(ComputedInner {
            compute,
            cached: None,
            // Dirty from birth; first get() computes.
            dirty: Cell::new(true),
            version: 0,
            _subscriptions: Vec::new(),
        }))
    }

    /// Derive from a single observable through `map`.
    pub fn from_observable<S: Clone + PartialEq + 'static>(
        source: &Observable<S>,
        map: impl Fn(&S) -> T + 'static,
    ) -> Self {
        let src = source.clone();
        let inner = Self::from_parts(Box::new(move || src.with(|v| map(v))));
        let sub = mark_dirty_on_change(&inner, source);
        inner.borrow_mut()._subscriptions.push(sub);
        Self { inner }
    }

    /// Derive from two observables combined by `map`.
    pub fn from2<S1, S2>(
        s1: &Observable<S1>,
        s2: &Observable<S2>,
        map: impl Fn(&S1, &S2) -> T + 'static,
    ) -> Self
    where
        S1: Clone + PartialEq + 'static,
        S2: Clone + PartialEq + 'static,
    {
        let a = s1.clone();
        let b = s2.clone();
        let inner = Self::from_parts(Box::new(move || a.with(|v1| b.with(|v2| map(v1, v2)))));
        let subs = vec![
            mark_dirty_on_change(&inner, s1),
            mark_dirty_on_change(&inner, s2),
        ];
        inner.borrow_mut()._subscriptions.extend(subs);
        Self { inner }
    }

    /// Derive from three observables combined by `map`.
    pub fn from3<S1, S2, S3>(
        s1: &Observable<S1>,
        s2: &Observable<S2>,
        s3: &Observable<S3>,
        map: impl Fn(&S1, &S2, &S3) -> T + 'static,
    ) -> Self
    where
        S1: Clone + PartialEq + 'static,
        S2: Clone + PartialEq + 'static,
        S3: Clone + PartialEq + 'static,
    {
        let a = s1.clone();
        let b = s2.clone();
        let c = s3.clone();
        let inner = Self::from_parts(Box::new(move || {
            a.with(|v1| b.with(|v2| c.with(|v3| map(v1, v2, v3))))
        }));
        let subs = vec![
            mark_dirty_on_change(&inner, s1),
            mark_dirty_on_change(&inner, s2),
            mark_dirty_on_change(&inner, s3),
        ];
        inner.borrow_mut()._subscriptions.extend(subs);
        Self { inner }
    }

    /// Low-level constructor from a standalone compute function plus
    /// pre-built subscriptions, for callers managing dependencies by
    /// hand.
    pub fn from_fn(compute: impl Fn() -> T + 'static, subscriptions: Vec<Subscription>) -> Self {
        let inner = Self::from_parts(Box::new(compute));
        inner.borrow_mut()._subscriptions = subscriptions;
        Self { inner }
    }

    /// Get the current value, recomputing first if any dependency
    /// changed.
    #[must_use]
    pub fn get(&self) -> T {
        let mut inner = self.inner.borrow_mut();
        inner.refresh_if_dirty();
        inner
            .cached
            .as_ref()
            .expect("cached is always Some after refresh")
            .clone()
    }

    /// Access the current value by reference without cloning. Forces
    /// recomputation if dirty.
    ///
    /// # Panics
    ///
    /// Panics if the closure re-enters `get()`/`with()` on the same
    /// `Computed` (re-entrant borrow).
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.inner.borrow_mut().refresh_if_dirty();
        let inner = self.inner.borrow();
        f(inner
            .cached
            .as_ref()
            .expect("cached is always Some after refresh"))
    }

    /// Whether the cached value is stale.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.inner.borrow().dirty.get()
    }

    /// Force invalidation; the next `get()` recomputes.
    pub fn invalidate(&self) {
        self.inner.borrow().dirty.set(true);
    }

    /// Number of recomputations so far.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_and_recomputes_on_change() {
        let source = Observable::new(10);
        let doubled = Computed::from_observable(&source, |v| v * 2);

        assert_eq!(doubled.get(), 20);
        assert_eq!(doubled.version(), 1);

        source.set(5);
        assert!(doubled.is_dirty());
        assert_eq!(doubled.get(), 10);
        assert_eq!(doubled.version(), 2);
    }

    #[test]
    fn memoizes_between_dependency_changes() {
        let runs = Rc::new(Cell::new(0u32));
        let runs_clone = Rc::clone(&runs);
        let source = Observable::new(10);
        let computed = Computed::from_observable(&source, move |v| {
            runs_clone.set(runs_clone.get() + 1);
            v * 2
        });

        assert_eq!(computed.get(), 20);
        assert_eq!(computed.get(), 20);
        assert_eq!(runs.get(), 1, "second get served from cache");

        source.set(20);
        assert_eq!(computed.get(), 40);
        assert_eq!(runs.get(), 2);
    }

    #[test]
    fn equal_dependency_write_keeps_cache_clean() {
        let source = Observable::new(7);
        let derived = Computed::from_observable(&source, |v| v + 1);
        assert_eq!(derived.get(), 8);

        source.set(7);
        assert!(
            !derived.is_dirty(),
            "equal write never notified, so nothing marked dirty"
        );
        assert_eq!(derived.version(), 1);
    }

    #[test]
    fn combines_two_sources() {
        let width = Observable::new(10);
        let height = Observable::new(20);
        let area = Computed::from2(&width, &height, |w, h| w * h);

        assert_eq!(area.get(), 200);
        width.set(5);
        assert_eq!(area.get(), 100);
        height.set(30);
        assert_eq!(area.get(), 150);
    }

    #[test]
    fn combines_three_sources() {
        let a = Observable::new(1);
        let b = Observable::new(2);
        let c = Observable::new(3);
        let sum = Computed::from3(&a, &b, &c, |x, y, z| x + y + z);

        assert_eq!(sum.get(), 6);
        a.set(10);
        assert_eq!(sum.get(), 15);
    }

    #[test]
    fn from_fn_is_lazy() {
        let runs = Rc::new(Cell::new(0u32));
        let runs_clone = Rc::clone(&runs);
        let computed = Computed::from_fn(
            move || {
                runs_clone.set(runs_clone.get() + 1);
                99
            },
            vec![],
        );

        assert_eq!(runs.get(), 0, "nothing computed before first get");
        assert_eq!(computed.get(), 99);
        assert_eq!(computed.get(), 99);
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn invalidate_forces_recompute() {
        let computed = Computed::from_fn(|| 1, vec![]);
        assert_eq!(computed.get(), 1);
        assert_eq!(computed.version(), 1);

        computed.invalidate();
        assert!(computed.is_dirty());
        assert_eq!(computed.get(), 1);
        assert_eq!(computed.version(), 2);
    }

    #[test]
    fn dropped_source_leaves_value_inert() {
        let source = Observable::new(3);
        let derived = Computed::from_observable(&source, |v| v * 3);
        assert_eq!(derived.get(), 9);

        drop(source);
        assert_eq!(derived.get(), 9, "cache survives the source handle");
    }

    #[test]
    fn with_borrows_without_cloning() {
        let source = Observable::new(String::from("abc"));
        let upper = Computed::from_observable(&source, |s| s.to_uppercase());
        assert_eq!(upper.with(|s| s.len()), 3);
        assert_eq!(upper.get(), "ABC");
    }
}
