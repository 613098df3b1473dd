#![forbid(unsafe_code)]

//! One-way and two-way value bindings.
//!
//! A [`Binding<T>`] is a pull-based read handle: an observable source
//! plus an optional transform, evaluated on each `get()`. The push side
//! lives on [`BindingScope`]: `bind` applies the source's current value
//! immediately and re-applies on every change, holding the subscription
//! until the scope is released. A [`TwoWayBinding`] connects two
//! observables so changes to either propagate to the other.
//!
//! ```ignore
//! let count = Observable::new(0);
//! let mut scope = BindingScope::new();
//! scope.bind_map(&count, |c| format!("items: {c}"), |s| label.set_text(s));
//! count.set(3); // label now reads "items: 3"
//! drop(scope);  // label stops tracking count
//! ```
//!
//! # Invariants
//!
//! 1. `Binding::get()` always returns the current (not stale) value.
//! 2. `BindingScope::bind` applies the current value synchronously
//!    before returning; a source that never changes afterwards still
//!    produced one application.
//! 3. `TwoWayBinding` prevents infinite cycles via a re-entrancy guard;
//!    the equality guard in `Observable::set` stops the echo write.
//! 4. Dropping a `TwoWayBinding` or a `BindingScope` disconnects every
//!    direction it owns.
//!
//! # Failure Modes
//!
//! - Transform panic: propagates to the caller of `get()` or to the
//!   mutation that triggered the push.
//! - Source dropped while a binding is alive: the binding keeps working
//!   against the shared inner value (`Rc` keeps it alive).

use std::cell::Cell;
use std::rc::Rc;

use crate::observable::{Observable, Subscription};

// ---------------------------------------------------------------------------
// Binding<T>: pull-based read handle
// ---------------------------------------------------------------------------

/// A read-only view of an observable value with an optional transform.
///
/// Evaluates lazily on each `get()`. For memoized transforms, prefer
/// [`Computed`](crate::Computed).
pub struct Binding<T> {
    eval: Rc<dyn Fn() -> T>,
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            eval: Rc::clone(&self.eval),
        }
    }
}

impl<T: std::fmt::Debug + 'static> std::fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding")
            .field("value", &self.get())
            .finish()
    }
}

impl<T: 'static> Binding<T> {
    /// Create a binding that evaluates `f` on each `get()` call.
    pub fn new(f: impl Fn() -> T + 'static) -> Self {
        Self { eval: Rc::new(f) }
    }

    /// Get the current bound value.
    #[must_use]
    pub fn get(&self) -> T {
        (self.eval)()
    }

    /// Apply a further transform, returning a new `Binding`.
    pub fn then<U: 'static>(self, f: impl Fn(T) -> U + 'static) -> Binding<U> {
        Binding {
            eval: Rc::new(move || f((self.eval)())),
        }
    }
}

/// Create a direct binding to an observable (identity transform).
pub fn bind_observable<T: Clone + PartialEq + 'static>(source: &Observable<T>) -> Binding<T> {
    let src = source.clone();
    Binding::new(move || src.get())
}

/// Create a mapped binding: `source` value transformed by `map`.
pub fn bind_mapped<S: Clone + PartialEq + 'static, T: 'static>(
    source: &Observable<S>,
    map: impl Fn(&S) -> T + 'static,
) -> Binding<T> {
    let src = source.clone();
    Binding::new(move || src.with(|v| map(v)))
}

/// Create a binding from two observables combined by `map`.
pub fn bind_mapped2<S1, S2, T>(
    s1: &Observable<S1>,
    s2: &Observable<S2>,
    map: impl Fn(&S1, &S2) -> T + 'static,
) -> Binding<T>
where
    S1: Clone + PartialEq + 'static,
    S2: Clone + PartialEq + 'static,
    T: 'static,
{
    let src1 = s1.clone();
    let src2 = s2.clone();
    Binding::new(move || src1.with(|v1| src2.with(|v2| map(v1, v2))))
}

// ---------------------------------------------------------------------------
// TwoWayBinding<T>: bidirectional sync
// ---------------------------------------------------------------------------

/// Bidirectional binding between two [`Observable`]s of the same type.
///
/// Changes to either observable propagate to the other. A re-entrancy
/// guard keeps a propagated write from re-entering the opposite
/// direction, and the equality guard in `Observable::set` suppresses the
/// echo, so one external write settles in exactly one propagation.
///
/// Drop the `TwoWayBinding` to disconnect both directions atomically.
pub struct TwoWayBinding<T: Clone + PartialEq + 'static> {
    _forward: Subscription,
    _backward: Subscription,
    _guard: Rc<Cell<bool>>,
    _phantom: std::marker::PhantomData<T>,
}

impl<T: Clone + PartialEq + 'static> TwoWayBinding<T> {
    /// Create a two-way binding between `a` and `b`.
    ///
    /// Initially syncs `b` to `a`'s current value (`a` is the source of
    /// truth at connect time). Subsequent changes to either side
    /// propagate to the other.
    pub fn new(a: &Observable<T>, b: &Observable<T>) -> Self {
        b.set(a.get());

        let syncing = Rc::new(Cell::new(false));

        let b_clone = b.clone();
        let guard = Rc::clone(&syncing);
        let forward = a.subscribe(move |val| {
            if !guard.get() {
                guard.set(true);
                b_clone.set(val.clone());
                guard.set(false);
            }
        });

        let a_clone = a.clone();
        let guard = Rc::clone(&syncing);
        let backward = b.subscribe(move |val| {
            if !guard.get() {
                guard.set(true);
                a_clone.set(val.clone());
                guard.set(false);
            }
        });

        Self {
            _forward: forward,
            _backward: backward,
            _guard: syncing,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T: Clone + PartialEq + 'static> std::fmt::Debug for TwoWayBinding<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwoWayBinding").finish()
    }
}

// ---------------------------------------------------------------------------
// Macros
// ---------------------------------------------------------------------------

/// Create a direct [`Binding`] to an observable.
///
/// # Examples
///
/// ```ignore
/// let count = Observable::new(0);
/// let b = bind!(count);
/// assert_eq!(b.get(), 0);
/// ```
#[macro_export]
macro_rules! bind {
    ($obs:expr) => {
        $crate::binding::bind_observable(&$obs)
    };
}

/// Create a mapped [`Binding`] from an observable with a transform.
///
/// # Examples
///
/// ```ignore
/// let count = Observable::new(0);
/// let label = bind_map!(count, |c| format!("Count: {c}"));
/// assert_eq!(label.get(), "Count: 0");
/// ```
#[macro_export]
macro_rules! bind_map {
    ($obs:expr, $f:expr) => {
        $crate::binding::bind_mapped(&$obs, $f)
    };
}

/// Create a mapped [`Binding`] from two observables.
///
/// # Examples
///
/// ```ignore
/// let width = Observable::new(10);
/// let height = Observable::new(20);
/// let area = bind_map2!(width, height, |w, h| w * h);
/// assert_eq!(area.get(), 200);
/// ```
#[macro_export]
macro_rules! bind_map2 {
    ($s1:expr, $s2:expr, $f:expr) => {
        $crate::binding::bind_mapped2(&$s1, &$s2, $f)
    };
}

// ---------------------------------------------------------------------------
// BindingScope: per-widget disposal
// ---------------------------------------------------------------------------

/// Collects subscriptions for a logical owner, typically one widget.
///
/// Every binding a widget creates registers its subscription here; when
/// the scope drops (with the widget), all of them are released together,
/// severing every reactive connection at once. There is no per-binding
/// unbind call anywhere in the engine: lifetime is the only
/// cancellation mechanism.
///
/// # Invariants
///
/// 1. After drop, no callback registered through this scope fires again.
/// 2. `clear()` releases everything immediately; the scope stays usable.
/// 3. `binding_count()` is always accurate.
pub struct BindingScope {
    subscriptions: Vec<Subscription>,
}

impl BindingScope {
    /// Create an empty binding scope.
    #[must_use]
    pub fn new() -> Self {
        Self {
            subscriptions: Vec::new(),
        }
    }

    /// Add an externally-created subscription to this scope.
    pub fn hold(&mut self, sub: Subscription) {
        self.subscriptions.push(sub);
    }

    /// Subscribe to an observable within this scope. The callback fires
    /// on future changes only.
    pub fn subscribe<T: Clone + PartialEq + 'static>(
        &mut self,
        source: &Observable<T>,
        callback: impl Fn(&T) + 'static,
    ) -> &mut Self {
        let sub = source.subscribe(callback);
        self.subscriptions.push(sub);
        self
    }

    /// One-way bridge: apply the source's current value now, then
    /// re-apply on every change for the life of this scope.
    pub fn bind<T: Clone + PartialEq + 'static>(
        &mut self,
        source: &Observable<T>,
        apply: impl Fn(&T) + 'static,
    ) -> &mut Self {
        source.with(&apply);
        self.subscribe(source, apply)
    }

    /// One-way bridge with a transform between source and application.
    pub fn bind_map<S, T>(
        &mut self,
        source: &Observable<S>,
        map: impl Fn(&S) -> T + 'static,
        apply: impl Fn(T) + 'static,
    ) -> &mut Self
    where
        S: Clone + PartialEq + 'static,
        T: 'static,
    {
        apply(source.with(&map));
        self.subscribe(source, move |v| apply(map(v)))
    }

    /// Keep a two-way binding alive for the life of this scope.
    pub fn hold_two_way<T: Clone + PartialEq + 'static>(&mut self, binding: TwoWayBinding<T>) {
        // The pair's two subscriptions are the connection; hold those.
        let TwoWayBinding {
            _forward,
            _backward,
            ..
        } = binding;
        self.subscriptions.push(_forward);
        self.subscriptions.push(_backward);
    }

    /// Number of active subscriptions in this scope.
    #[must_use]
    pub fn binding_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Whether the scope has no active subscriptions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Release all subscriptions immediately (scope stays reusable).
    pub fn clear(&mut self) {
        self.subscriptions.clear();
    }
}

impl Default for BindingScope {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BindingScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BindingScope")
            .field("binding_count", &self.subscriptions.len())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
