#![forbid(unsafe_code)]

//! Reactive data bindings for arbor.
//!
//! Change-tracking primitives that connect model values to widget
//! properties:
//!
//! - [`Observable`]: a shared, version-tracked value wrapper with change
//!   notification via subscriber callbacks.
//! - [`Subscription`]: RAII guard that disconnects its callback on drop.
//! - [`Binding`]: a lightweight pull-based read handle over one or more
//!   observables.
//! - [`Computed`]: a lazily-evaluated, memoized value derived from
//!   observable dependencies.
//! - [`BindingScope`]: the per-widget disposal scope; every subscription
//!   a widget creates lives here and is released with the widget.
//! - [`TwoWayBinding`]: bidirectional synchronization between two
//!   observables with a re-entrancy guard.
//!
//! # Architecture
//!
//! `Observable<T>` uses `Rc<RefCell<..>>` for single-threaded shared
//! ownership; every type in this crate is deliberately `!Send`, so value
//! mutation is confined to one thread by construction. Subscribers are
//! stored as `Weak` callback slots and cleaned up lazily during
//! notification.
//!
//! # Invariants
//!
//! 1. Version increments exactly once per mutation that changes the
//!    value.
//! 2. Subscribers are notified in registration order.
//! 3. Setting a value equal to the current value is a no-op (no version
//!    bump, no notifications).
//! 4. Dropping a [`Subscription`] removes the callback before the next
//!    notification cycle.
//! 5. `Computed::get()` never returns a stale value.
//! 6. A callback registered during a notification pass does not fire in
//!    that same pass.

pub mod binding;
pub mod computed;
pub mod observable;

pub use binding::{
    Binding, BindingScope, TwoWayBinding, bind_mapped, bind_mapped2, bind_observable,
};
pub use computed::Computed;
pub use observable::{Observable, Subscription};
