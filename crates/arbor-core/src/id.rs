//! Widget identity.
//!
//! Every live widget owns a process-unique [`WidgetId`]. Identity is the
//! key for all out-of-band association: attribute records, installed
//! constraints, and binding scopes are looked up by id, never by
//! pointer.
//!
//! # Invariants
//!
//! - Ids are never reused within a process, including across widget
//!   deallocation.
//! - Allocation is lock-free and safe from any thread.

use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for unique widget IDs.
static WIDGET_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WidgetId(u64);

impl WidgetId {
    /// Allocate a new unique widget ID.
    #[must_use]
    pub fn next() -> Self {
        Self(WIDGET_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    #[inline]
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for WidgetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
