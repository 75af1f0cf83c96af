//! Prelude module for convenient imports
//!
//! This module re-exports commonly used types and traits for easy access.

// Sources live under `observable::`, e.g. `observable::from_iter`.
pub use crate::observable;
// Core traits
pub use crate::observable::{Observable, ObservableExt};
// Observer trait and closure adapters
pub use crate::observer::{
  BoxedObserver, BoxedObserverSend, Emitter, FnMutObserver, IntoBoxedObserver, Observer,
  ObserverAll,
};
// Operators
pub use crate::ops::future::{ObservableError, ObservableFuture};
// Shared state helpers
pub use crate::rc::{CellArc, CellRc, MutArc, MutRc, RcDeref, RcDerefMut, SharedCell};
// Subject
pub use crate::subject::*;
// Subscription
pub use crate::subscription::*;
