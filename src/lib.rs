//! # rxsubjects: subjects and a small reactive toolkit
//!
//! Hot, multicasting [subjects](subject) in the four classic flavours
//! (publish, behavior, replay, async), the observable/observer traits they
//! plug into, a handful of operators, and a console [walkthrough](snippets)
//! of their semantics.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::{cell::RefCell, convert::Infallible};
//!
//! use rxsubjects::prelude::*;
//!
//! let seen = RefCell::new(vec![]);
//! let mut subject = LocalBehaviorSubject::<i32, Infallible>::new(0);
//! subject
//!   .clone()
//!   .filter(|v| v % 2 == 0)
//!   .map(|v| v * 10)
//!   .subscribe(|v| seen.borrow_mut().push(v));
//! (1..=4).for_each(|v| subject.next(v));
//! assert_eq!(*seen.borrow(), [0, 20, 40]);
//! ```
//!
//! ## Key Concepts
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Observable`] / [`ObservableExt`] | Sources and the operators on them |
//! | [`Observer`] | Consumes `next`, `error`, and `complete` events |
//! | [`Subscription`] | Handle to cancel an active subscription |
//! | [`LocalCompositeSubscription`] | A bag disposing many subscriptions at once |
//!
//! [`Observable`]: observable::Observable
//! [`ObservableExt`]: observable::ObservableExt
//! [`Observer`]: observer::Observer
//! [`Subscription`]: subscription::Subscription
//! [`LocalCompositeSubscription`]: subscription::LocalCompositeSubscription
#[cfg(test)]
#[macro_use]
extern crate bencher;

pub mod observable;
pub mod observer;
pub mod ops;
pub mod prelude;
pub mod rc;
pub mod snippets;
pub mod subject;
pub mod subscription;
pub mod type_hint;

// Re-export the prelude module
pub use prelude::*;
