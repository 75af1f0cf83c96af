//! Subjects: values that are both an [`Observer`] and an observable.
//!
//! Pushing a value into a subject (`next`) multicasts it to every observer
//! attached with `subscribe`. The four variants differ only in what a new
//! observer receives when it attaches:
//!
//! | Variant | Replay on subscribe |
//! |---|---|
//! | [`LocalSubject`] (publish) | nothing, only future emissions |
//! | [`LocalBehaviorSubject`] | the latest value, seeded at construction |
//! | [`LocalReplaySubject`] | the last `n` values, or all of them |
//! | [`LocalAsyncSubject`] | nothing until completion, then the last value |
//!
//! Each comes in a `Local*` flavour (`Rc<RefCell<..>>`, observers may borrow
//! from the stack) and a `Shared*` flavour (`Arc<Mutex<..>>`, observers must
//! be `Send + 'static`).
//!
//! After `error` or `complete` a subject is terminal: later values are
//! dropped, later terminal events are ignored, and an observer attaching
//! afterwards receives its replay (per variant) followed by the terminal
//! event.
//!
//! # Re-entrancy
//!
//! Calling `next`/`error`/`complete` or `subscribe` on a local subject from
//! inside one of its own callbacks panics; on a shared subject it deadlocks.
//! The read accessors (`value`, `values`, `subscriber_count`, `status`,
//! `is_terminated`) borrow the same core and behave the same way while an
//! emission is running. Unsubscribing from inside a callback is fine: the
//! observer receives no further events.
//!
//! ```rust
//! use std::{cell::RefCell, convert::Infallible};
//!
//! use rxsubjects::prelude::*;
//!
//! let seen = RefCell::new(vec![]);
//! let mut subject = LocalSubject::<i32, Infallible>::new();
//! subject.next(1);
//! let subscription = subject.clone().subscribe(|v| seen.borrow_mut().push(v));
//! subject.next(2);
//! subscription.unsubscribe();
//! subject.next(3);
//! assert_eq!(*seen.borrow(), [2]);
//! ```
use std::{cell::RefMut, sync::MutexGuard};

use crate::{
  observable::{Observable, ObservableExt},
  observer::{BoxedObserver, BoxedObserverSend, IntoBoxedObserver, Observer},
  rc::{CellArc, CellRc, MutArc, MutRc, RcDeref, RcDerefMut, SharedCell},
};

mod async_subject;
mod behavior_subject;
mod publish_subject;
mod replay_subject;
mod subject_core;
mod subject_subscription;
mod subscribers;

pub use async_subject::*;
pub use behavior_subject::*;
pub use publish_subject::*;
pub use replay_subject::*;
pub use subject_core::{ReplayPolicy, SubjectCore, SubjectStatus};
pub use subject_subscription::SubjectSubscription;
pub use subscribers::Subscribers;

/// Core pointer of a single-threaded subject with replay policy `R`.
pub type LocalSubjectCore<'a, Item, Err, R> =
  MutRc<SubjectCore<BoxedObserver<'a, Item, Err>, CellRc<bool>, R, Err>>;

/// Core pointer of a thread-safe subject with replay policy `R`.
pub type SharedSubjectCore<Item, Err, R> =
  MutArc<SubjectCore<BoxedObserverSend<'static, Item, Err>, CellArc<bool>, R, Err>>;

/// A subject handle. Clones share the same observers, lifecycle and replay
/// buffer.
pub struct Subject<P> {
  pub(crate) core: P,
}

impl<P> Subject<P> {
  pub(crate) fn from_core(core: P) -> Self { Subject { core } }
}

impl<P: Clone> Clone for Subject<P> {
  fn clone(&self) -> Self { Subject { core: self.core.clone() } }
}

impl<P, Ob, Cell, R, Err> Subject<P>
where
  P: RcDeref<Target = SubjectCore<Ob, Cell, R, Err>>,
  Cell: SharedCell<bool>,
{
  /// Number of observers currently attached.
  pub fn subscriber_count(&self) -> usize { self.core.rc_deref().subscriber_count() }

  /// `true` once `error` or `complete` has been called.
  pub fn is_terminated(&self) -> bool { self.core.rc_deref().status().is_terminated() }

  pub fn status(&self) -> SubjectStatus<Err>
  where
    Err: Clone,
  {
    self.core.rc_deref().status().clone()
  }
}

fn borrow_local<T>(core: &MutRc<T>) -> RefMut<'_, T> {
  match core.try_rc_deref_mut() {
    Some(core) => core,
    None => panic!(
      "re-entrant subject access: next/error/complete/subscribe called from inside one of the \
       subject's own callbacks"
    ),
  }
}

#[inline]
fn borrow_shared<T>(core: &MutArc<T>) -> MutexGuard<'_, T> { core.rc_deref_mut() }

macro_rules! impl_subject {
  ($ptr:ty, [$($generics:tt)*], $cell:ident, $borrow:ident, [$($obs_bounds:tt)*]) => {
    impl<$($generics)*> Observer<Item, Err> for Subject<$ptr>
    where
      Item: Clone,
      Err: Clone,
      R: ReplayPolicy<Item>,
    {
      fn next(&mut self, value: Item) { $borrow(&self.core).emit_next(value) }

      fn error(self, err: Err) { $borrow(&self.core).emit_error::<Item>(err) }

      fn complete(self) { $borrow(&self.core).emit_complete::<Item>() }

      fn is_closed(&self) -> bool { self.core.rc_deref().status().is_terminated() }
    }

    impl<$($generics)*, O> Observable<Item, Err, O> for Subject<$ptr>
    where
      O: Observer<Item, Err> + $($obs_bounds)*,
      Item: Clone,
      Err: Clone,
      R: ReplayPolicy<Item>,
    {
      type Unsub = SubjectSubscription<$ptr, $cell<bool>>;

      fn actual_subscribe(self, observer: O) -> Self::Unsub {
        let closed = $cell::from(false);
        let id = $borrow(&self.core).attach::<Item>(observer.into_boxed(), closed.clone());
        SubjectSubscription::new(self.core, id, closed)
      }
    }

    impl<$($generics)*> ObservableExt<Item, Err> for Subject<$ptr> {}
  };
}

impl_subject!(LocalSubjectCore<'a, Item, Err, R>, ['a, Item, Err, R], CellRc, borrow_local, ['a]);
impl_subject!(
  SharedSubjectCore<Item, Err, R>,
  [Item, Err, R],
  CellArc,
  borrow_shared,
  [Send + 'static]
);

#[cfg(test)]
mod test {
  use std::{cell::RefCell, convert::Infallible, rc::Rc};

  use crate::prelude::*;

  #[test]
  fn unsubscribe_inside_callback_stops_delivery() {
    let seen = Rc::new(RefCell::new(vec![]));
    let subject = LocalSubject::<i32, Infallible>::new();
    let handle: Rc<RefCell<Option<SubjectSubscription<_, _>>>> = Rc::new(RefCell::new(None));

    let c_seen = seen.clone();
    let c_handle = handle.clone();
    let subscription = subject.clone().subscribe(move |v| {
      c_seen.borrow_mut().push(v);
      if let Some(h) = c_handle.borrow_mut().take() {
        h.unsubscribe();
      }
    });
    *handle.borrow_mut() = Some(subscription.clone());

    let mut emitter = subject.clone();
    emitter.next(1);
    emitter.next(2);
    assert_eq!(*seen.borrow(), [1]);
    assert!(subscription.is_closed());
    assert_eq!(subject.subscriber_count(), 0);
  }

  #[test]
  #[should_panic(expected = "re-entrant subject access")]
  fn reentrant_emission_panics() {
    let subject = LocalSubject::<i32, Infallible>::new();
    let mut inner = subject.clone();
    subject.clone().subscribe(move |v| inner.next(v + 1));
    subject.clone().next(0);
  }

  #[test]
  #[should_panic]
  fn accessor_inside_own_callback_panics() {
    let subject = LocalSubject::<i32, Infallible>::new();
    let inner = subject.clone();
    subject.clone().subscribe(move |_| {
      let _ = inner.subscriber_count();
    });
    subject.clone().next(0);
  }

  #[test]
  fn subject_as_downstream_observer() {
    let seen = RefCell::new(vec![]);
    let subject = LocalSubject::<i32, Infallible>::new();
    subject.clone().subscribe(|v| seen.borrow_mut().push(v));
    observable::from_iter(0..3).subscribe_with(subject.clone());
    assert_eq!(*seen.borrow(), [0, 1, 2]);
    assert!(subject.is_terminated());
  }

  #[test]
  fn handle_reports_closed_after_terminal() {
    let mut subject = LocalSubject::<i32, ()>::new();
    let subscription = subject.clone().subscribe_err(|_| {}, |_| {});
    assert!(!subscription.is_closed());
    subject.next(1);
    subject.clone().error(());
    assert!(subscription.is_closed());
    subscription.unsubscribe();
  }
}
