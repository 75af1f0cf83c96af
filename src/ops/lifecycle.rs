//! Subscription lifecycle hooks: `on_subscribe` and `on_dispose`.

use crate::{
  observable::{Observable, ObservableExt},
  observer::Observer,
  subscription::Subscription,
};

/// Runs a callback when an observer subscribes, before the source starts
/// emitting.
#[derive(Clone)]
pub struct OnSubscribeOp<S, F> {
  pub(crate) source: S,
  pub(crate) func: F,
}

impl<S, F, Item, Err, O> Observable<Item, Err, O> for OnSubscribeOp<S, F>
where
  O: Observer<Item, Err>,
  S: Observable<Item, Err, O>,
  F: FnOnce(),
{
  type Unsub = S::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    (self.func)();
    self.source.actual_subscribe(observer)
  }
}

impl<S, F, Item, Err> ObservableExt<Item, Err> for OnSubscribeOp<S, F> where
  S: ObservableExt<Item, Err>
{
}

/// Runs a callback when the subscription it returns is unsubscribed.
///
/// Termination of the source does not trigger it, only an explicit
/// `unsubscribe`, mirroring a dispose hook.
#[derive(Clone)]
pub struct OnDisposeOp<S, F> {
  pub(crate) source: S,
  pub(crate) func: F,
}

impl<S, F, Item, Err, O> Observable<Item, Err, O> for OnDisposeOp<S, F>
where
  O: Observer<Item, Err>,
  S: Observable<Item, Err, O>,
  F: FnOnce(),
{
  type Unsub = OnDisposeSubscription<S::Unsub, F>;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    let inner = self.source.actual_subscribe(observer);
    OnDisposeSubscription { inner, func: self.func }
  }
}

impl<S, F, Item, Err> ObservableExt<Item, Err> for OnDisposeOp<S, F> where
  S: ObservableExt<Item, Err>
{
}

pub struct OnDisposeSubscription<U, F> {
  inner: U,
  func: F,
}

impl<U, F> Subscription for OnDisposeSubscription<U, F>
where
  U: Subscription,
  F: FnOnce(),
{
  fn unsubscribe(self) {
    self.inner.unsubscribe();
    (self.func)();
  }

  #[inline]
  fn is_closed(&self) -> bool { self.inner.is_closed() }
}

#[cfg(test)]
mod test {
  use std::{cell::RefCell, convert::Infallible};

  use crate::prelude::*;

  #[test]
  fn hooks_on_never() {
    let log = RefCell::new(vec![]);
    let subscription = observable::never::<i32>()
      .on_subscribe(|| log.borrow_mut().push("subscribe"))
      .on_complete(|| log.borrow_mut().push("complete"))
      .on_dispose(|| log.borrow_mut().push("dispose"))
      .subscribe(|_| log.borrow_mut().push("next"));
    assert_eq!(*log.borrow(), ["subscribe"]);
    subscription.unsubscribe();
    assert_eq!(*log.borrow(), ["subscribe", "dispose"]);
  }

  #[test]
  fn subscribe_hook_runs_before_replay() {
    let log = RefCell::new(vec![]);
    let subject = LocalBehaviorSubject::<&str, Infallible>::new("seed");
    subject
      .clone()
      .on_subscribe(|| log.borrow_mut().push("subscribe"))
      .subscribe(|v| log.borrow_mut().push(v));
    assert_eq!(*log.borrow(), ["subscribe", "seed"]);
  }

  #[test]
  fn dispose_detaches_from_subject() {
    let disposed = RefCell::new(false);
    let mut subject = LocalSubject::<i32, Infallible>::new();
    let subscription = subject
      .clone()
      .on_dispose(|| *disposed.borrow_mut() = true)
      .subscribe(|_| {});
    assert_eq!(subject.subscriber_count(), 1);
    subscription.unsubscribe();
    subject.next(1);
    assert!(*disposed.borrow());
    assert_eq!(subject.subscriber_count(), 0);
  }
}
