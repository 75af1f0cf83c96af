use std::convert::Infallible;

use crate::{
  observable::{Observable, ObservableExt},
  observer::Observer,
  type_hint::TypeHint,
};

/// Hands the source error to a callback. Downstream sees an infallible
/// stream that simply stops on error.
pub struct OnErrorOp<S, F, Err> {
  pub(crate) source: S,
  pub(crate) func: F,
  pub(crate) _hint: TypeHint<Err>,
}

impl<S, F, Item, Err, O> Observable<Item, Infallible, O> for OnErrorOp<S, F, Err>
where
  O: Observer<Item, Infallible>,
  S: Observable<Item, Err, OnErrorObserver<O, F>>,
  F: FnOnce(Err),
{
  type Unsub = S::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    self
      .source
      .actual_subscribe(OnErrorObserver { observer, func: self.func })
  }
}

impl<S, F, Item, Err> ObservableExt<Item, Infallible> for OnErrorOp<S, F, Err> where
  S: ObservableExt<Item, Err>
{
}

pub struct OnErrorObserver<O, F> {
  observer: O,
  func: F,
}

impl<Item, Err, O, F> Observer<Item, Err> for OnErrorObserver<O, F>
where
  O: Observer<Item, Infallible>,
  F: FnOnce(Err),
{
  #[inline]
  fn next(&mut self, value: Item) { self.observer.next(value) }

  #[inline]
  fn error(self, err: Err) { (self.func)(err) }

  #[inline]
  fn complete(self) { self.observer.complete() }

  #[inline]
  fn is_closed(&self) -> bool { self.observer.is_closed() }
}
