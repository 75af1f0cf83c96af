//! The observable side: sources, the [`Observable`] subscription trait and
//! the [`ObservableExt`] extension trait carrying every operator.
use std::convert::Infallible;

use crate::{
  observer::{FnMutObserver, ObserverAll},
  ops::{
    element_at::ElementAtOp,
    filter::FilterOp,
    future::{ObservableFuture, ObservableFutureObserver},
    ignore_elements::IgnoreElementsOp,
    lifecycle::{OnDisposeOp, OnSubscribeOp},
    map::MapOp,
    on_complete::OnCompleteOp,
    on_error::OnErrorOp,
    skip::SkipOp,
    skip_until::{SkipUntilOp, SkipUntilOpThreads},
    skip_while::SkipWhileOp,
    take::TakeOp,
    tap::TapOp,
  },
  subscription::Subscription,
  type_hint::TypeHint,
};

mod create;
mod from_iter;
mod of;
mod trivial;

pub use create::*;
pub use from_iter::*;
pub use of::*;
pub use trivial::*;

/// A source that can deliver `Item`s and at most one terminal event (`Err`
/// or completion) to an observer of type `O`.
///
/// Implementors only need `actual_subscribe`; users go through the
/// `subscribe*` helpers of [`ObservableExt`].
pub trait Observable<Item, Err, O> {
  type Unsub: Subscription;

  fn actual_subscribe(self, observer: O) -> Self::Unsub;
}

fn noop() {}

fn unreachable_error(err: Infallible) { match err {} }

pub trait ObservableExt<Item, Err>: Sized {
  /// Subscribe with a `next` callback. Only available for infallible
  /// streams, so an unhandled error is a type error.
  fn subscribe<N>(self, next: N) -> <Self as Observable<Item, Err, FnMutObserver<N>>>::Unsub
  where
    N: FnMut(Item),
    Self: Observable<Item, Err, FnMutObserver<N>>,
  {
    self.actual_subscribe(FnMutObserver(next))
  }

  /// Subscribe with `next` and `error` callbacks, ignoring completion.
  fn subscribe_err<N, E>(
    self,
    next: N,
    error: E,
  ) -> <Self as Observable<Item, Err, ObserverAll<N, E, fn()>>>::Unsub
  where
    N: FnMut(Item),
    E: FnOnce(Err),
    Self: Observable<Item, Err, ObserverAll<N, E, fn()>>,
  {
    self.actual_subscribe(ObserverAll::new(next, error, noop as fn()))
  }

  /// Subscribe with `next` and `complete` callbacks on an infallible
  /// stream.
  fn subscribe_complete<N, C>(
    self,
    next: N,
    complete: C,
  ) -> <Self as Observable<Item, Err, ObserverAll<N, fn(Infallible), C>>>::Unsub
  where
    N: FnMut(Item),
    C: FnOnce(),
    Self: Observable<Item, Err, ObserverAll<N, fn(Infallible), C>>,
  {
    self.actual_subscribe(ObserverAll::new(next, unreachable_error as fn(Infallible), complete))
  }

  /// Subscribe with one callback per kind of event.
  fn subscribe_all<N, E, C>(
    self,
    next: N,
    error: E,
    complete: C,
  ) -> <Self as Observable<Item, Err, ObserverAll<N, E, C>>>::Unsub
  where
    N: FnMut(Item),
    E: FnOnce(Err),
    C: FnOnce(),
    Self: Observable<Item, Err, ObserverAll<N, E, C>>,
  {
    self.actual_subscribe(ObserverAll::new(next, error, complete))
  }

  /// Subscribe an arbitrary observer, e.g. a subject.
  fn subscribe_with<O>(self, observer: O) -> <Self as Observable<Item, Err, O>>::Unsub
  where
    Self: Observable<Item, Err, O>,
  {
    self.actual_subscribe(observer)
  }

  /// Transform every value with `f`.
  fn map<B, F>(self, f: F) -> MapOp<Self, F, Item>
  where
    F: FnMut(Item) -> B,
  {
    MapOp { source: self, func: f, _hint: TypeHint::new() }
  }

  /// Emit only the values satisfying `filter`.
  fn filter<F>(self, filter: F) -> FilterOp<Self, F>
  where
    F: FnMut(&Item) -> bool,
  {
    FilterOp { source: self, filter }
  }

  /// Ignore the first `count` values.
  fn skip(self, count: usize) -> SkipOp<Self> { SkipOp { source: self, count } }

  /// Ignore values while `predicate` holds, then pass everything through.
  fn skip_while<F>(self, predicate: F) -> SkipWhileOp<Self, F>
  where
    F: FnMut(&Item) -> bool,
  {
    SkipWhileOp { source: self, predicate }
  }

  /// Ignore values until `notifier` emits its first value.
  fn skip_until<N, NItem>(self, notifier: N) -> SkipUntilOp<Self, N, NItem>
  where
    N: ObservableExt<NItem, Err>,
  {
    SkipUntilOp { source: self, notifier, _hint: TypeHint::new() }
  }

  /// Thread-safe variant of [`skip_until`](Self::skip_until).
  fn skip_until_threads<N, NItem>(self, notifier: N) -> SkipUntilOpThreads<Self, N, NItem>
  where
    N: ObservableExt<NItem, Err>,
  {
    SkipUntilOpThreads { source: self, notifier, _hint: TypeHint::new() }
  }

  /// Emit the first `count` values, then complete.
  fn take(self, count: usize) -> TakeOp<Self> { TakeOp { source: self, count } }

  /// Emit only the value at `index`, then complete. Completes without a
  /// value if the source ends first.
  fn element_at(self, index: usize) -> ElementAtOp<Self> { ElementAtOp { source: self, index } }

  /// Drop every value, keep only the terminal event.
  fn ignore_elements(self) -> IgnoreElementsOp<Self> { IgnoreElementsOp { source: self } }

  /// Invoke `f` with a reference to each value before passing it on.
  fn tap<F>(self, f: F) -> TapOp<Self, F>
  where
    F: FnMut(&Item),
  {
    TapOp { source: self, func: f }
  }

  /// Invoke `f` right before completion is passed on.
  fn on_complete<F>(self, f: F) -> OnCompleteOp<Self, F>
  where
    F: FnOnce(),
  {
    OnCompleteOp { source: self, func: f }
  }

  /// Handle the error with `f`; the resulting stream is infallible.
  fn on_error<F>(self, f: F) -> OnErrorOp<Self, F, Err>
  where
    F: FnOnce(Err),
  {
    OnErrorOp { source: self, func: f, _hint: TypeHint::new() }
  }

  /// Invoke `f` when an observer subscribes, before the source starts.
  fn on_subscribe<F>(self, f: F) -> OnSubscribeOp<Self, F>
  where
    F: FnOnce(),
  {
    OnSubscribeOp { source: self, func: f }
  }

  /// Invoke `f` when the returned subscription is unsubscribed.
  fn on_dispose<F>(self, f: F) -> OnDisposeOp<Self, F>
  where
    F: FnOnce(),
  {
    OnDisposeOp { source: self, func: f }
  }

  /// A future resolving to the single value of this stream.
  ///
  /// Resolves to `Ok(Ok(value))` for exactly one value, `Ok(Err(err))` on
  /// error and `Err(ObservableError)` when the stream completes empty or
  /// emits more than once.
  fn to_future(self) -> ObservableFuture<Item, Err>
  where
    Self: Observable<Item, Err, ObservableFutureObserver<Item, Err>>,
  {
    ObservableFuture::new(self)
  }
}
