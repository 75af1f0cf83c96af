//! Observer trait and implementations
//!
//! The Observer trait defines the consumer of data in the reactive pattern.
//! It provides three methods: next (for values), error (for errors), and
//! complete (for stream completion).

use std::convert::Infallible;

use crate::rc::{MutArc, MutRc, RcDeref, RcDerefMut};

// ============================================================================
// Observer Trait
// ============================================================================

/// Observer trait: The consumer of data in reactive programming
///
/// An Observer receives values, errors, and completion notifications from
/// an Observable.
pub trait Observer<Item, Err> {
  /// Receive the next value from the observable
  fn next(&mut self, value: Item);

  /// Handle an error from the observable
  ///
  /// This consumes the observer, as no more values can be emitted after an
  /// error
  fn error(self, err: Err);

  /// Handle completion of the observable
  ///
  /// This consumes the observer, as no more values can be emitted after
  /// completion
  fn complete(self);

  /// Returns `true` if the observer will not accept more values.
  ///
  /// Sources use it to stop emitting early (e.g. behind `take`), subjects use
  /// it to drop finished observers after a broadcast.
  fn is_closed(&self) -> bool;
}

// ============================================================================
// Emitter Trait
// ============================================================================

/// Emits items to an observer through a mutable reference.
///
/// `create` hands the producer a `&mut dyn Emitter`, so the concrete
/// downstream observer type never leaks into the producer closure. Terminal
/// calls take `&mut self`; anything emitted after them is ignored.
pub trait Emitter<Item, Err> {
  fn next(&mut self, value: Item);
  fn error(&mut self, err: Err);
  fn complete(&mut self);
}

// ============================================================================
// DynObserver Trait - Object-safe Observer
// ============================================================================

/// Helper trait to enable object-safe Observers (Box<dyn Observer>)
///
/// Standard Observer trait is not object-safe because terminal methods take
/// `self` by value. DynObserver mirrors the interface for vtables.
pub trait DynObserver<Item, Err> {
  fn box_next(&mut self, value: Item);
  fn box_error(self: Box<Self>, err: Err);
  fn box_complete(self: Box<Self>);
  fn box_is_closed(&self) -> bool;
}

impl<T, Item, Err> DynObserver<Item, Err> for T
where
  T: Observer<Item, Err>,
{
  fn box_next(&mut self, value: Item) { self.next(value); }
  fn box_error(self: Box<Self>, err: Err) { self.error(err); }
  fn box_complete(self: Box<Self>) { self.complete(); }
  fn box_is_closed(&self) -> bool { self.is_closed() }
}

macro_rules! impl_observer_for_box {
  ($ty:ty) => {
    impl<'a, Item, Err> Observer<Item, Err> for $ty {
      #[inline]
      fn next(&mut self, value: Item) { (**self).box_next(value) }

      #[inline]
      fn error(self, err: Err) { self.box_error(err) }

      #[inline]
      fn complete(self) { self.box_complete() }

      #[inline]
      fn is_closed(&self) -> bool { (**self).box_is_closed() }
    }
  };
}

impl_observer_for_box!(Box<dyn DynObserver<Item, Err> + 'a>);
impl_observer_for_box!(Box<dyn DynObserver<Item, Err> + Send + 'a>);

// ============================================================================
// IntoBoxedObserver Trait
// ============================================================================

/// Converts a concrete observer into the boxed form a subject stores.
///
/// Local subjects store [`BoxedObserver`], shared subjects
/// [`BoxedObserverSend`]; the bound on the target type decides whether the
/// observer must be `Send`.
pub trait IntoBoxedObserver<O> {
  fn into_boxed(self) -> O;
}

impl<'a, Item, Err, O> IntoBoxedObserver<Box<dyn DynObserver<Item, Err> + 'a>> for O
where
  O: Observer<Item, Err> + 'a,
{
  fn into_boxed(self) -> Box<dyn DynObserver<Item, Err> + 'a> { Box::new(self) }
}

impl<'a, Item, Err, O> IntoBoxedObserver<Box<dyn DynObserver<Item, Err> + Send + 'a>> for O
where
  O: Observer<Item, Err> + Send + 'a,
{
  fn into_boxed(self) -> Box<dyn DynObserver<Item, Err> + Send + 'a> { Box::new(self) }
}

/// Boxed value observer (single-threaded, no Send bound)
pub type BoxedObserver<'a, Item, Err> = Box<dyn DynObserver<Item, Err> + 'a>;

/// Boxed value observer with Send bound (multi-threaded)
pub type BoxedObserverSend<'a, Item, Err> = Box<dyn DynObserver<Item, Err> + Send + 'a>;

// ============================================================================
// Closure adapters
// ============================================================================

/// Adapts a `FnMut(Item)` closure into an observer of an infallible stream.
///
/// This is what `observable.subscribe(|v| println!("{}", v))` subscribes
/// with. Completion is ignored.
#[derive(Clone)]
pub struct FnMutObserver<F>(pub F);

impl<F, Item> Observer<Item, Infallible> for FnMutObserver<F>
where
  F: FnMut(Item),
{
  #[inline]
  fn next(&mut self, v: Item) { (self.0)(v); }

  #[inline]
  fn error(self, err: Infallible) { match err {} }

  #[inline]
  fn complete(self) {}

  #[inline]
  fn is_closed(&self) -> bool { false }
}

/// An observer assembled from three callbacks, one per kind of event.
///
/// Any callback can be a no-op closure; the `subscribe_err`,
/// `subscribe_complete` and `subscribe_all` helpers on `ObservableExt` build
/// this record for you.
///
/// ```rust
/// use rxsubjects::prelude::*;
///
/// let mut seen = vec![];
/// let mut done = false;
/// observable::from_iter([1, 2])
///   .subscribe_with(ObserverAll::new(|v| seen.push(v), |_e| {}, || done = true));
/// assert_eq!(seen, [1, 2]);
/// assert!(done);
/// ```
#[derive(Clone)]
pub struct ObserverAll<N, E, C> {
  next: N,
  error: E,
  complete: C,
}

impl<N, E, C> ObserverAll<N, E, C> {
  #[inline]
  pub fn new(next: N, error: E, complete: C) -> Self { ObserverAll { next, error, complete } }
}

impl<Item, Err, N, E, C> Observer<Item, Err> for ObserverAll<N, E, C>
where
  N: FnMut(Item),
  E: FnOnce(Err),
  C: FnOnce(),
{
  #[inline]
  fn next(&mut self, value: Item) { (self.next)(value); }

  #[inline]
  fn error(self, err: Err) { (self.error)(err); }

  #[inline]
  fn complete(self) { (self.complete)(); }

  #[inline]
  fn is_closed(&self) -> bool { false }
}

// ============================================================================
// Observer implementations for Option and reference-counted Option wrappers
// ============================================================================

/// Option observer - None ignores all events, Some delegates to inner
impl<O, Item, Err> Observer<Item, Err> for Option<O>
where
  O: Observer<Item, Err>,
{
  fn next(&mut self, value: Item) {
    if let Some(inner) = self {
      inner.next(value);
    }
  }

  fn error(self, err: Err) {
    if let Some(inner) = self {
      inner.error(err);
    }
  }

  fn complete(self) {
    if let Some(inner) = self {
      inner.complete();
    }
  }

  fn is_closed(&self) -> bool { self.as_ref().map_or(true, Observer::is_closed) }
}

macro_rules! impl_observer_for_shared_option {
  ($rc:ident) => {
    /// Shared ownership observer; terminal events take the inner observer
    /// so every clone sees it closed afterwards.
    impl<O, Item, Err> Observer<Item, Err> for $rc<Option<O>>
    where
      O: Observer<Item, Err>,
    {
      fn next(&mut self, value: Item) { self.rc_deref_mut().next(value); }

      fn error(self, err: Err) {
        let inner = self.rc_deref_mut().take();
        if let Some(inner) = inner {
          inner.error(err);
        }
      }

      fn complete(self) {
        let inner = self.rc_deref_mut().take();
        if let Some(inner) = inner {
          inner.complete();
        }
      }

      fn is_closed(&self) -> bool { Observer::<Item, Err>::is_closed(&*self.rc_deref()) }
    }
  };
}

impl_observer_for_shared_option!(MutRc);
impl_observer_for_shared_option!(MutArc);

#[cfg(test)]
mod tests {
  use super::*;

  struct TestObserver {
    values: Vec<i32>,
  }

  impl Observer<i32, ()> for TestObserver {
    fn next(&mut self, value: i32) { self.values.push(value); }

    fn error(self, _: ()) {}

    fn complete(self) {}

    fn is_closed(&self) -> bool { false }
  }

  #[test]
  fn observer_trait() {
    let mut obs = TestObserver { values: vec![] };
    obs.next(1);
    obs.next(2);
    assert_eq!(obs.values, vec![1, 2]);
    assert!(!obs.is_closed());
  }

  #[test]
  fn closure_as_observer() {
    let mut count = 0;
    let mut closure_obs = FnMutObserver(|v: i32| {
      count += v;
    });

    closure_obs.next(10);
    closure_obs.next(20);
    assert_eq!(count, 30);
  }

  #[test]
  fn boxed_observer_forwards_everything() {
    let mut errors = vec![];
    {
      let mut boxed: BoxedObserver<i32, String> =
        ObserverAll::new(|_: i32| {}, |e: String| errors.push(e), || {}).into_boxed();
      boxed.next(1);
      assert!(!boxed.is_closed());
      boxed.error("boom".to_string());
    }
    assert_eq!(errors, ["boom"]);
  }

  #[test]
  fn shared_option_closes_every_clone() {
    let shared = MutRc::own(Some(TestObserver { values: vec![] }));
    let mut other = shared.clone();
    other.next(1);
    assert!(!other.is_closed());
    shared.complete();
    assert!(other.is_closed());
  }
}
