use std::convert::Infallible;

use crate::{
  observable::{Observable, ObservableExt},
  observer::Observer,
  type_hint::TypeHint,
};

/// Creates an observable that emits no items, just terminates with an error.
///
/// ```
/// use rxsubjects::prelude::*;
///
/// let mut failure = None;
/// observable::throw_err::<i32, _>("boom").subscribe_err(|_| {}, |e| failure = Some(e));
/// assert_eq!(failure, Some("boom"));
/// ```
pub fn throw_err<Item, Err>(e: Err) -> ThrowObservable<Item, Err> {
  ThrowObservable { err: e, _hint: TypeHint::new() }
}

pub struct ThrowObservable<Item, Err> {
  err: Err,
  _hint: TypeHint<Item>,
}

impl<Item, Err, O> Observable<Item, Err, O> for ThrowObservable<Item, Err>
where
  O: Observer<Item, Err>,
{
  type Unsub = ();

  fn actual_subscribe(self, observer: O) -> Self::Unsub { observer.error(self.err) }
}

impl<Item, Err> ObservableExt<Item, Err> for ThrowObservable<Item, Err> {}

/// Creates an observable that produces no values and completes immediately.
///
/// ```
/// use rxsubjects::prelude::*;
///
/// let mut completed = false;
/// observable::empty::<i32>().subscribe_complete(|_| {}, || completed = true);
/// assert!(completed);
/// ```
pub fn empty<Item>() -> EmptyObservable<Item> { EmptyObservable(TypeHint::new()) }

pub struct EmptyObservable<Item>(TypeHint<Item>);

impl<Item, O> Observable<Item, Infallible, O> for EmptyObservable<Item>
where
  O: Observer<Item, Infallible>,
{
  type Unsub = ();

  fn actual_subscribe(self, observer: O) -> Self::Unsub { observer.complete() }
}

impl<Item> ObservableExt<Item, Infallible> for EmptyObservable<Item> {}

/// Creates an observable that never emits anything and never terminates.
///
/// Unsubscribing is the only way to finish it, which makes it handy for
/// watching subscription lifecycle hooks.
pub fn never<Item>() -> NeverObservable<Item> { NeverObservable(TypeHint::new()) }

pub struct NeverObservable<Item>(TypeHint<Item>);

impl<Item, O> Observable<Item, Infallible, O> for NeverObservable<Item>
where
  O: Observer<Item, Infallible>,
{
  type Unsub = ();

  fn actual_subscribe(self, _: O) -> Self::Unsub {}
}

impl<Item> ObservableExt<Item, Infallible> for NeverObservable<Item> {}

#[cfg(test)]
mod test {
  use std::cell::Cell;

  use crate::prelude::*;

  #[test]
  fn throw() {
    let mut value_emitted = false;
    let mut completed = false;
    let mut error_emitted = String::new();
    observable::throw_err::<i32, _>(String::from("error")).subscribe_all(
      |_| value_emitted = true,
      |e| error_emitted = e,
      || completed = true,
    );
    assert!(!value_emitted);
    assert!(!completed);
    assert_eq!(error_emitted, "error");
  }

  #[test]
  fn empty() {
    let mut hits = 0;
    let mut completed = false;
    observable::empty::<i32>().subscribe_complete(|_| hits += 1, || completed = true);

    assert_eq!(hits, 0);
    assert!(completed);
  }

  #[test]
  fn never_stays_silent() {
    let events = Cell::new(0);
    observable::never::<i32>()
      .subscribe_complete(|_| events.set(events.get() + 1), || events.set(events.get() + 1));
    assert_eq!(events.get(), 0);
  }
}
