use crate::{
  observable::{Observable, ObservableExt},
  observer::Observer,
};

/// Drops every value and forwards only the terminal event.
#[derive(Clone)]
pub struct IgnoreElementsOp<S> {
  pub(crate) source: S,
}

impl<Item, Err, O, S> Observable<Item, Err, O> for IgnoreElementsOp<S>
where
  O: Observer<Item, Err>,
  S: Observable<Item, Err, IgnoreElementsObserver<O>>,
{
  type Unsub = S::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    self
      .source
      .actual_subscribe(IgnoreElementsObserver { observer })
  }
}

impl<Item, Err, S> ObservableExt<Item, Err> for IgnoreElementsOp<S> where
  S: ObservableExt<Item, Err>
{
}

pub struct IgnoreElementsObserver<O> {
  observer: O,
}

impl<Item, Err, O> Observer<Item, Err> for IgnoreElementsObserver<O>
where
  O: Observer<Item, Err>,
{
  #[inline]
  fn next(&mut self, _: Item) {}

  #[inline]
  fn error(self, err: Err) { self.observer.error(err) }

  #[inline]
  fn complete(self) { self.observer.complete() }

  #[inline]
  fn is_closed(&self) -> bool { self.observer.is_closed() }
}

#[cfg(test)]
mod test {
  use crate::prelude::*;

  #[test]
  fn smoke() {
    let mut hits = 0;
    let mut completed = false;
    observable::from_iter(0..20)
      .ignore_elements()
      .subscribe_complete(|_| hits += 1, || completed = true);

    assert_eq!(hits, 0);
    assert!(completed);
  }

  #[test]
  fn error_passes_through() {
    let mut failure = None;
    observable::throw_err::<i32, _>("boom")
      .ignore_elements()
      .subscribe_err(|_| {}, |e| failure = Some(e));
    assert_eq!(failure, Some("boom"));
  }
}
