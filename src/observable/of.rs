use std::convert::Infallible;

use crate::{
  observable::{Observable, ObservableExt},
  observer::Observer,
};

/// Creates an observable producing a single value, then completing.
///
/// ```
/// use rxsubjects::prelude::*;
///
/// let mut seen = None;
/// observable::of(123).subscribe(|v| seen = Some(v));
/// assert_eq!(seen, Some(123));
/// ```
pub fn of<Item>(v: Item) -> ObservableOf<Item> { ObservableOf(v) }

#[derive(Clone)]
pub struct ObservableOf<Item>(Item);

impl<Item, O> Observable<Item, Infallible, O> for ObservableOf<Item>
where
  O: Observer<Item, Infallible>,
{
  type Unsub = ();

  fn actual_subscribe(self, mut observer: O) -> Self::Unsub {
    observer.next(self.0);
    if !observer.is_closed() {
      observer.complete();
    }
  }
}

impl<Item> ObservableExt<Item, Infallible> for ObservableOf<Item> {}

#[cfg(test)]
mod test {
  use crate::prelude::*;

  #[test]
  fn emits_once_then_completes() {
    let mut value = 0;
    let mut completed = false;
    observable::of(100).subscribe_complete(|v| value = v, || completed = true);

    assert_eq!(value, 100);
    assert!(completed);
  }

  #[test]
  fn of_then_map() {
    let mut seen = vec![];
    observable::of("hello")
      .map(str::len)
      .subscribe(|v| seen.push(v));
    assert_eq!(seen, [5]);
  }
}
