use std::{
  convert::Infallible,
  iter::{Repeat, Take},
  ops::Range,
};

use crate::{
  observable::{Observable, ObservableExt},
  observer::Observer,
};

/// Creates an observable that produces values from an iterator.
///
/// Completes when all elements have been emitted. Never emits an error.
/// Stops pulling from the iterator as soon as the observer is closed.
///
/// ```
/// use rxsubjects::prelude::*;
///
/// let mut seen = vec![];
/// observable::from_iter(vec![0, 1, 2, 3]).subscribe(|v| seen.push(v));
/// assert_eq!(seen, [0, 1, 2, 3]);
/// ```
pub fn from_iter<Iter>(iter: Iter) -> ObservableIter<Iter>
where
  Iter: IntoIterator,
{
  ObservableIter(iter)
}

#[derive(Clone)]
pub struct ObservableIter<Iter>(Iter);

impl<O, Iter> Observable<Iter::Item, Infallible, O> for ObservableIter<Iter>
where
  Iter: IntoIterator,
  O: Observer<Iter::Item, Infallible>,
{
  type Unsub = ();

  fn actual_subscribe(self, mut observer: O) -> Self::Unsub {
    if observer.is_closed() {
      return;
    }
    for v in self.0 {
      observer.next(v);
      if observer.is_closed() {
        return;
      }
    }
    observer.complete();
  }
}

impl<Iter> ObservableExt<Iter::Item, Infallible> for ObservableIter<Iter> where
  Iter: IntoIterator
{
}

/// Creates an observable producing the same value `n` times.
///
/// ```
/// use rxsubjects::prelude::*;
///
/// let mut seen = vec![];
/// observable::repeat(123, 3).subscribe(|v| seen.push(v));
/// assert_eq!(seen, [123, 123, 123]);
/// ```
pub fn repeat<Item>(v: Item, n: usize) -> ObservableIter<Take<Repeat<Item>>>
where
  Item: Clone,
{
  from_iter(std::iter::repeat(v).take(n))
}

/// Creates an observable emitting `count` consecutive integers starting at
/// `start`. A non-positive `count` completes immediately.
///
/// ```
/// use rxsubjects::prelude::*;
///
/// let mut seen = vec![];
/// observable::range(1, 3).subscribe(|v| seen.push(v));
/// assert_eq!(seen, [1, 2, 3]);
/// ```
pub fn range(start: i32, count: i32) -> ObservableIter<Range<i32>> {
  from_iter(start..start.saturating_add(count.max(0)))
}
