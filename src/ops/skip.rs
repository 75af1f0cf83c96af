//! Skip operator implementation
//!
//! Ignores the first `count` values emitted by the source, then emits the
//! rest. A source completing before `count` values completes without
//! emitting anything.

use crate::{
  observable::{Observable, ObservableExt},
  observer::Observer,
};

#[derive(Clone)]
pub struct SkipOp<S> {
  pub(crate) source: S,
  pub(crate) count: usize,
}

impl<Item, Err, O, S> Observable<Item, Err, O> for SkipOp<S>
where
  O: Observer<Item, Err>,
  S: Observable<Item, Err, SkipObserver<O>>,
{
  type Unsub = S::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    self
      .source
      .actual_subscribe(SkipObserver { observer, remaining: self.count })
  }
}

impl<Item, Err, S> ObservableExt<Item, Err> for SkipOp<S> where S: ObservableExt<Item, Err> {}

pub struct SkipObserver<O> {
  observer: O,
  remaining: usize,
}

impl<Item, Err, O> Observer<Item, Err> for SkipObserver<O>
where
  O: Observer<Item, Err>,
{
  fn next(&mut self, value: Item) {
    if self.remaining == 0 {
      self.observer.next(value);
    } else {
      self.remaining -= 1;
    }
  }

  #[inline]
  fn error(self, err: Err) { self.observer.error(err) }

  #[inline]
  fn complete(self) { self.observer.complete() }

  #[inline]
  fn is_closed(&self) -> bool { self.observer.is_closed() }
}

#[cfg(test)]
mod test {
  use std::{cell::RefCell, convert::Infallible};

  use crate::prelude::*;

  #[test]
  fn base_function() {
    let mut completed = false;
    let mut next_count = 0;

    observable::from_iter(0..100)
      .skip(5)
      .subscribe_complete(|_| next_count += 1, || completed = true);

    assert_eq!(next_count, 95);
    assert!(completed);
  }

  #[test]
  fn skip_more_than_emitted() {
    let mut completed = false;
    let mut next_count = 0;

    observable::from_iter(0..10)
      .skip(20)
      .subscribe_complete(|_| next_count += 1, || completed = true);

    assert_eq!(next_count, 0);
    assert!(completed);
  }

  #[test]
  fn skip_on_subject() {
    let seen = RefCell::new(vec![]);
    let mut subject = LocalSubject::<&str, Infallible>::new();
    subject
      .clone()
      .skip(2)
      .subscribe(|v| seen.borrow_mut().push(v));
    ["A", "B", "C", "D"].into_iter().for_each(|v| subject.next(v));
    assert_eq!(*seen.borrow(), ["C", "D"]);
  }

  #[test]
  fn bench() { do_bench(); }

  benchmark_group!(do_bench, bench_skip);

  fn bench_skip(b: &mut bencher::Bencher) { b.iter(base_function); }
}
