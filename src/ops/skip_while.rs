use crate::{
  observable::{Observable, ObservableExt},
  observer::Observer,
};

/// Skips source values while a predicate holds. The first value failing the
/// predicate and every value after it are emitted.
#[derive(Clone)]
pub struct SkipWhileOp<S, F> {
  pub(crate) source: S,
  pub(crate) predicate: F,
}

impl<Item, Err, O, S, F> Observable<Item, Err, O> for SkipWhileOp<S, F>
where
  O: Observer<Item, Err>,
  S: Observable<Item, Err, SkipWhileObserver<O, F>>,
  F: FnMut(&Item) -> bool,
{
  type Unsub = S::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    self.source.actual_subscribe(SkipWhileObserver {
      observer,
      predicate: self.predicate,
      done_skipping: false,
    })
  }
}

impl<Item, Err, S, F> ObservableExt<Item, Err> for SkipWhileOp<S, F> where
  S: ObservableExt<Item, Err>
{
}

pub struct SkipWhileObserver<O, F> {
  observer: O,
  predicate: F,
  done_skipping: bool,
}

impl<Item, Err, O, F> Observer<Item, Err> for SkipWhileObserver<O, F>
where
  O: Observer<Item, Err>,
  F: FnMut(&Item) -> bool,
{
  fn next(&mut self, value: Item) {
    if self.done_skipping {
      self.observer.next(value);
    } else if !(self.predicate)(&value) {
      self.done_skipping = true;
      self.observer.next(value);
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
  use crate::prelude::*;

  #[test]
  fn base_function() {
    let mut completed = false;
    let mut items = vec![];

    observable::from_iter(0..100)
      .skip_while(|v| v < &95)
      .subscribe_complete(|v| items.push(v), || completed = true);

    assert_eq!(items, [95, 96, 97, 98, 99]);
    assert!(completed);
  }

  #[test]
  fn predicate_is_not_consulted_once_done() {
    let mut items = vec![];
    observable::from_iter([1, 1, 2, 3, 4, 1])
      .skip_while(|v| v % 2 == 1)
      .subscribe(|v| items.push(v));
    assert_eq!(items, [2, 3, 4, 1]);
  }

  #[test]
  fn skip_while_support_fork() {
    let mut items1 = vec![];
    let mut items2 = vec![];

    {
      let skip_while = observable::from_iter(0..10).skip_while(|v| v < &5);
      skip_while.clone().subscribe(|v| items1.push(v));
      skip_while.subscribe(|v| items2.push(v));
    }
    assert_eq!(items1, items2);
    assert_eq!(items1, [5, 6, 7, 8, 9]);
  }

  #[test]
  fn bench() { do_bench(); }

  benchmark_group!(do_bench, bench_skip_while);

  fn bench_skip_while(b: &mut bencher::Bencher) { b.iter(base_function); }
}
