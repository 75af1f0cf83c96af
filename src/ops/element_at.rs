use crate::{
  observable::{Observable, ObservableExt},
  observer::Observer,
};

/// Emits only the value at `index` (zero based), then completes. A source
/// ending earlier completes without a value.
#[derive(Clone)]
pub struct ElementAtOp<S> {
  pub(crate) source: S,
  pub(crate) index: usize,
}

impl<Item, Err, O, S> Observable<Item, Err, O> for ElementAtOp<S>
where
  O: Observer<Item, Err>,
  S: Observable<Item, Err, ElementAtObserver<O>>,
{
  type Unsub = S::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    self
      .source
      .actual_subscribe(ElementAtObserver { observer: Some(observer), remaining: self.index })
  }
}

impl<Item, Err, S> ObservableExt<Item, Err> for ElementAtOp<S> where
  S: ObservableExt<Item, Err>
{
}

pub struct ElementAtObserver<O> {
  observer: Option<O>,
  remaining: usize,
}

impl<Item, Err, O> Observer<Item, Err> for ElementAtObserver<O>
where
  O: Observer<Item, Err>,
{
  fn next(&mut self, value: Item) {
    if self.remaining > 0 {
      self.remaining -= 1;
    } else if let Some(mut observer) = self.observer.take() {
      observer.next(value);
      observer.complete();
    }
  }

  fn error(self, err: Err) {
    if let Some(observer) = self.observer {
      observer.error(err);
    }
  }

  fn complete(self) {
    if let Some(observer) = self.observer {
      observer.complete();
    }
  }

  #[inline]
  fn is_closed(&self) -> bool { self.observer.as_ref().map_or(true, |o| o.is_closed()) }
}

#[cfg(test)]
mod test {
  use std::{cell::RefCell, convert::Infallible};

  use crate::prelude::*;

  #[test]
  fn picks_the_indexed_value() {
    let mut items = vec![];
    let mut completed = false;
    observable::from_iter(10..20)
      .element_at(3)
      .subscribe_complete(|v| items.push(v), || completed = true);
    assert_eq!(items, [13]);
    assert!(completed);
  }

  #[test]
  fn out_of_range_completes_empty() {
    let mut items = vec![];
    let mut completed = false;
    observable::from_iter(0..3)
      .element_at(5)
      .subscribe_complete(|v| items.push(v), || completed = true);
    assert!(items.is_empty());
    assert!(completed);
  }

  #[test]
  fn stops_listening_to_subject_after_hit() {
    let log = RefCell::new(vec![]);
    let mut subject = LocalSubject::<&str, Infallible>::new();
    subject.clone().element_at(1).subscribe_complete(
      |v| log.borrow_mut().push(v.to_owned()),
      || log.borrow_mut().push("done".to_owned()),
    );
    subject.next("X");
    assert_eq!(subject.subscriber_count(), 1);
    subject.next("Y");
    subject.next("Z");
    assert_eq!(*log.borrow(), ["Y", "done"]);
    assert_eq!(subject.subscriber_count(), 0);
  }
}
