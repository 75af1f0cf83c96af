use crate::{observer::Observer, rc::SharedCell, subscription::DynamicSubscriptions};

struct Entry<Ob, Cell> {
  closed: Cell,
  observer: Ob,
}

/// The observers attached to a subject, in subscription order.
///
/// Every entry carries the `closed` flag shared with its
/// [`SubjectSubscription`](super::SubjectSubscription). A handle that cannot
/// reach the list (because a broadcast is running) only raises the flag; the
/// broadcast skips flagged entries and purges them when it is done.
///
/// When broadcasting, the value is cloned for all observers except the last
/// one, which receives the moved value.
pub struct Subscribers<Ob, Cell> {
  inner: DynamicSubscriptions<Entry<Ob, Cell>>,
}

impl<Ob, Cell> Default for Subscribers<Ob, Cell> {
  fn default() -> Self { Self { inner: DynamicSubscriptions::default() } }
}

impl<Ob, Cell: SharedCell<bool>> Subscribers<Ob, Cell> {
  #[inline]
  pub fn add(&mut self, observer: Ob, closed: Cell) -> usize {
    self.inner.add(Entry { closed, observer })
  }

  #[inline]
  pub fn remove(&mut self, id: usize) -> Option<Ob> { self.inner.remove(id).map(|e| e.observer) }

  /// Number of observers still expecting events.
  pub fn len(&self) -> usize {
    self
      .inner
      .iter()
      .filter(|e| !e.closed.get())
      .count()
  }

  #[inline]
  pub fn is_empty(&self) -> bool { self.len() == 0 }

  pub(crate) fn broadcast_value<Item, Err>(&mut self, value: Item)
  where
    Ob: Observer<Item, Err>,
    Item: Clone,
  {
    {
      let mut iter = self.inner.iter_mut().peekable();
      while let Some(entry) = iter.next() {
        if entry.closed.get() {
          continue;
        }
        if iter.peek().is_some() {
          entry.observer.next(value.clone());
        } else {
          entry.observer.next(value);
          break;
        }
      }
    }
    self.purge::<Item, Err>();
  }

  /// Send `err` to every observer and clear the list.
  pub(crate) fn broadcast_error<Item, Err>(&mut self, err: Err)
  where
    Ob: Observer<Item, Err>,
    Err: Clone,
  {
    let mut iter = self.take_open().into_iter().peekable();
    while let Some(observer) = iter.next() {
      if iter.peek().is_some() {
        observer.error(err.clone());
      } else {
        observer.error(err);
        break;
      }
    }
  }

  /// Complete every observer and clear the list.
  pub(crate) fn broadcast_complete<Item, Err>(&mut self)
  where
    Ob: Observer<Item, Err>,
  {
    for observer in self.take_open() {
      observer.complete();
    }
  }

  // Drops cancelled entries and observers that finished on their own, e.g.
  // behind `take`.
  pub(crate) fn purge<Item, Err>(&mut self)
  where
    Ob: Observer<Item, Err>,
  {
    self.inner.retain(|e| {
      if e.observer.is_closed() {
        e.closed.set(true);
      }
      !e.closed.get()
    });
  }

  fn take_open(&mut self) -> Vec<Ob> {
    self
      .inner
      .drain()
      .filter(|e| !e.closed.get())
      .map(|e| {
        e.closed.set(true);
        e.observer
      })
      .collect()
  }
}

#[cfg(test)]
mod test {
  use std::convert::Infallible;

  use super::*;
  use crate::{
    observer::{BoxedObserver, FnMutObserver, IntoBoxedObserver},
    rc::CellRc,
  };

  fn recorder<'a>(
    log: &'a std::cell::RefCell<Vec<String>>,
    tag: &'a str,
  ) -> BoxedObserver<'a, i32, Infallible> {
    FnMutObserver(move |v: i32| log.borrow_mut().push(format!("{tag}{v}"))).into_boxed()
  }

  #[test]
  fn broadcast_in_subscription_order() {
    let log = std::cell::RefCell::new(vec![]);
    let mut subscribers = Subscribers::default();
    subscribers.add(recorder(&log, "a"), CellRc::from(false));
    subscribers.add(recorder(&log, "b"), CellRc::from(false));
    subscribers.broadcast_value::<_, Infallible>(1);
    assert_eq!(*log.borrow(), ["a1", "b1"]);
  }

  #[test]
  fn flagged_entries_are_skipped_then_purged() {
    let log = std::cell::RefCell::new(vec![]);
    let mut subscribers = Subscribers::default();
    let flag = CellRc::from(false);
    subscribers.add(recorder(&log, "a"), flag.clone());
    subscribers.add(recorder(&log, "b"), CellRc::from(false));
    flag.set(true);
    assert_eq!(subscribers.len(), 1);

    subscribers.broadcast_value::<_, Infallible>(7);
    assert_eq!(*log.borrow(), ["b7"]);
    assert_eq!(subscribers.inner.len(), 1);
  }

  struct Finite<'a> {
    log: &'a std::cell::RefCell<Vec<String>>,
    left: usize,
  }

  impl<'a> Observer<i32, Infallible> for Finite<'a> {
    fn next(&mut self, value: i32) {
      self.left -= 1;
      self.log.borrow_mut().push(format!("f{value}"));
    }

    fn error(self, _: Infallible) {}

    fn complete(self) {}

    fn is_closed(&self) -> bool { self.left == 0 }
  }

  #[test]
  fn finished_observers_are_purged_after_broadcast() {
    let log = std::cell::RefCell::new(vec![]);
    let mut subscribers = Subscribers::default();
    let flag = CellRc::from(false);
    let finite: BoxedObserver<'_, i32, Infallible> = Finite { log: &log, left: 1 }.into_boxed();
    subscribers.add(finite, flag.clone());
    subscribers.add(recorder(&log, "a"), CellRc::from(false));

    subscribers.broadcast_value::<_, Infallible>(1);
    assert!(flag.get());
    assert_eq!(subscribers.len(), 1);

    subscribers.broadcast_value::<_, Infallible>(2);
    assert_eq!(*log.borrow(), ["f1", "a1", "a2"]);
  }

  #[test]
  fn complete_drains_and_closes_handles() {
    let log = std::cell::RefCell::new(vec![]);
    let mut subscribers = Subscribers::default();
    let flag = CellRc::from(false);
    subscribers.add(recorder(&log, "a"), flag.clone());
    subscribers.broadcast_complete::<i32, Infallible>();
    assert!(flag.get());
    assert!(subscribers.is_empty());
  }
}
