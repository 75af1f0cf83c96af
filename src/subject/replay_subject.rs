use std::collections::VecDeque;

use super::{
  LocalSubjectCore, ReplayPolicy, SharedSubjectCore, Subject, SubjectCore, SubjectStatus,
};
use crate::{observer::Observer, rc::RcDeref};

/// Replay policy of a replay subject: a FIFO buffer of the most recent
/// values, bounded or not.
#[derive(Clone, Debug)]
pub struct Replay<Item> {
  buffer: VecDeque<Item>,
  size: Option<usize>,
}

impl<Item> Replay<Item> {
  fn new(size: Option<usize>) -> Self { Replay { buffer: VecDeque::new(), size } }

  /// The buffer capacity, `None` when unbounded.
  #[inline]
  pub fn size(&self) -> Option<usize> { self.size }
}

impl<Item: Clone> ReplayPolicy<Item> for Replay<Item> {
  fn record(&mut self, value: Item) -> Option<Item> {
    match self.size {
      Some(0) => {}
      Some(size) => {
        if self.buffer.len() == size {
          self.buffer.pop_front();
        }
        self.buffer.push_back(value.clone());
      }
      None => self.buffer.push_back(value.clone()),
    }
    Some(value)
  }

  // Buffered values are replayed even after termination, followed by the
  // terminal event.
  fn replay<Err, O: Observer<Item, Err>>(&self, _: &SubjectStatus<Err>, observer: &mut O) {
    for value in &self.buffer {
      if observer.is_closed() {
        break;
      }
      observer.next(value.clone());
    }
  }
}

/// A single-threaded subject replaying its most recent values to every new
/// subscriber.
///
/// ```rust
/// use std::{cell::RefCell, convert::Infallible};
///
/// use rxsubjects::prelude::*;
///
/// let seen = RefCell::new(vec![]);
/// let mut subject = LocalReplaySubject::<i32, Infallible>::with_size(2);
/// subject.next(1);
/// subject.next(2);
/// subject.next(3);
/// subject.clone().subscribe(|v| seen.borrow_mut().push(v));
/// assert_eq!(*seen.borrow(), [2, 3]);
/// ```
pub type LocalReplaySubject<'a, Item, Err> = Subject<LocalSubjectCore<'a, Item, Err, Replay<Item>>>;

/// A thread-safe subject replaying its most recent values to every new
/// subscriber.
pub type SharedReplaySubject<Item, Err> = Subject<SharedSubjectCore<Item, Err, Replay<Item>>>;

impl<'a, Item, Err> LocalReplaySubject<'a, Item, Err> {
  /// Keep the last `size` values. A size of zero keeps nothing.
  pub fn with_size(size: usize) -> Self {
    Subject::from_core(SubjectCore::new(Replay::new(Some(size))).into())
  }

  /// Keep every value.
  pub fn unbounded() -> Self { Subject::from_core(SubjectCore::new(Replay::new(None)).into()) }
}

impl<Item, Err> SharedReplaySubject<Item, Err> {
  /// Keep the last `size` values. A size of zero keeps nothing.
  pub fn with_size(size: usize) -> Self {
    Subject::from_core(SubjectCore::new(Replay::new(Some(size))).into())
  }

  /// Keep every value.
  pub fn unbounded() -> Self { Subject::from_core(SubjectCore::new(Replay::new(None)).into()) }
}

impl<P, Ob, Cell, Item, Err> Subject<P>
where
  P: RcDeref<Target = SubjectCore<Ob, Cell, Replay<Item>, Err>>,
{
  /// Snapshot of the replay buffer, oldest first.
  pub fn values(&self) -> Vec<Item>
  where
    Item: Clone,
  {
    self
      .core
      .rc_deref()
      .policy()
      .buffer
      .iter()
      .cloned()
      .collect()
  }
}

#[cfg(test)]
mod test {
  use std::{cell::RefCell, convert::Infallible};

  use crate::prelude::*;

  #[test]
  fn bounded_buffer_evicts_oldest() {
    let first = RefCell::new(vec![]);
    let second = RefCell::new(vec![]);
    let mut subject = LocalReplaySubject::<i32, &str>::with_size(2);
    subject.next(1);
    subject.next(2);
    subject.next(3);
    subject.clone().subscribe_err(
      |v| first.borrow_mut().push(v.to_string()),
      |e| first.borrow_mut().push(e.to_string()),
    );
    subject.next(4);
    subject.clone().subscribe_err(
      |v| second.borrow_mut().push(v.to_string()),
      |e| second.borrow_mut().push(e.to_string()),
    );
    subject.clone().error("Error!");

    assert_eq!(*first.borrow(), ["2", "3", "4", "Error!"]);
    assert_eq!(*second.borrow(), ["3", "4", "Error!"]);
    assert_eq!(subject.values(), [3, 4]);
  }

  #[test]
  fn late_subscriber_after_error_gets_buffer_then_error() {
    let log = RefCell::new(vec![]);
    let mut subject = LocalReplaySubject::<i32, &str>::with_size(2);
    subject.next(1);
    subject.next(2);
    subject.clone().error("boom");
    subject.next(3);
    subject.clone().subscribe_err(
      |v| log.borrow_mut().push(v.to_string()),
      |e| log.borrow_mut().push(e.to_string()),
    );
    assert_eq!(*log.borrow(), ["1", "2", "boom"]);
  }

  #[test]
  fn zero_size_keeps_nothing() {
    let seen = RefCell::new(vec![]);
    let mut subject = LocalReplaySubject::<i32, Infallible>::with_size(0);
    subject.next(1);
    subject.clone().subscribe(|v| seen.borrow_mut().push(v));
    subject.next(2);
    assert_eq!(*seen.borrow(), [2]);
    assert!(subject.values().is_empty());
  }

  #[test]
  fn unbounded_keeps_everything() {
    let mut subject = SharedReplaySubject::<i32, Infallible>::unbounded();
    (0..100).for_each(|i| subject.next(i));
    assert_eq!(subject.values().len(), 100);
  }

  #[test]
  fn replay_stops_when_observer_closes() {
    let seen = RefCell::new(vec![]);
    let mut subject = LocalReplaySubject::<i32, Infallible>::unbounded();
    (1..=5).for_each(|i| subject.next(i));
    subject
      .clone()
      .take(2)
      .subscribe(|v| seen.borrow_mut().push(v));
    assert_eq!(*seen.borrow(), [1, 2]);
    assert_eq!(subject.subscriber_count(), 0);
  }
}
