use super::{
  LocalSubjectCore, ReplayPolicy, SharedSubjectCore, Subject, SubjectCore, SubjectStatus,
};
use crate::{observer::Observer, rc::RcDeref};

/// Replay policy of a behavior subject: exactly one slot holding the latest
/// value, seeded at construction.
#[derive(Clone, Debug)]
pub struct Behavior<Item> {
  value: Item,
}

impl<Item: Clone> ReplayPolicy<Item> for Behavior<Item> {
  fn record(&mut self, value: Item) -> Option<Item> {
    self.value = value.clone();
    Some(value)
  }

  // A terminated behavior subject only hands out its terminal event.
  fn replay<Err, O: Observer<Item, Err>>(&self, status: &SubjectStatus<Err>, observer: &mut O) {
    if status.is_active() {
      observer.next(self.value.clone());
    }
  }
}

/// A single-threaded subject that replays its latest value to every new
/// subscriber.
///
/// ```rust
/// use std::{cell::RefCell, convert::Infallible};
///
/// use rxsubjects::prelude::*;
///
/// let seen = RefCell::new(vec![]);
/// let mut subject = LocalBehaviorSubject::<i32, Infallible>::new(0);
/// assert_eq!(subject.value(), 0);
/// subject.clone().subscribe(|v| seen.borrow_mut().push(v));
/// subject.next(1);
/// assert_eq!(subject.value(), 1);
/// assert_eq!(*seen.borrow(), [0, 1]);
/// ```
pub type LocalBehaviorSubject<'a, Item, Err> =
  Subject<LocalSubjectCore<'a, Item, Err, Behavior<Item>>>;

/// A thread-safe subject that replays its latest value to every new
/// subscriber.
pub type SharedBehaviorSubject<Item, Err> = Subject<SharedSubjectCore<Item, Err, Behavior<Item>>>;

impl<'a, Item, Err> LocalBehaviorSubject<'a, Item, Err> {
  pub fn new(seed: Item) -> Self {
    Subject::from_core(SubjectCore::new(Behavior { value: seed }).into())
  }

  /// The latest value. Still readable after the subject terminated.
  pub fn value(&self) -> Item
  where
    Item: Clone,
  {
    self.core.rc_deref().policy().value.clone()
  }
}

impl<Item, Err> SharedBehaviorSubject<Item, Err> {
  pub fn new(seed: Item) -> Self {
    Subject::from_core(SubjectCore::new(Behavior { value: seed }).into())
  }

  /// The latest value. Still readable after the subject terminated.
  pub fn value(&self) -> Item
  where
    Item: Clone,
  {
    self.core.rc_deref().policy().value.clone()
  }
}

#[cfg(test)]
mod test {
  use std::{cell::RefCell, convert::Infallible};

  use crate::prelude::*;

  #[test]
  fn new_subscriber_receives_latest_first() {
    let seen = RefCell::new(vec![]);
    let mut subject = LocalBehaviorSubject::<i32, Infallible>::new(0);
    subject.next(1);
    {
      let _guard = subject
        .clone()
        .subscribe(|v| seen.borrow_mut().push(v))
        .unsubscribe_when_dropped();
      subject.next(2);
    }
    subject.next(3);
    assert_eq!(*seen.borrow(), [1, 2]);
    assert_eq!(subject.value(), 3);
  }

  #[test]
  fn error_is_the_only_thing_late_subscribers_see() {
    let log = RefCell::new(vec![]);
    let mut subject = LocalBehaviorSubject::<&str, &str>::new("Initial value");
    subject.next("X");
    subject.clone().subscribe_err(
      |v| log.borrow_mut().push(format!("1) {v}")),
      |e| log.borrow_mut().push(format!("1) {e}")),
    );
    subject.next("Y");
    subject.clone().error("Error!");
    subject.clone().subscribe_err(
      |v| log.borrow_mut().push(format!("2) {v}")),
      |e| log.borrow_mut().push(format!("2) {e}")),
    );
    assert_eq!(*log.borrow(), ["1) X", "1) Y", "1) Error!", "2) Error!"]);
    assert_eq!(subject.value(), "Y");
  }

  #[test]
  fn completed_subject_replays_only_completion() {
    let log = RefCell::new(vec![]);
    let subject = LocalBehaviorSubject::<i32, Infallible>::new(7);
    subject.clone().complete();
    subject.clone().subscribe_complete(
      |v| log.borrow_mut().push(v.to_string()),
      || log.borrow_mut().push("done".to_owned()),
    );
    assert_eq!(*log.borrow(), ["done"]);
  }

  #[test]
  fn shared_behavior_value_from_thread() {
    let subject = SharedBehaviorSubject::<String, Infallible>::new("seed".to_owned());
    let mut c_subject = subject.clone();
    std::thread::spawn(move || c_subject.next("from thread".to_owned()))
      .join()
      .unwrap();
    assert_eq!(subject.value(), "from thread");
  }
}
