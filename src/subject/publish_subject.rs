use super::{
  LocalSubjectCore, ReplayPolicy, SharedSubjectCore, Subject, SubjectCore, SubjectStatus,
};
use crate::observer::Observer;

/// Replay policy of a plain (publish) subject: nothing is remembered.
#[derive(Clone, Copy, Debug, Default)]
pub struct Publish;

impl<Item> ReplayPolicy<Item> for Publish {
  #[inline]
  fn record(&mut self, value: Item) -> Option<Item> { Some(value) }

  #[inline]
  fn replay<Err, O: Observer<Item, Err>>(&self, _: &SubjectStatus<Err>, _: &mut O) {}
}

/// A single-threaded subject that only forwards future emissions.
pub type LocalSubject<'a, Item, Err> = Subject<LocalSubjectCore<'a, Item, Err, Publish>>;

/// A thread-safe subject that only forwards future emissions.
pub type SharedSubject<Item, Err> = Subject<SharedSubjectCore<Item, Err, Publish>>;

impl<'a, Item, Err> LocalSubject<'a, Item, Err> {
  pub fn new() -> Self { Subject::from_core(SubjectCore::new(Publish).into()) }
}

impl<Item, Err> SharedSubject<Item, Err> {
  pub fn new() -> Self { Subject::from_core(SubjectCore::new(Publish).into()) }
}

impl<'a, Item, Err> Default for LocalSubject<'a, Item, Err> {
  fn default() -> Self { Self::new() }
}

impl<Item, Err> Default for SharedSubject<Item, Err> {
  fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod test {
  use std::{
    cell::RefCell,
    convert::Infallible,
    sync::{Arc, Mutex},
  };

  use crate::prelude::*;

  #[test]
  fn late_subscriber_misses_earlier_values() {
    let first = RefCell::new(vec![]);
    let second = RefCell::new(vec![]);
    let mut subject = LocalSubject::<i32, Infallible>::new();

    subject.next(1);
    subject.clone().subscribe(|v| first.borrow_mut().push(v));
    subject.next(2);
    subject.clone().subscribe(|v| second.borrow_mut().push(v));
    subject.next(3);

    assert_eq!(*first.borrow(), [2, 3]);
    assert_eq!(*second.borrow(), [3]);
  }

  #[test]
  fn completion_reaches_late_subscribers() {
    let log = RefCell::new(vec![]);
    let mut subject = LocalSubject::<i32, Infallible>::new();
    subject.clone().complete();
    subject.next(5);
    subject.clone().subscribe_complete(
      |v| log.borrow_mut().push(format!("3) {v}")),
      || log.borrow_mut().push("3) Complete".to_owned()),
    );
    assert_eq!(*log.borrow(), ["3) Complete"]);
  }

  #[test]
  fn terminal_events_are_delivered_once() {
    let errors = RefCell::new(0);
    let completions = RefCell::new(0);
    let subject = LocalSubject::<i32, &str>::new();
    subject.clone().subscribe_all(
      |_| {},
      |_| *errors.borrow_mut() += 1,
      || *completions.borrow_mut() += 1,
    );
    subject.clone().error("first");
    subject.clone().error("second");
    subject.clone().complete();
    assert_eq!(*errors.borrow(), 1);
    assert_eq!(*completions.borrow(), 0);
    assert_eq!(subject.status(), SubjectStatus::Errored("first"));
  }

  #[test]
  fn shared_subject_across_threads() {
    let sum = Arc::new(Mutex::new(0));
    let subject = SharedSubject::<i32, Infallible>::new();
    let c_sum = sum.clone();
    subject
      .clone()
      .subscribe(move |v| *c_sum.lock().unwrap() += v);

    let handles: Vec<_> = (0..4)
      .map(|i| {
        let mut subject = subject.clone();
        std::thread::spawn(move || subject.next(i))
      })
      .collect();
    for h in handles {
      h.join().unwrap();
    }
    assert_eq!(*sum.lock().unwrap(), 6);
  }
}
