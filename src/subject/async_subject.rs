use super::{
  LocalSubjectCore, ReplayPolicy, SharedSubjectCore, Subject, SubjectCore, SubjectStatus,
};
use crate::{observer::Observer, rc::RcDeref};

/// Replay policy of an async subject: remember the last value and release
/// it only on completion.
#[derive(Clone, Debug)]
pub struct Last<Item> {
  value: Option<Item>,
}

impl<Item> Default for Last<Item> {
  fn default() -> Self { Last { value: None } }
}

impl<Item: Clone> ReplayPolicy<Item> for Last<Item> {
  fn record(&mut self, value: Item) -> Option<Item> {
    self.value = Some(value);
    None
  }

  fn replay<Err, O: Observer<Item, Err>>(&self, status: &SubjectStatus<Err>, observer: &mut O) {
    if let (SubjectStatus::Completed, Some(value)) = (status, &self.value) {
      observer.next(value.clone());
    }
  }

  fn flush_on_complete(&mut self) -> Option<Item> { self.value.clone() }
}

/// A single-threaded subject that emits nothing until it completes, then
/// delivers only the last value followed by completion, also to late
/// subscribers. An error discards the value.
///
/// ```rust
/// use std::{cell::RefCell, convert::Infallible};
///
/// use rxsubjects::prelude::*;
///
/// let seen = RefCell::new(vec![]);
/// let mut subject = LocalAsyncSubject::<i32, Infallible>::new();
/// subject.clone().subscribe(|v| seen.borrow_mut().push(v));
/// subject.next(0);
/// subject.next(1);
/// assert!(seen.borrow().is_empty());
/// subject.clone().complete();
/// assert_eq!(*seen.borrow(), [1]);
/// ```
pub type LocalAsyncSubject<'a, Item, Err> = Subject<LocalSubjectCore<'a, Item, Err, Last<Item>>>;

/// Thread-safe variant of [`LocalAsyncSubject`].
pub type SharedAsyncSubject<Item, Err> = Subject<SharedSubjectCore<Item, Err, Last<Item>>>;

impl<'a, Item, Err> LocalAsyncSubject<'a, Item, Err> {
  pub fn new() -> Self { Subject::from_core(SubjectCore::new(Last::default()).into()) }

  /// The final value, available once the subject completed.
  pub fn value(&self) -> Option<Item>
  where
    Item: Clone,
  {
    let core = self.core.rc_deref();
    match core.status() {
      SubjectStatus::Completed => core.policy().value.clone(),
      _ => None,
    }
  }
}

impl<Item, Err> SharedAsyncSubject<Item, Err> {
  pub fn new() -> Self { Subject::from_core(SubjectCore::new(Last::default()).into()) }

  /// The final value, available once the subject completed.
  pub fn value(&self) -> Option<Item>
  where
    Item: Clone,
  {
    let core = self.core.rc_deref();
    match core.status() {
      SubjectStatus::Completed => core.policy().value.clone(),
      _ => None,
    }
  }
}

impl<'a, Item, Err> Default for LocalAsyncSubject<'a, Item, Err> {
  fn default() -> Self { Self::new() }
}

impl<Item, Err> Default for SharedAsyncSubject<Item, Err> {
  fn default() -> Self { Self::new() }
}
