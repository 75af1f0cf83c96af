use tracing::{debug, trace};

use super::subscribers::Subscribers;
use crate::{observer::Observer, rc::SharedCell};

/// Lifecycle of a subject. `Errored` and `Completed` are terminal.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum SubjectStatus<Err> {
  #[default]
  Active,
  Errored(Err),
  Completed,
}

impl<Err> SubjectStatus<Err> {
  #[inline]
  pub fn is_active(&self) -> bool { matches!(self, SubjectStatus::Active) }

  #[inline]
  pub fn is_terminated(&self) -> bool { !self.is_active() }
}

/// What a subject remembers of its past emissions, and what it hands to a
/// newly attached observer.
pub trait ReplayPolicy<Item> {
  /// Record an incoming value. Returns the value to broadcast right away, or
  /// `None` to hold it back.
  fn record(&mut self, value: Item) -> Option<Item>;

  /// Deliver the remembered values to an observer attaching while the
  /// subject is in `status`.
  fn replay<Err, O: Observer<Item, Err>>(&self, status: &SubjectStatus<Err>, observer: &mut O);

  /// A value to broadcast right before completion.
  fn flush_on_complete(&mut self) -> Option<Item> { None }
}

/// The state behind every subject handle: observers, lifecycle and replay
/// buffer.
pub struct SubjectCore<Ob, Cell, R, Err> {
  pub(crate) subscribers: Subscribers<Ob, Cell>,
  pub(crate) status: SubjectStatus<Err>,
  pub(crate) policy: R,
}

impl<Ob, Cell, R, Err> SubjectCore<Ob, Cell, R, Err> {
  pub fn new(policy: R) -> Self {
    SubjectCore {
      subscribers: Subscribers::default(),
      status: SubjectStatus::Active,
      policy,
    }
  }

  #[inline]
  pub fn status(&self) -> &SubjectStatus<Err> { &self.status }

  #[inline]
  pub fn policy(&self) -> &R { &self.policy }
}

impl<Ob, Cell, R, Err> SubjectCore<Ob, Cell, R, Err>
where
  Cell: SharedCell<bool>,
{
  #[inline]
  pub fn subscriber_count(&self) -> usize { self.subscribers.len() }

  /// Replay to `observer`, then either register it or, when the subject is
  /// terminal, hand it the terminal event. Returns the id when registered.
  pub(crate) fn attach<Item>(&mut self, mut observer: Ob, closed: Cell) -> Option<usize>
  where
    Ob: Observer<Item, Err>,
    R: ReplayPolicy<Item>,
    Err: Clone,
  {
    self.policy.replay(&self.status, &mut observer);
    match &self.status {
      SubjectStatus::Active if !observer.is_closed() => {
        self.subscribers.purge::<Item, Err>();
        let id = self.subscribers.add(observer, closed);
        debug!(id, subscribers = self.subscribers.len(), "observer attached to subject");
        Some(id)
      }
      SubjectStatus::Active => {
        closed.set(true);
        None
      }
      SubjectStatus::Errored(err) => {
        trace!("observer attached to an errored subject");
        closed.set(true);
        observer.error(err.clone());
        None
      }
      SubjectStatus::Completed => {
        trace!("observer attached to a completed subject");
        closed.set(true);
        observer.complete();
        None
      }
    }
  }

  pub(crate) fn emit_next<Item>(&mut self, value: Item)
  where
    Ob: Observer<Item, Err>,
    R: ReplayPolicy<Item>,
    Item: Clone,
  {
    if self.status.is_terminated() {
      trace!("value dropped, subject already terminated");
      return;
    }
    if let Some(value) = self.policy.record(value) {
      self.subscribers.broadcast_value::<Item, Err>(value);
    }
  }

  pub(crate) fn emit_error<Item>(&mut self, err: Err)
  where
    Ob: Observer<Item, Err>,
    Err: Clone,
  {
    if self.status.is_terminated() {
      trace!("error dropped, subject already terminated");
      return;
    }
    self.status = SubjectStatus::Errored(err.clone());
    debug!(subscribers = self.subscribers.len(), "subject errored");
    self.subscribers.broadcast_error::<Item, Err>(err);
  }

  pub(crate) fn emit_complete<Item>(&mut self)
  where
    Ob: Observer<Item, Err>,
    R: ReplayPolicy<Item>,
    Item: Clone,
  {
    if self.status.is_terminated() {
      trace!("completion dropped, subject already terminated");
      return;
    }
    let last = self.policy.flush_on_complete();
    self.status = SubjectStatus::Completed;
    debug!(subscribers = self.subscribers.len(), "subject completed");
    if let Some(last) = last {
      self.subscribers.broadcast_value::<Item, Err>(last);
    }
    self.subscribers.broadcast_complete::<Item, Err>();
  }
}
