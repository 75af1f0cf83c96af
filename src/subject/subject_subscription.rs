use tracing::trace;

use super::subject_core::SubjectCore;
use crate::{
  rc::{RcDerefMut, SharedCell},
  subscription::Subscription,
};

/// Handle for one observer registration on a subject.
///
/// The handle shares a `closed` flag with the subscriber entry. Unsubscribing
/// raises the flag and removes the entry when the subject is reachable; from
/// inside one of the subject's own callbacks the subject is busy, so the
/// broadcast in progress skips the entry and drops it afterwards. Either way
/// no further event reaches the observer.
///
/// Cloning the handle is cheap; every clone cancels the same registration and
/// unsubscribing more than once is a no-op.
pub struct SubjectSubscription<P, Cell> {
  core: P,
  id: Option<usize>,
  closed: Cell,
}

impl<P, Cell> SubjectSubscription<P, Cell> {
  pub(crate) fn new(core: P, id: Option<usize>, closed: Cell) -> Self {
    SubjectSubscription { core, id, closed }
  }
}

impl<P: Clone, Cell: Clone> Clone for SubjectSubscription<P, Cell> {
  fn clone(&self) -> Self {
    SubjectSubscription {
      core: self.core.clone(),
      id: self.id,
      closed: self.closed.clone(),
    }
  }
}

impl<P, Ob, Cell, R, Err> Subscription for SubjectSubscription<P, Cell>
where
  P: RcDerefMut<Target = SubjectCore<Ob, Cell, R, Err>>,
  Cell: SharedCell<bool>,
{
  fn unsubscribe(self) {
    if self.closed.get() {
      return;
    }
    self.closed.set(true);
    let Some(id) = self.id else { return };
    // The observer is dropped outside the borrow, its destructor may touch
    // the subject again.
    let removed = self
      .core
      .try_rc_deref_mut()
      .and_then(|mut core| core.subscribers.remove(id));
    match removed {
      Some(_observer) => trace!(id, "observer detached from subject"),
      None => trace!(id, "subject busy, observer flagged for removal"),
    }
  }

  #[inline]
  fn is_closed(&self) -> bool { self.closed.get() }
}
