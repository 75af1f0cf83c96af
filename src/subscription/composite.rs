use tracing::trace;

use super::{BoxedSubscription, BoxedSubscriptionSend, DynamicSubscriptions, Subscription};
use crate::rc::{MutArc, MutRc, RcDeref, RcDerefMut};

struct Inner<U> {
  closed: bool,
  teardown: DynamicSubscriptions<U>,
}

impl<U> Default for Inner<U> {
  fn default() -> Self { Inner { closed: false, teardown: DynamicSubscriptions::default() } }
}

impl<U: Subscription> Inner<U> {
  // Returns the subscription back when it must be cancelled by the caller.
  fn add(&mut self, subscription: U) -> Option<U> {
    if self.closed {
      Some(subscription)
    } else {
      self.teardown.retain(|s| !s.is_closed());
      self.teardown.add(subscription);
      None
    }
  }

  fn take_all(&mut self) -> Vec<U> { self.teardown.drain().collect() }
}

macro_rules! composite_subscription {
  ($(#[$doc:meta])* $name:ident, $rc:ident, $boxed:ident $(, $bound:ident)?) => {
    $(#[$doc])*
    #[derive(Clone, Default)]
    pub struct $name($rc<Inner<$boxed>>);

    impl $name {
      /// Take ownership of `subscription`. If the bag is already disposed the
      /// subscription is cancelled right away.
      pub fn add(&self, subscription: impl Subscription $(+ $bound)? + 'static) {
        let rejected = self.0.rc_deref_mut().add($boxed::new(subscription));
        if let Some(rejected) = rejected {
          trace!("subscription added to a disposed composite, cancelling it");
          rejected.unsubscribe();
        }
      }

      /// Cancel every held subscription and refuse future ones.
      pub fn dispose_all(&self) {
        let teardown = {
          let mut inner = self.0.rc_deref_mut();
          if inner.closed {
            return;
          }
          inner.closed = true;
          inner.take_all()
        };
        trace!(count = teardown.len(), "disposing composite subscription");
        teardown.into_iter().for_each(Subscription::unsubscribe);
      }

      /// Cancel every held subscription but keep accepting new ones.
      pub fn clear(&self) {
        let teardown = self.0.rc_deref_mut().take_all();
        teardown.into_iter().for_each(Subscription::unsubscribe);
      }

      /// Number of subscriptions currently held.
      pub fn len(&self) -> usize { self.0.rc_deref().teardown.len() }

      pub fn is_empty(&self) -> bool { self.len() == 0 }
    }

    impl Subscription for $name {
      #[inline]
      fn unsubscribe(self) { self.dispose_all() }

      #[inline]
      fn is_closed(&self) -> bool { self.0.rc_deref().closed }
    }
  };
}

composite_subscription!(
  /// A disposable bag: an owning collection of subscriptions cancelled
  /// together with [`dispose_all`](Self::dispose_all).
  ///
  /// ```rust
  /// use rxsubjects::prelude::*;
  ///
  /// let bag = LocalCompositeSubscription::default();
  /// let subject = LocalSubject::<i32, std::convert::Infallible>::new();
  /// bag.add(subject.clone().subscribe(|_| {}));
  /// assert_eq!(subject.subscriber_count(), 1);
  ///
  /// bag.dispose_all();
  /// assert_eq!(subject.subscriber_count(), 0);
  /// assert!(bag.is_closed());
  /// ```
  LocalCompositeSubscription,
  MutRc,
  BoxedSubscription
);

composite_subscription!(
  /// Thread-safe variant of [`LocalCompositeSubscription`].
  SharedCompositeSubscription,
  MutArc,
  BoxedSubscriptionSend,
  Send
);
