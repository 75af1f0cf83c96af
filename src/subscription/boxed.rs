use super::Subscription;

/// Object-safe mirror of [`Subscription`].
///
/// `Subscription::unsubscribe(self)` requires `Sized`, so boxed handles go
/// through this trait instead.
pub trait BoxedSubscriptionInner {
  fn boxed_unsubscribe(self: Box<Self>);
  fn boxed_is_closed(&self) -> bool;
}

impl<T: Subscription> BoxedSubscriptionInner for T {
  #[inline]
  fn boxed_unsubscribe(self: Box<Self>) { (*self).unsubscribe() }

  #[inline]
  fn boxed_is_closed(&self) -> bool { self.is_closed() }
}

/// A type-erased subscription for single-threaded use.
///
/// Subscriptions are control handles, not views into data, so the boxed form
/// is `'static` and can be stored anywhere, e.g. in a
/// [`LocalCompositeSubscription`](super::LocalCompositeSubscription).
///
/// ```rust
/// use rxsubjects::prelude::*;
///
/// let subs: Vec<BoxedSubscription> = vec![BoxedSubscription::new(()), BoxedSubscription::new(())];
/// for sub in subs {
///   sub.unsubscribe();
/// }
/// ```
pub struct BoxedSubscription(Box<dyn BoxedSubscriptionInner>);

/// A type-erased subscription that can cross threads.
pub struct BoxedSubscriptionSend(Box<dyn BoxedSubscriptionInner + Send>);

impl BoxedSubscription {
  #[inline]
  pub fn new(subscription: impl Subscription + 'static) -> Self { Self(Box::new(subscription)) }
}

impl BoxedSubscriptionSend {
  #[inline]
  pub fn new(subscription: impl Subscription + Send + 'static) -> Self {
    Self(Box::new(subscription))
  }
}

/// Converts any subscription into one of the boxed forms.
pub trait IntoBoxedSubscription<Target> {
  fn into_boxed(self) -> Target;
}

impl<T: Subscription + 'static> IntoBoxedSubscription<BoxedSubscription> for T {
  #[inline]
  fn into_boxed(self) -> BoxedSubscription { BoxedSubscription::new(self) }
}

impl<T: Subscription + Send + 'static> IntoBoxedSubscription<BoxedSubscriptionSend> for T {
  #[inline]
  fn into_boxed(self) -> BoxedSubscriptionSend { BoxedSubscriptionSend::new(self) }
}

impl Subscription for BoxedSubscription {
  #[inline]
  fn unsubscribe(self) { self.0.boxed_unsubscribe() }

  #[inline]
  fn is_closed(&self) -> bool { self.0.boxed_is_closed() }
}

impl Subscription for BoxedSubscriptionSend {
  #[inline]
  fn unsubscribe(self) { self.0.boxed_unsubscribe() }

  #[inline]
  fn is_closed(&self) -> bool { self.0.boxed_is_closed() }
}

#[cfg(test)]
mod tests {
  use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
  };

  use super::*;

  struct MockSubscription {
    closed: Arc<AtomicBool>,
  }

  impl MockSubscription {
    fn new() -> (Self, Arc<AtomicBool>) {
      let closed = Arc::new(AtomicBool::new(false));
      (Self { closed: closed.clone() }, closed)
    }
  }

  impl Subscription for MockSubscription {
    fn unsubscribe(self) { self.closed.store(true, Ordering::SeqCst); }

    fn is_closed(&self) -> bool { self.closed.load(Ordering::SeqCst) }
  }

  #[test]
  fn local_boxed_subscription() {
    let (mock, closed) = MockSubscription::new();
    let boxed = BoxedSubscription::new(mock);

    assert!(!boxed.is_closed());
    boxed.unsubscribe();
    assert!(closed.load(Ordering::SeqCst));
  }

  #[test]
  fn unit_subscription_is_always_closed() {
    let boxed = BoxedSubscription::new(());
    assert!(boxed.is_closed());
    boxed.unsubscribe();
  }

  #[test]
  fn send_subscription_moves_across_threads() {
    let (mock, closed) = MockSubscription::new();
    let boxed: BoxedSubscriptionSend = mock.into_boxed();
    std::thread::spawn(move || boxed.unsubscribe())
      .join()
      .unwrap();
    assert!(closed.load(Ordering::SeqCst));
  }
}
