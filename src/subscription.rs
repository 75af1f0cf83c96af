//! Subscription handles returned by `subscribe`.
//!
//! Every `subscribe` call returns something implementing [`Subscription`];
//! calling `unsubscribe` detaches the observer. The submodules provide type
//! erasure, combination and the composite bag.
mod boxed;
mod composite;
mod dynamic;
mod tuple;

pub use boxed::*;
pub use composite::*;
pub use dynamic::*;
pub use tuple::*;

use crate::rc::{MutArc, MutRc, RcDeref, RcDerefMut};

/// A handle allowing an observer to stop receiving events before the source
/// has finished.
pub trait Subscription {
  /// Detach the observer. Calling it on an already closed subscription does
  /// nothing.
  fn unsubscribe(self);

  fn is_closed(&self) -> bool;

  /// Activates "RAII" behavior for this subscription. That means
  /// `unsubscribe()` will be called automatically as soon as the returned
  /// value goes out of scope.
  ///
  /// **Attention:** If you don't assign the return value to a variable,
  /// `unsubscribe()` is called immediately, which is probably not what you
  /// want!
  fn unsubscribe_when_dropped(self) -> SubscriptionGuard<Self>
  where
    Self: Sized,
  {
    SubscriptionGuard::new(self)
  }
}

/// Synchronous sources have nothing left to cancel once `subscribe` returns.
impl Subscription for () {
  #[inline]
  fn unsubscribe(self) {}

  #[inline]
  fn is_closed(&self) -> bool { true }
}

/// `None` stands for a subscription that was never made, e.g. `take(0)`.
impl<U: Subscription> Subscription for Option<U> {
  fn unsubscribe(self) {
    if let Some(inner) = self {
      inner.unsubscribe();
    }
  }

  fn is_closed(&self) -> bool { self.as_ref().map_or(true, Subscription::is_closed) }
}

macro_rules! impl_subscription_for_shared_option {
  ($rc:ident) => {
    impl<U: Subscription> Subscription for $rc<Option<U>> {
      fn unsubscribe(self) {
        let inner = self.rc_deref_mut().take();
        inner.unsubscribe();
      }

      fn is_closed(&self) -> bool { self.rc_deref().is_closed() }
    }
  };
}

impl_subscription_for_shared_option!(MutRc);
impl_subscription_for_shared_option!(MutArc);

/// An RAII implementation of a "scoped subscribed" of a subscription.
/// When this structure is dropped (falls out of scope), the subscription will
/// be unsubscribed.
///
/// If you want to drop it immediately, wrap it in its own scope
#[derive(Debug)]
#[must_use]
pub struct SubscriptionGuard<T: Subscription>(Option<T>);

impl<T: Subscription> SubscriptionGuard<T> {
  /// Wraps an existing subscription with a guard to enable RAII behavior for
  /// it.
  pub fn new(subscription: T) -> SubscriptionGuard<T> { SubscriptionGuard(Some(subscription)) }

  /// Disarm the guard and give the subscription back.
  pub fn into_inner(mut self) -> Option<T> { self.0.take() }
}

impl<T: Subscription> Drop for SubscriptionGuard<T> {
  #[inline]
  fn drop(&mut self) {
    if let Some(subscription) = self.0.take() {
      subscription.unsubscribe();
    }
  }
}
