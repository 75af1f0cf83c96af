//! SkipUntil operator implementation
//!
//! Drops the values of the source until a second observable (the notifier)
//! emits a value, then mirrors the source.

use crate::{
  observable::{Observable, ObservableExt},
  observer::Observer,
  rc::{CellArc, CellRc, MutArc, MutRc, RcDeref, SharedCell},
  subscription::{Subscription, TupleSubscription},
  type_hint::TypeHint,
};

/// Single-threaded `skip_until`, created by [`ObservableExt::skip_until`].
#[derive(Clone)]
pub struct SkipUntilOp<S, N, NItem> {
  pub(crate) source: S,
  pub(crate) notifier: N,
  pub(crate) _hint: TypeHint<NItem>,
}

/// Thread-safe `skip_until`, created by
/// [`ObservableExt::skip_until_threads`].
#[derive(Clone)]
pub struct SkipUntilOpThreads<S, N, NItem> {
  pub(crate) source: S,
  pub(crate) notifier: N,
  pub(crate) _hint: TypeHint<NItem>,
}

/// Observer for the source observable. Values pass only once the gate is
/// open; terminal events also release the notifier.
pub struct SkipUntilObserver<P, Flag, NProxy> {
  observer: P,
  open: Flag,
  notifier_proxy: NProxy,
}

/// Observer for the notifier observable.
///
/// Holds a function pointer to forward a notifier error downstream, which
/// keeps the source item type out of its own type.
pub struct SkipUntilNotifierObserver<P, Flag, Err> {
  observer: P,
  open: Flag,
  error_fn: fn(P, Err),
}

impl<P, Flag, Err> SkipUntilNotifierObserver<P, Flag, Err> {
  pub fn new<Item>(observer: P, open: Flag) -> Self
  where
    P: Observer<Item, Err>,
  {
    Self { observer, open, error_fn: |o, e| o.error(e) }
  }
}

macro_rules! impl_skip_until {
  ($op:ident, $rc:ident, $cell:ident) => {
    impl<S, N, NItem, Item, Err, O> Observable<Item, Err, O> for $op<S, N, NItem>
    where
      O: Observer<Item, Err>,
      N: Observable<NItem, Err, SkipUntilNotifierObserver<$rc<Option<O>>, $cell<bool>, Err>>,
      S: Observable<
        Item,
        Err,
        SkipUntilObserver<
          $rc<Option<O>>,
          $cell<bool>,
          $rc<
            Option<
              <N as Observable<
                NItem,
                Err,
                SkipUntilNotifierObserver<$rc<Option<O>>, $cell<bool>, Err>,
              >>::Unsub,
            >,
          >,
        >,
      >,
    {
      type Unsub = TupleSubscription<
        S::Unsub,
        $rc<
          Option<
            <N as Observable<
              NItem,
              Err,
              SkipUntilNotifierObserver<$rc<Option<O>>, $cell<bool>, Err>,
            >>::Unsub,
          >,
        >,
      >;

      fn actual_subscribe(self, observer: O) -> Self::Unsub {
        let observer = $rc::own(Some(observer));
        let open = $cell::from(false);

        let notifier_observer =
          SkipUntilNotifierObserver::new::<Item>(observer.clone(), open.clone());
        let notifier_proxy = $rc::own(Some(self.notifier.actual_subscribe(notifier_observer)));

        let source_unsub = self.source.actual_subscribe(SkipUntilObserver {
          observer,
          open,
          notifier_proxy: notifier_proxy.clone(),
        });
        TupleSubscription::new(source_unsub, notifier_proxy)
      }
    }

    impl<S, N, NItem, Item, Err> ObservableExt<Item, Err> for $op<S, N, NItem>
    where
      S: ObservableExt<Item, Err>,
      N: ObservableExt<NItem, Err>,
    {
    }
  };
}

impl_skip_until!(SkipUntilOp, MutRc, CellRc);
impl_skip_until!(SkipUntilOpThreads, MutArc, CellArc);

impl<Item, Err, P, Flag, NProxy> Observer<Item, Err> for SkipUntilObserver<P, Flag, NProxy>
where
  P: Observer<Item, Err>,
  Flag: SharedCell<bool>,
  NProxy: Subscription,
{
  fn next(&mut self, value: Item) {
    if self.open.get() {
      self.observer.next(value);
    }
  }

  fn error(self, err: Err) {
    self.observer.error(err);
    self.notifier_proxy.unsubscribe();
  }

  fn complete(self) {
    self.observer.complete();
    self.notifier_proxy.unsubscribe();
  }

  #[inline]
  fn is_closed(&self) -> bool { self.observer.is_closed() }
}

impl<NItem, Err, P, Flag, O> Observer<NItem, Err> for SkipUntilNotifierObserver<P, Flag, Err>
where
  P: RcDeref<Target = Option<O>>,
  Flag: SharedCell<bool>,
{
  #[inline]
  fn next(&mut self, _: NItem) { self.open.set(true); }

  fn error(self, err: Err) { (self.error_fn)(self.observer, err) }

  // A notifier ending silently leaves the gate closed.
  #[inline]
  fn complete(self) {}

  fn is_closed(&self) -> bool { self.open.get() || self.observer.rc_deref().is_none() }
}
