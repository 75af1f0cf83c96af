use std::marker::PhantomData;

use crate::{
  observable::{Observable, ObservableExt},
  observer::{Emitter, Observer},
};

/// Creates an observable from a producer function.
///
/// The producer runs once per subscription and pushes events through the
/// `&mut dyn Emitter` it is handed. Events after the first terminal event
/// are ignored.
///
/// ```
/// use rxsubjects::prelude::*;
///
/// let mut seen = vec![];
/// observable::create(|emitter: &mut dyn Emitter<i32, String>| {
///   emitter.next(1);
///   emitter.next(2);
///   emitter.complete();
///   emitter.next(3);
/// })
/// .subscribe_err(|v| seen.push(v), |_| {});
/// assert_eq!(seen, [1, 2]);
/// ```
pub fn create<F, Item, Err>(producer: F) -> ObservableCreate<F, Item, Err>
where
  F: FnOnce(&mut dyn Emitter<Item, Err>),
{
  ObservableCreate { producer, _marker: PhantomData }
}

#[derive(Clone)]
pub struct ObservableCreate<F, Item, Err> {
  producer: F,
  _marker: PhantomData<fn() -> (Item, Err)>,
}

struct CreateEmitter<O>(Option<O>);

impl<O, Item, Err> Emitter<Item, Err> for CreateEmitter<O>
where
  O: Observer<Item, Err>,
{
  #[inline]
  fn next(&mut self, value: Item) {
    if let Some(observer) = &mut self.0 {
      observer.next(value);
    }
  }

  #[inline]
  fn error(&mut self, err: Err) {
    if let Some(observer) = self.0.take() {
      observer.error(err);
    }
  }

  #[inline]
  fn complete(&mut self) {
    if let Some(observer) = self.0.take() {
      observer.complete();
    }
  }
}

impl<F, Item, Err, O> Observable<Item, Err, O> for ObservableCreate<F, Item, Err>
where
  F: FnOnce(&mut dyn Emitter<Item, Err>),
  O: Observer<Item, Err>,
{
  type Unsub = ();

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    let mut emitter = CreateEmitter(Some(observer));
    (self.producer)(&mut emitter);
  }
}

impl<F, Item, Err> ObservableExt<Item, Err> for ObservableCreate<F, Item, Err> where
  F: FnOnce(&mut dyn Emitter<Item, Err>)
{
}
