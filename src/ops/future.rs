use std::{
  fmt::Display,
  pin::Pin,
  task::{Context, Poll},
};

use futures::{
  channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender},
  Future, StreamExt,
};

use crate::{observable::Observable, observer::Observer};

/// Why a stream did not resolve its future to a single value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObservableError {
  /// The stream completed without values.
  Empty,

  /// The stream emitted more than one value.
  MultipleValues,
}

impl Display for ObservableError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ObservableError::Empty => write!(f, "the observable has no values"),
      ObservableError::MultipleValues => {
        write!(f, "the observable emitted more than one value")
      }
    }
  }
}

impl std::error::Error for ObservableError {}

type Message<T, E> = Result<Result<T, E>, ObservableError>;

/// A future resolving with the single value emitted by a stream, created by
/// `ObservableExt::to_future`.
pub struct ObservableFuture<T, E> {
  receiver: UnboundedReceiver<Message<T, E>>,
}

impl<T, E> ObservableFuture<T, E> {
  pub fn new<S>(observable: S) -> Self
  where
    S: Observable<T, E, ObservableFutureObserver<T, E>>,
  {
    let (sender, receiver) = unbounded::<Message<T, E>>();
    observable.actual_subscribe(ObservableFutureObserver { sender, last_value: None });
    ObservableFuture { receiver }
  }
}

impl<T, E> Future for ObservableFuture<T, E> {
  type Output = Message<T, E>;

  fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
    // The observer sends exactly one message before closing the channel; a
    // channel closed without one means the subscription was dropped early.
    self
      .receiver
      .poll_next_unpin(cx)
      .map(|msg| msg.unwrap_or(Err(ObservableError::Empty)))
  }
}

pub struct ObservableFutureObserver<T, E> {
  sender: UnboundedSender<Message<T, E>>,
  last_value: Option<Result<T, ObservableError>>,
}

impl<T, E> ObservableFutureObserver<T, E> {
  fn resolve(self, msg: Message<T, E>) {
    // The future may already be gone; nobody is left to tell.
    let _ = self.sender.unbounded_send(msg);
    self.sender.close_channel();
  }
}

impl<T, E> Observer<T, E> for ObservableFutureObserver<T, E> {
  fn next(&mut self, value: T) {
    self.last_value = match self.last_value.take() {
      None => Some(Ok(value)),
      Some(_) => Some(Err(ObservableError::MultipleValues)),
    };
  }

  fn error(self, err: E) { self.resolve(Ok(Err(err))) }

  fn complete(mut self) {
    let msg = match self.last_value.take() {
      Some(Ok(value)) => Ok(Ok(value)),
      Some(Err(err)) => Err(err),
      None => Err(ObservableError::Empty),
    };
    self.resolve(msg);
  }

  fn is_closed(&self) -> bool { self.sender.is_closed() }
}

#[cfg(test)]
mod tests {
  use futures::executor::block_on;

  use crate::{
    observable::{self, ObservableExt},
    observer::{Emitter, Observer},
    ops::future::ObservableError,
    subject::LocalAsyncSubject,
  };

  #[test]
  fn resolves_single_value() {
    let fut = observable::of(4).map(|x| format!("Number {x}")).to_future();
    let value = block_on(fut);
    assert_eq!(value, Ok(Ok("Number 4".to_owned())));
  }

  #[test]
  fn empty_observable() {
    let fut = ObservableExt::<i32, _>::to_future(observable::empty());
    assert_eq!(block_on(fut), Err(ObservableError::Empty));
  }

  #[test]
  fn multiple_values() {
    let fut = observable::from_iter([1, 2, 3]).to_future();
    assert_eq!(block_on(fut), Err(ObservableError::MultipleValues));
  }

  #[test]
  fn error_resolves_immediately() {
    let fut = observable::create(|emitter: &mut dyn Emitter<i32, String>| {
      emitter.error("file not found".to_owned())
    })
    .to_future();
    assert_eq!(block_on(fut), Ok(Err("file not found".to_owned())));
  }

  #[test]
  fn async_subject_as_single() {
    let mut subject = LocalAsyncSubject::<i32, ()>::new();
    let fut = subject.clone().to_future();
    subject.next(1);
    subject.next(2);
    subject.complete();
    assert_eq!(block_on(fut), Ok(Ok(2)));
  }
}
