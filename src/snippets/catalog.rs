use std::{fmt::Display, fs, io, path::Path};

use tracing::{debug, warn};

use super::{example_of, Console, SnippetError};
use crate::{
  observable::{self, ObservableCreate, ObservableExt},
  observer::{Emitter, Observer, ObserverAll},
  subject::{
    LocalAsyncSubject, LocalBehaviorSubject, LocalReplaySubject, LocalSubject,
  },
  subscription::{LocalCompositeSubscription, Subscription},
};

/// The walkthroughs offered by the menu, numbered from 1 in declaration
/// order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Snippet {
  AsyncSubject,
  ReplaySubject,
  BehaviorSubjectState,
  BehaviorSubject,
  PublishSubject,
  Never,
  Single,
  CompositeDisposable,
  Dispose,
  Range,
  Empty,
  Subscribe,
  FromIterable,
  Just3,
  Just2,
  Just1,
  IgnoreElements,
  ElementAt,
  Filter,
  Skip,
  SkipWhile,
  SkipUntil,
  Take,
}

impl Snippet {
  pub const ALL: [Snippet; 23] = [
    Snippet::AsyncSubject,
    Snippet::ReplaySubject,
    Snippet::BehaviorSubjectState,
    Snippet::BehaviorSubject,
    Snippet::PublishSubject,
    Snippet::Never,
    Snippet::Single,
    Snippet::CompositeDisposable,
    Snippet::Dispose,
    Snippet::Range,
    Snippet::Empty,
    Snippet::Subscribe,
    Snippet::FromIterable,
    Snippet::Just3,
    Snippet::Just2,
    Snippet::Just1,
    Snippet::IgnoreElements,
    Snippet::ElementAt,
    Snippet::Filter,
    Snippet::Skip,
    Snippet::SkipWhile,
    Snippet::SkipUntil,
    Snippet::Take,
  ];

  /// The menu number, starting at 1.
  pub fn number(self) -> usize { self as usize + 1 }

  pub fn from_number(number: usize) -> Option<Snippet> {
    number
      .checked_sub(1)
      .and_then(|idx| Snippet::ALL.get(idx).copied())
  }

  pub fn title(self) -> &'static str {
    match self {
      Snippet::AsyncSubject => "AsyncSubject",
      Snippet::ReplaySubject => "ReplaySubject",
      Snippet::BehaviorSubjectState => "BehaviorSubject State",
      Snippet::BehaviorSubject => "BehaviorSubject",
      Snippet::PublishSubject => "PublishSubject",
      Snippet::Never => "never",
      Snippet::Single => "Single",
      Snippet::CompositeDisposable => "CompositeDisposable",
      Snippet::Dispose => "dispose",
      Snippet::Range => "range",
      Snippet::Empty => "empty",
      Snippet::Subscribe => "subscribe",
      Snippet::FromIterable => "fromIterable",
      Snippet::Just3 => "just3",
      Snippet::Just2 => "just2",
      Snippet::Just1 => "just1",
      Snippet::IgnoreElements => "ignoreElements",
      Snippet::ElementAt => "elementAt",
      Snippet::Filter => "filter",
      Snippet::Skip => "skip",
      Snippet::SkipWhile => "skipWhile",
      Snippet::SkipUntil => "skipUntil",
      Snippet::Take => "take",
    }
  }

  /// Print the banner, then every event the walkthrough observes.
  pub fn run(self, console: &Console) {
    debug!(number = self.number(), title = self.title(), "running snippet");
    example_of(console, self.title(), || match self {
      Snippet::AsyncSubject => async_subject(console),
      Snippet::ReplaySubject => replay_subject(console),
      Snippet::BehaviorSubjectState => behavior_subject_state(console),
      Snippet::BehaviorSubject => behavior_subject(console),
      Snippet::PublishSubject => publish_subject(console),
      Snippet::Never => never(console),
      Snippet::Single => single(console),
      Snippet::CompositeDisposable => composite_disposable(console),
      Snippet::Dispose => dispose(console),
      Snippet::Range => range(console),
      Snippet::Empty => empty(console),
      Snippet::Subscribe => subscribe(console),
      Snippet::FromIterable => from_iterable(console),
      Snippet::Just3 => just3(console),
      Snippet::Just2 => just2(console),
      Snippet::Just1 => just1(console),
      Snippet::IgnoreElements => ignore_elements(console),
      Snippet::ElementAt => element_at(console),
      Snippet::Filter => filter(console),
      Snippet::Skip => skip(console),
      Snippet::SkipWhile => skip_while(console),
      Snippet::SkipUntil => skip_until(console),
      Snippet::Take => take(console),
    });
  }
}

/// A single-value producer yielding the contents of the file at `path`.
///
/// A missing file is reported as [`SnippetError::FileNotFound`] through the
/// error channel, any other I/O failure as [`SnippetError::Io`].
pub fn load_text(
  path: impl AsRef<Path>,
) -> ObservableCreate<impl FnOnce(&mut dyn Emitter<String, SnippetError>), String, SnippetError> {
  let path = path.as_ref().to_path_buf();
  observable::create(move |emitter: &mut dyn Emitter<String, SnippetError>| {
    match fs::read_to_string(&path) {
      Ok(contents) => {
        emitter.next(contents);
        emitter.complete();
      }
      Err(err) if err.kind() == io::ErrorKind::NotFound => {
        emitter.error(SnippetError::FileNotFound(path.display().to_string()))
      }
      Err(err) => {
        warn!(path = %path.display(), %err, "failed to read file");
        emitter.error(SnippetError::Io { path: path.display().to_string(), message: err.to_string() })
      }
    }
  })
}

/// An observer printing every event prefixed with `tag`, e.g. `1) X`,
/// `1) Error!` and `1) Complete`.
fn tagged<Item: Display>(
  console: &Console,
  tag: &'static str,
) -> ObserverAll<impl FnMut(Item), impl FnOnce(SnippetError), impl FnOnce()> {
  let (on_next, on_error, on_complete) = (console.clone(), console.clone(), console.clone());
  ObserverAll::new(
    move |v: Item| on_next.println(format!("{tag}{v}")),
    move |e: SnippetError| on_error.println(format!("{tag}{e}")),
    move || on_complete.println(format!("{tag}Complete")),
  )
}

fn async_subject(console: &Console) {
  let subscriptions = LocalCompositeSubscription::default();
  let mut subject = LocalAsyncSubject::<i32, SnippetError>::new();

  subscriptions.add(subject.clone().subscribe_with(tagged(console, "1) ")));

  subject.next(0);
  subject.next(1);
  subject.next(2);
  console.println("1) call Complete");
  subject.complete();

  subscriptions.dispose_all();
}

fn replay_subject(console: &Console) {
  let subscriptions = LocalCompositeSubscription::default();
  let mut subject = LocalReplaySubject::<String, SnippetError>::with_size(2);

  subject.next("1".to_owned());
  subject.next("2".to_owned());
  subject.next("3".to_owned());

  subscriptions.add(subject.clone().subscribe_with(tagged(console, "1) ")));
  subscriptions.add(subject.clone().subscribe_with(tagged(console, "2) ")));

  subject.next("4".to_owned());

  subscriptions.add(subject.clone().subscribe_with(tagged(console, "3) ")));

  subject.error(SnippetError::runtime("Error!"));
}

fn behavior_subject_state(console: &Console) {
  let subscriptions = LocalCompositeSubscription::default();
  let mut subject = LocalBehaviorSubject::<i32, SnippetError>::new(0);

  console.println(subject.value().to_string());

  let c_console = console.clone();
  subscriptions.add(
    subject
      .clone()
      .subscribe_err(move |v| c_console.println(format!("1) {v}")), |_| {}),
  );

  subject.next(1);

  console.println(subject.value().to_string());

  subscriptions.dispose_all();
}

fn behavior_subject(console: &Console) {
  let subscriptions = LocalCompositeSubscription::default();
  let mut subject = LocalBehaviorSubject::<String, SnippetError>::new("Initial value".to_owned());

  subject.next("X".to_owned());

  let _subscription_one = subject.clone().subscribe_with(tagged(console, "1) "));

  subject.next("Y".to_owned());

  subject.clone().error(SnippetError::runtime("Error!"));

  subscriptions.add(subject.subscribe_with(tagged(console, "2) ")));
}

fn publish_subject(console: &Console) {
  let mut subject = LocalSubject::<i32, SnippetError>::new();

  subject.next(1);

  let subscription_one = subject
    .clone()
    .subscribe_err(|v| console.println(format!("1) {v}")), |_| {});

  subject.next(2);

  let subscription_two = subject
    .clone()
    .subscribe_err(|v| console.println(format!("2) {v}")), |_| {});

  subject.next(3);

  subscription_one.unsubscribe();

  subject.next(4);

  subject.clone().complete();

  subject.next(5);

  subscription_two.unsubscribe();

  let _subscription_three = subject.clone().subscribe_with(tagged(console, "3) "));

  subject.next(6);
}

fn never(console: &Console) {
  let subscription = observable::never::<String>()
    .on_subscribe(|| console.println("doOnSubscribe"))
    .on_complete(|| console.println("doOnComplete"))
    .on_dispose(|| console.println("doOnDispose"))
    .subscribe_complete(|v| console.println(v), || console.println("Completed"));

  subscription.unsubscribe();
}

fn single(console: &Console) {
  let subscriptions = LocalCompositeSubscription::default();

  let c_console = console.clone();
  let e_console = console.clone();
  let subscription = load_text("build.gradle").subscribe_err(
    move |text| c_console.println(text),
    move |err| e_console.println(format!("Error, {err}")),
  );

  subscriptions.add(subscription);
}

fn composite_disposable(console: &Console) {
  let subscriptions = LocalCompositeSubscription::default();

  let subscription = observable::from_iter(["A", "B", "C"]).subscribe(|v| console.println(v));

  subscriptions.add(subscription);
}

fn dispose(console: &Console) {
  let most_popular = observable::from_iter(["A", "B", "C"]);

  let subscription = most_popular.subscribe(|v| console.println(v));

  subscription.unsubscribe();
}

fn range(console: &Console) {
  observable::range(1, 10).subscribe(|n| {
    let n = f64::from(n);
    let fibonacci = ((1.61803_f64.powf(n) - 0.61803_f64.powf(n)) / 2.23606).round() as i64;
    console.println(fibonacci.to_string());
  });
}

fn empty(console: &Console) {
  observable::empty::<()>()
    .subscribe_complete(|v| console.println(format!("{v:?}")), || console.println("Completed"));
}

fn subscribe(console: &Console) {
  let subscription = observable::from_iter([1, 2, 3]).subscribe(|v| console.println(v.to_string()));
  console.println(format!("subscription closed: {}", subscription.is_closed()));
}

fn from_iterable(console: &Console) {
  observable::from_iter(vec![1, 2, 3]).subscribe(|v| console.println(v.to_string()));
}

fn just3(console: &Console) {
  observable::of(vec![1, 2, 3]).subscribe(|list| console.println(format!("{list:?}")));
}

fn just2(console: &Console) {
  observable::from_iter([1, 2, 3]).subscribe(|v| console.println(v.to_string()));
}

fn just1(console: &Console) { observable::of(1).subscribe(|v| console.println(v.to_string())); }

fn ignore_elements(console: &Console) {
  let mut strikes = LocalSubject::<String, SnippetError>::new();

  strikes.clone().ignore_elements().subscribe_all(
    |_| {},
    |err| console.println(format!("Error, {err}")),
    || console.println("You're out!"),
  );

  strikes.next("X".to_owned());
  strikes.next("X".to_owned());
  strikes.next("X".to_owned());

  strikes.complete();
}

fn element_at(console: &Console) {
  let mut strikes = LocalSubject::<String, SnippetError>::new();

  strikes
    .clone()
    .element_at(2)
    .subscribe_err(|_| console.println("You're out!"), |_| {});

  strikes.next("X".to_owned());
  strikes.next("X".to_owned());
  strikes.next("X".to_owned());
}

fn filter(console: &Console) {
  observable::from_iter(1..=6)
    .filter(|n| n % 2 == 0)
    .subscribe(|v| console.println(v.to_string()));
}

fn skip(console: &Console) {
  observable::from_iter(["A", "B", "C", "D", "E", "F"])
    .skip(3)
    .subscribe(|v| console.println(v));
}

fn skip_while(console: &Console) {
  observable::from_iter([2, 2, 3, 4])
    .skip_while(|n| n % 2 == 0)
    .subscribe(|v| console.println(v.to_string()));
}

fn skip_until(console: &Console) {
  let mut subject = LocalSubject::<String, SnippetError>::new();
  let mut trigger = LocalSubject::<String, SnippetError>::new();

  subject
    .clone()
    .skip_until(trigger.clone())
    .subscribe_err(|v| console.println(v), |_| {});

  subject.next("A".to_owned());
  subject.next("B".to_owned());

  trigger.next("X".to_owned());

  subject.next("C".to_owned());
}

fn take(console: &Console) {
  observable::from_iter(1..=6)
    .take(3)
    .subscribe(|v| console.println(v.to_string()));
}
