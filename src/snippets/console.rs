use crate::rc::{MutRc, RcDeref, RcDerefMut};

/// A cloneable line sink. Clones share one transcript, so observers can own
/// a handle while the caller inspects the output afterwards.
#[derive(Clone, Default)]
pub struct Console {
  echo: bool,
  transcript: MutRc<Vec<String>>,
}

impl Console {
  /// Print every line to standard output and keep it in the transcript.
  pub fn stdout() -> Self { Console { echo: true, transcript: MutRc::own(vec![]) } }

  /// Only keep lines in the transcript.
  pub fn recording() -> Self { Console::default() }

  pub fn println(&self, line: impl Into<String>) {
    let line = line.into();
    if self.echo {
      println!("{line}");
    }
    self.transcript.rc_deref_mut().push(line);
  }

  /// Everything printed so far, in order.
  pub fn lines(&self) -> Vec<String> { self.transcript.rc_deref().clone() }

  /// Forget the transcript recorded so far.
  pub fn clear(&self) { self.transcript.rc_deref_mut().clear() }
}
