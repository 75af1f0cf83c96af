use thiserror::Error;

/// Errors travelling through the snippet streams. `Clone` because a subject
/// hands a copy to every observer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnippetError {
  #[error("{0}")]
  Runtime(String),

  #[error("Can't find {0}")]
  FileNotFound(String),

  #[error("failed to read {path}: {message}")]
  Io { path: String, message: String },
}

impl SnippetError {
  pub fn runtime(message: impl Into<String>) -> Self { SnippetError::Runtime(message.into()) }
}
