//! Console walkthroughs of subject and operator semantics.
//!
//! Every [`Snippet`] prints a banner through [`example_of`] and then the
//! events it observes, one line each, to a [`Console`]. [`run_menu`] lets a
//! user pick snippets by number.
mod catalog;
mod console;
mod error;
mod menu;

pub use catalog::{load_text, Snippet};
pub use console::Console;
pub use error::SnippetError;
pub use menu::run_menu;
use tracing::debug;

/// Print the banner for `description`, then run `action`.
pub fn example_of(console: &Console, description: &str, action: impl FnOnce()) {
  console.println(format!("\n--- Example of: {description} ---"));
  debug!(description, "running example");
  action();
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn banner_precedes_action() {
    let console = Console::recording();
    example_of(&console, "banner", || console.println("body"));
    assert_eq!(console.lines(), ["\n--- Example of: banner ---", "body"]);
  }
}
