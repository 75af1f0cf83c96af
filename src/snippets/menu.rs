use std::io::{self, BufRead};

use tracing::debug;

use super::{Console, Snippet};

fn print_menu(console: &Console) {
  console.println("\nChoose an example:");
  for snippet in Snippet::ALL {
    console.println(format!("{:>3}. {}", snippet.number(), snippet.title()));
  }
  console.println("  0. Exit");
}

/// Read snippet numbers from `input` line by line and run each choice.
///
/// `0` or end of input ends the loop. Anything else that is not a known
/// number prints a notice and shows the menu again.
pub fn run_menu<R: BufRead>(input: R, console: &Console) -> io::Result<()> {
  print_menu(console);
  for line in input.lines() {
    let line = line?;
    let choice = line.trim();
    match choice.parse::<usize>() {
      Ok(0) => {
        debug!("menu exit requested");
        return Ok(());
      }
      Ok(number) => match Snippet::from_number(number) {
        Some(snippet) => snippet.run(console),
        None => console.println(format!("There is no example number {number}.")),
      },
      Err(_) => console.println(format!("'{choice}' is not a number.")),
    }
    print_menu(console);
  }
  debug!("menu input exhausted");
  Ok(())
}

#[cfg(test)]
mod test {
  use std::io::Cursor;

  use super::*;

  #[test]
  fn exit_on_zero() {
    let console = Console::recording();
    run_menu(Cursor::new("0\n5\n"), &console).unwrap();
    let lines = console.lines();
    assert!(!lines.iter().any(|l| l.contains("Example of")));
    assert_eq!(lines.last().map(String::as_str), Some("  0. Exit"));
  }

  #[test]
  fn runs_the_chosen_snippet() {
    let console = Console::recording();
    run_menu(Cursor::new(" 11 \n"), &console).unwrap();
    let lines = console.lines();
    let banner = lines
      .iter()
      .position(|l| l == "\n--- Example of: empty ---")
      .unwrap();
    assert_eq!(lines[banner + 1], "Completed");
  }

  #[test]
  fn notices_for_bad_input() {
    let console = Console::recording();
    run_menu(Cursor::new("abc\n99\n"), &console).unwrap();
    let lines = console.lines();
    assert!(lines.contains(&"'abc' is not a number.".to_owned()));
    assert!(lines.contains(&"There is no example number 99.".to_owned()));
  }

  #[test]
  fn io_errors_propagate() {
    struct Broken;

    impl io::Read for Broken {
      fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "broken pipe"))
      }
    }

    let console = Console::recording();
    let err = run_menu(io::BufReader::new(Broken), &console).unwrap_err();
    assert_eq!(err.to_string(), "broken pipe");
  }
}
