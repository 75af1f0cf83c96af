//! Interactive walkthrough of subject and operator semantics.
//!
//! ```sh
//! cargo run --example menu
//! RUST_LOG=rxsubjects=trace cargo run --example menu
//! ```
use std::io;

use rxsubjects::snippets::{run_menu, Console};
use tracing::info;

fn main() -> io::Result<()> {
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
    )
    .init();

  info!("starting snippet menu v{}", env!("CARGO_PKG_VERSION"));
  run_menu(io::stdin().lock(), &Console::stdout())
}
