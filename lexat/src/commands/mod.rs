//! Command modules for the lexat CLI.
//!
//! Each subcommand is implemented in its own file and follows the
//! [`traits::Command`] pattern.

pub mod traits;

pub mod check;
pub mod languages;
pub mod tokens;

use std::io;

use tracing::debug;

use crate::error::Result;
use traits::Command;

// Re-export command types and functions
pub use check::{run_check, CheckArgs};
pub use languages::{run_languages, LanguagesArgs};
pub use tokens::{run_tokens, TokensArgs};

/// Executes `command` and writes its report to stdout.
fn run<C: Command>(command: &C) -> Result<C::Output> {
    debug!(command = C::name(), "running command");
    let output = command.execute()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    command.report(&output, &mut out)?;
    Ok(output)
}
