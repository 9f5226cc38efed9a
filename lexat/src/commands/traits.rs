//! Command trait for the lexat CLI.
//!
//! Every subcommand computes its result first and renders it second, so the
//! same result can be printed as text or JSON and inspected in tests.

use std::io::Write;

use crate::error::Result;

/// Standard command trait that all lexat commands implement.
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The result computed by this command.
    type Output;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command.
    fn execute(&self) -> Result<Self::Output>;

    /// Write `output` to `out` in the requested format.
    fn report(&self, output: &Self::Output, out: &mut dyn Write) -> Result<()>;

    /// Get the command name.
    fn name() -> &'static str;
}
