//! Check command implementation.
//!
//! Builds language configurations from scratch, outside the shared registry,
//! and reports which of them pass construction-time validation.

use std::any::Any;
use std::io::Write;
use std::panic::{self, UnwindSafe};

use lexa_grammar::{Language, LanguageConfiguration};
use tracing::{info, warn};

use crate::commands::traits::Command;
use crate::error::{LexatError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Language names to check. Empty means all of them.
    pub languages: Vec<String>,
}

/// Outcome of building one configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub name: String,
    /// The validation failure, if the build was rejected.
    pub failure: Option<String>,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }
}

/// Runs `factory`, turning a rejected configuration into a failed outcome.
pub fn check_factory<F>(name: &str, factory: F) -> CheckOutcome
where
    F: FnOnce() -> LanguageConfiguration + UnwindSafe,
{
    let failure = panic::catch_unwind(factory).err().map(panic_message);
    CheckOutcome {
        name: name.to_string(),
        failure,
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    match payload.downcast::<String>() {
        Ok(message) => *message,
        Err(payload) => payload
            .downcast_ref::<&str>()
            .map_or_else(|| "configuration factory panicked".to_string(), |s| s.to_string()),
    }
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    fn languages(&self) -> Result<Vec<Language>> {
        if self.args.languages.is_empty() {
            return Ok(Language::ALL.to_vec());
        }
        self.args
            .languages
            .iter()
            .map(|name| name.parse::<Language>().map_err(LexatError::from))
            .collect()
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = Vec<CheckOutcome>;

    fn new(args: CheckArgs) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        let outcomes: Vec<CheckOutcome> = self
            .languages()?
            .into_iter()
            .map(|lang| check_factory(lang.name(), move || lang.build(None)))
            .collect();

        for outcome in &outcomes {
            match &outcome.failure {
                None => info!(language = %outcome.name, "configuration is valid"),
                Some(failure) => warn!(language = %outcome.name, %failure, "configuration rejected"),
            }
        }
        Ok(outcomes)
    }

    fn report(&self, output: &Self::Output, out: &mut dyn Write) -> Result<()> {
        for outcome in output {
            match &outcome.failure {
                None => writeln!(out, "ok    {}", outcome.name)?,
                Some(failure) => writeln!(out, "FAIL  {}: {}", outcome.name, failure)?,
            }
        }
        Ok(())
    }

    fn name() -> &'static str {
        "check"
    }
}

/// Run the check command. Fails if any configuration is rejected.
pub fn run_check(args: CheckArgs) -> Result<()> {
    let outcomes = super::run(&CheckCommand::new(args))?;
    let failed = outcomes.iter().filter(|o| !o.passed()).count();
    if failed > 0 {
        return Err(LexatError::Validation(format!(
            "{} of {} configuration(s) failed",
            failed,
            outcomes.len()
        )));
    }
    Ok(())
}
