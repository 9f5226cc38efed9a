//! Lexat CLI - inspect and exercise lexa language configurations.
//!
//! This is the main entry point for the lexat CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers in [`commands`].

mod commands;
mod config;
mod error;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_check, run_languages, run_tokens, CheckArgs, LanguagesArgs, TokensArgs};
use config::{Config, OutputFormat};
use error::{LexatError, Result};

/// Lexat - lexical grammars for syntax highlighting
///
/// Lexat lists the supported languages, validates their configurations and
/// tokenizes source files the way a highlighter would.
#[derive(Parser, Debug)]
#[command(name = "lexat")]
#[command(author = "Lexa Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect and exercise lexa language configurations", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "LEXAT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "LEXAT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "LEXAT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the lexat CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List supported languages
    ///
    /// Prints each language with its file extensions, reserved word counts
    /// and structural features.
    Languages(LanguagesCommand),

    /// Validate language configurations
    ///
    /// Builds each configuration from scratch and reports the ones whose
    /// grammars are rejected. Exits with an error if any fails.
    Check(CheckCommand),

    /// Tokenize source files
    ///
    /// Classifies every span of each file as a comment, string, number,
    /// keyword, identifier, operator, bracket or plain text.
    Tokens(TokensCommand),
}

/// Arguments for the languages subcommand.
#[derive(Parser, Debug)]
struct LanguagesCommand {
    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Languages to check (default: all)
    languages: Vec<String>,
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Files to tokenize
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Language of every file (default: detected from the extension)
    #[arg(short, long)]
    language: Option<String>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Also list plain-text tokens
    #[arg(long)]
    show_plain: bool,
}

/// Main entry point for the lexat CLI.
///
/// Parses command-line arguments and runs the selected command, printing any
/// error to stderr.
fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        },
    }
}

/// Loads configuration, initializes logging, and dispatches to the
/// appropriate command handler.
fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose || config.verbose;

    init_logging(verbose, cli.no_color)?;

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Log lines go to stderr so that command output on stdout stays parseable.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| LexatError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Languages(args) => run_languages(LanguagesArgs {
            format: args.format.unwrap_or(config.output.format),
        }),
        Commands::Check(args) => run_check(CheckArgs {
            languages: args.languages,
        }),
        Commands::Tokens(args) => run_tokens(TokensArgs {
            language: args.language,
            format: args.format,
            show_plain: args.show_plain,
            files: args.files,
            config,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_languages() {
        let cli = Cli::parse_from(["lexat", "languages"]);
        assert!(matches!(cli.command, Commands::Languages(_)));
    }

    #[test]
    fn test_cli_parse_languages_json() {
        let cli = Cli::parse_from(["lexat", "languages", "--format", "json"]);
        if let Commands::Languages(args) = cli.command {
            assert_eq!(args.format, Some(OutputFormat::Json));
        } else {
            panic!("Expected Languages command");
        }
    }

    #[test]
    fn test_cli_parse_check_with_languages() {
        let cli = Cli::parse_from(["lexat", "check", "python", "json"]);
        if let Commands::Check(args) = cli.command {
            assert_eq!(args.languages, ["python", "json"]);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_parse_tokens() {
        let cli = Cli::parse_from(["lexat", "tokens", "a.py", "b.js", "-l", "ts", "--show-plain"]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.files, [PathBuf::from("a.py"), PathBuf::from("b.js")]);
            assert_eq!(args.language.as_deref(), Some("ts"));
            assert!(args.show_plain);
            assert_eq!(args.format, None);
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_tokens_requires_files() {
        assert!(Cli::try_parse_from(["lexat", "tokens"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["lexat", "languages", "-F", "yaml"]).is_err());
    }

    #[test]
    fn test_cli_parse_global_flags() {
        let cli = Cli::parse_from([
            "lexat",
            "--verbose",
            "--no-color",
            "--config",
            "/path/to/lexat.toml",
            "check",
        ]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/lexat.toml")));
    }
}
