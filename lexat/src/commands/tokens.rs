//! Tokens command implementation.
//!
//! Tokenizes source files with the configuration of their language and prints
//! the classified spans. Files are processed in parallel.

use std::io::Write;
use std::path::{Path, PathBuf};

use lexa_grammar::{tokenize, Language, Token, TokenKind};
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::commands::traits::Command;
use crate::config::{Config, OutputFormat};
use crate::error::{LexatError, Result};

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Language for every file, overriding extension detection.
    pub language: Option<String>,
    /// Output format. Falls back to the configured one.
    pub format: Option<OutputFormat>,
    /// List plain-text tokens too.
    pub show_plain: bool,
    /// Files to tokenize.
    pub files: Vec<PathBuf>,
    /// Loaded configuration.
    pub config: Config,
}

/// One token, positioned for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenRecord {
    pub kind: &'static str,
    pub start: usize,
    pub end: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, in characters.
    pub column: usize,
    pub text: String,
    pub closed: bool,
}

/// The tokens of one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileTokens {
    pub path: PathBuf,
    pub language: &'static str,
    pub tokens: Vec<TokenRecord>,
}

/// Byte offsets of line starts, for turning offsets into positions.
struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    fn new(source: &str) -> Self {
        let starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { starts }
    }

    fn position(&self, source: &str, offset: usize) -> (usize, usize) {
        let line = self.starts.partition_point(|&start| start <= offset);
        let line_start = self.starts[line - 1];
        let column = source[line_start..offset].chars().count() + 1;
        (line, column)
    }
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
}

impl TokensCommand {
    fn format(&self) -> OutputFormat {
        self.args.format.unwrap_or(self.args.config.output.format)
    }

    fn show_plain(&self) -> bool {
        self.args.show_plain || self.args.config.output.show_plain
    }

    /// Resolves the language of `path`: the explicit flag, then the built-in
    /// extensions, then configured extensions, then the configured default.
    fn language_for(&self, path: &Path) -> Result<Language> {
        if let Some(name) = &self.args.language {
            return Ok(name.parse::<Language>()?);
        }

        let config = &self.args.config;
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            if let Some(lang) = Language::from_extension(ext) {
                return Ok(lang);
            }
            if let Some(lang) = config.language_for_extension(ext)? {
                return Ok(lang);
            }
        }
        config.default_language()?.ok_or_else(|| {
            LexatError::Validation(format!(
                "cannot determine the language of {}; pass --language",
                path.display()
            ))
        })
    }

    fn tokenize_file(&self, path: &Path) -> Result<FileTokens> {
        let language = self.language_for(path)?;
        let source = std::fs::read_to_string(path).map_err(|e| LexatError::file(path, e))?;
        let tokens = tokenize(language.configuration(), &source);
        debug!(path = %path.display(), %language, tokens = tokens.len(), "tokenized file");

        let lines = LineIndex::new(&source);
        let show_plain = self.show_plain();
        let tokens = tokens
            .into_iter()
            .filter(|token| show_plain || token.kind != TokenKind::Plain)
            .map(|token| record(&source, &lines, token))
            .collect();

        Ok(FileTokens {
            path: path.to_path_buf(),
            language: language.name(),
            tokens,
        })
    }
}

fn record(source: &str, lines: &LineIndex, token: Token) -> TokenRecord {
    let (line, column) = lines.position(source, token.start);
    TokenRecord {
        kind: token.kind.as_str(),
        start: token.start,
        end: token.end,
        line,
        column,
        text: token.text(source).to_string(),
        closed: token.closed,
    }
}

impl Command for TokensCommand {
    type Args = TokensArgs;
    type Output = Vec<FileTokens>;

    fn new(args: TokensArgs) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        if self.args.files.is_empty() {
            return Err(LexatError::Validation("no input files".to_string()));
        }
        self.args
            .files
            .par_iter()
            .map(|path| self.tokenize_file(path))
            .collect()
    }

    fn report(&self, output: &Self::Output, out: &mut dyn Write) -> Result<()> {
        match self.format() {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, output)?;
                writeln!(out)?;
            },
            OutputFormat::Text => {
                for file in output {
                    writeln!(out, "{} ({})", file.path.display(), file.language)?;
                    for token in &file.tokens {
                        let marker = if token.closed { "" } else { "  (unterminated)" };
                        writeln!(
                            out,
                            "  {}:{}\t{}\t{:?}{}",
                            token.line, token.column, token.kind, token.text, marker
                        )?;
                    }
                }
            },
        }
        Ok(())
    }

    fn name() -> &'static str {
        "tokens"
    }
}

/// Run the tokens command.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    super::run(&TokensCommand::new(args)).map(drop)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn command(files: Vec<PathBuf>) -> TokensCommand {
        TokensCommand::new(TokensArgs {
            files,
            ..TokensArgs::default()
        })
    }

    #[test]
    fn test_line_index_positions() {
        let source = "ab\nçd\n\nx";
        let lines = LineIndex::new(source);
        assert_eq!(lines.position(source, 0), (1, 1));
        assert_eq!(lines.position(source, 1), (1, 2));
        assert_eq!(lines.position(source, 3), (2, 1));
        assert_eq!(lines.position(source, 5), (2, 2));
        assert_eq!(lines.position(source, 8), (4, 1));
    }

    #[test]
    fn test_tokenizes_python_file() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "main.py", "def f():\n    return 0x1F\n");
        let output = command(vec![path]).execute().unwrap();
        let file = &output[0];
        assert_eq!(file.language, "Python");
        let kinds: Vec<&str> = file.tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, ["keyword", "identifier", "bracket", "bracket", "keyword", "number"]);
        let number = file.tokens.last().unwrap();
        assert_eq!((number.line, number.column, number.text.as_str()), (2, 12, "0x1F"));
    }

    #[test]
    fn test_show_plain_keeps_punctuation() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "data.json", "{\"a\": 1}");
        let mut args = TokensArgs {
            files: vec![path],
            ..TokensArgs::default()
        };
        let hidden = TokensCommand::new(args.clone()).execute().unwrap();
        args.show_plain = true;
        let shown = TokensCommand::new(args).execute().unwrap();
        assert_eq!(hidden[0].tokens.len(), 4);
        assert_eq!(shown[0].tokens.len(), 5);
    }

    #[test]
    fn test_language_flag_overrides_extension() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "script.txt", "-- note");
        let output = TokensCommand::new(TokensArgs {
            language: Some("haskell".to_string()),
            files: vec![path],
            ..TokensArgs::default()
        })
        .execute()
        .unwrap();
        assert_eq!(output[0].language, "Haskell");
        assert_eq!(output[0].tokens[0].kind, "comment");
    }

    #[test]
    fn test_configured_extension_and_default() {
        let dir = TempDir::new().unwrap();
        let tpl = write(&dir, "page.tpl", "<!-- x -->");
        let other = write(&dir, "notes", "x = 1");
        let config = Config {
            default_language: Some("python".to_string()),
            extensions: BTreeMap::from([("tpl".to_string(), "html".to_string())]),
            ..Config::default()
        };
        let output = TokensCommand::new(TokensArgs {
            files: vec![tpl, other],
            config,
            ..TokensArgs::default()
        })
        .execute()
        .unwrap();
        assert_eq!(output[0].language, "HTML");
        assert_eq!(output[1].language, "Python");
    }

    #[test]
    fn test_undetectable_language_fails() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "README", "hello");
        assert!(matches!(
            command(vec![path]).execute(),
            Err(LexatError::Validation(_))
        ));
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = command(vec![PathBuf::from("/nonexistent/a.c")])
            .execute()
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/a.c"));
    }

    #[test]
    fn test_text_report_marks_unterminated() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "a.js", "s = 'open");
        let command = command(vec![path]);
        let output = command.execute().unwrap();
        let mut buffer = Vec::new();
        command.report(&output, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("(JavaScript)"));
        assert!(text.contains("  1:5\tstring\t\"'open\"  (unterminated)"));
    }

    #[test]
    fn test_json_report_is_valid_json() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "a.c", "int x;");
        let command = TokensCommand::new(TokensArgs {
            format: Some(OutputFormat::Json),
            files: vec![path],
            ..TokensArgs::default()
        });
        let output = command.execute().unwrap();
        let mut buffer = Vec::new();
        command.report(&output, &mut buffer).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(json[0]["language"], "C");
        assert_eq!(json[0]["tokens"][0]["kind"], "keyword");
    }
}
