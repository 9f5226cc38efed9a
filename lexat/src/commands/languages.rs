//! Languages command implementation.
//!
//! Lists every supported language with its file extensions and lexical
//! features.

use std::io::Write;

use lexa_grammar::{Language, LanguageConfiguration};
use serde::Serialize;

use crate::commands::traits::Command;
use crate::config::OutputFormat;
use crate::error::Result;

/// Arguments for the languages command.
#[derive(Debug, Clone, Default)]
pub struct LanguagesArgs {
    /// Output format.
    pub format: OutputFormat,
}

/// Summary of one language configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageSummary {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
    pub square_brackets: bool,
    pub curly_brackets: bool,
    pub indentation_sensitive: bool,
    pub line_comment: Option<&'static str>,
    pub block_comment: Option<(&'static str, &'static str)>,
    pub nested_comments: bool,
    pub character_literals: bool,
    pub reserved_identifiers: usize,
    pub reserved_operators: usize,
}

impl LanguageSummary {
    fn new(language: Language, config: &LanguageConfiguration) -> Self {
        let block = config.block_comment();
        Self {
            name: config.name(),
            extensions: language.extensions(),
            square_brackets: config.supports_square_brackets(),
            curly_brackets: config.supports_curly_brackets(),
            indentation_sensitive: config.indentation_sensitive_scoping(),
            line_comment: config.single_line_comment(),
            block_comment: block.map(|b| (b.open, b.close)),
            nested_comments: block.is_some_and(|b| b.nested),
            character_literals: config.character_grammar().is_some(),
            reserved_identifiers: config.reserved_identifiers().len(),
            reserved_operators: config.reserved_operators().len(),
        }
    }

    fn features(&self) -> String {
        let mut features = Vec::new();
        if self.square_brackets {
            features.push("[]".to_string());
        }
        if self.curly_brackets {
            features.push("{}".to_string());
        }
        if self.indentation_sensitive {
            features.push("indentation".to_string());
        }
        if let Some(line) = self.line_comment {
            features.push(line.to_string());
        }
        if let Some((open, close)) = self.block_comment {
            let nested = if self.nested_comments { " nested" } else { "" };
            features.push(format!("{open} {close}{nested}"));
        }
        features.join("  ")
    }
}

/// Languages command handler.
pub struct LanguagesCommand {
    args: LanguagesArgs,
}

impl Command for LanguagesCommand {
    type Args = LanguagesArgs;
    type Output = Vec<LanguageSummary>;

    fn new(args: LanguagesArgs) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        Ok(Language::ALL
            .into_iter()
            .map(|lang| LanguageSummary::new(lang, lang.configuration()))
            .collect())
    }

    fn report(&self, output: &Self::Output, out: &mut dyn Write) -> Result<()> {
        match self.args.format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, output)?;
                writeln!(out)?;
            },
            OutputFormat::Text => {
                for summary in output {
                    writeln!(
                        out,
                        "{:<12} {:<16} {:>3} keywords  {:>3} operators  {}",
                        summary.name,
                        summary.extensions.join(", "),
                        summary.reserved_identifiers,
                        summary.reserved_operators,
                        summary.features()
                    )?;
                }
            },
        }
        Ok(())
    }

    fn name() -> &'static str {
        "languages"
    }
}

/// Run the languages command.
pub fn run_languages(args: LanguagesArgs) -> Result<()> {
    super::run(&LanguagesCommand::new(args)).map(drop)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(format: OutputFormat) -> String {
        let command = LanguagesCommand::new(LanguagesArgs { format });
        let output = command.execute().unwrap();
        let mut buffer = Vec::new();
        command.report(&output, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_lists_every_language() {
        let command = LanguagesCommand::new(LanguagesArgs::default());
        let output = command.execute().unwrap();
        assert_eq!(output.len(), Language::ALL.len());
        assert_eq!(output[0].name, "Python");
    }

    #[test]
    fn test_text_report() {
        let text = render(OutputFormat::Text);
        assert_eq!(text.lines().count(), Language::ALL.len());
        let haskell = text.lines().find(|l| l.starts_with("Haskell")).unwrap();
        assert!(haskell.contains("{- -} nested"));
        assert!(haskell.contains("indentation"));
    }

    #[test]
    fn test_json_report() {
        let json: serde_json::Value = serde_json::from_str(&render(OutputFormat::Json)).unwrap();
        let entries = json.as_array().unwrap();
        let json_lang = entries.iter().find(|e| e["name"] == "JSON").unwrap();
        assert_eq!(json_lang["line_comment"], serde_json::Value::Null);
        assert_eq!(json_lang["reserved_identifiers"], 3);
    }

    #[test]
    fn test_command_name() {
        assert_eq!(LanguagesCommand::name(), "languages");
    }
}
