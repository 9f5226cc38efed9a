use crate::comment::BlockComment;
use crate::config::LanguageConfiguration;
use crate::identifier::{CharSet, IdentifierGrammar, Letters};
use crate::number::{NumberGrammar, NumericLiteral};
use crate::operator::OperatorGrammar;
use crate::service::ServiceHandle;
use crate::string::{Delimiter, StringGrammar};

use super::finish;

const KEYWORDS: &[&str] = &[
    "case", "class", "data", "default", "deriving", "do", "else", "foreign", "if", "import",
    "in", "infix", "infixl", "infixr", "instance", "let", "module", "newtype", "of", "then",
    "type", "where", "_",
];

const OPERATORS: &[&str] = &[
    "..", ":", "::", "=", "\\", "|", "<-", "->", "@", "~", "=>",
];

const OPERATOR_SYMBOLS: &[char] = &[
    '!', '#', '$', '%', '&', '*', '+', '.', '/', '<', '=', '>', '?', '@', '\\', '^', '|', '-',
    '~', ':',
];

/// Variables and constructors; primes are allowed after the first character
/// (`foldl'`).
const IDENTIFIER: IdentifierGrammar = IdentifierGrammar::new(
    CharSet::letters(Letters::Unicode, &['_']),
    CharSet::alphanumeric(Letters::Unicode, &['_', '\'']),
);

fn numbers() -> NumberGrammar {
    NumberGrammar::new(
        &['-'],
        [
            NumericLiteral::binary(),
            NumericLiteral::octal(),
            NumericLiteral::hex(),
            NumericLiteral::decimal(),
        ],
    )
}

/// Haskell 2010 with the binary literal extension. Layout makes scoping
/// indentation-sensitive; `{- -}` comments nest.
pub fn haskell(service: ServiceHandle) -> LanguageConfiguration {
    finish(
        LanguageConfiguration::builder("Haskell")
            .square_brackets(true)
            .curly_brackets(true)
            .indentation_sensitive(true)
            .strings(StringGrammar::new([Delimiter::quote("\"")]))
            .characters(StringGrammar::new([Delimiter::quote("'")]))
            .numbers(numbers())
            .line_comment("--")
            .block_comment(BlockComment::nested("{-", "-}"))
            .identifiers(IDENTIFIER)
            .operators(OperatorGrammar::new(OPERATOR_SYMBOLS))
            .reserved_identifiers(KEYWORDS)
            .reserved_operators(OPERATORS)
            .language_service(service),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::{Match, Probe};

    #[test]
    fn test_haskell_nested_comment() {
        let config = haskell(None);
        let text = "{- outer {- inner -} still outer -} main";
        assert_eq!(config.comment_grammar().probe(text, 0), Some(Match::new(0, 35)));
    }

    #[test]
    fn test_haskell_primed_identifier() {
        let config = haskell(None);
        let g = config.identifier_grammar().unwrap();
        assert!(g.accepts("foldl'"));
        assert!(!g.accepts("'a'"));
    }

    #[test]
    fn test_haskell_operators() {
        let config = haskell(None);
        assert!(config.operator_grammar().unwrap().accepts(">>="));
        assert!(config.is_reserved_operator("<-"));
        assert!(config.indentation_sensitive_scoping());
    }
}
