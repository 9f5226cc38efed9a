use crate::config::LanguageConfiguration;
use crate::identifier::IdentifierGrammar;
use crate::number::{NumberGrammar, NumericLiteral, Suffixes};
use crate::service::ServiceHandle;
use crate::string::{Delimiter, StringGrammar};

use super::{finish, C_BLOCK_COMMENT};

const KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef",
    "union", "unsigned", "void", "volatile", "while",
    // C11
    "_Alignas", "_Alignof", "_Atomic", "_Bool", "_Complex", "_Generic", "_Imaginary",
    "_Noreturn", "_Static_assert", "_Thread_local",
];

const OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "%", "=", "+=", "-=", "*=", "/=", "%=", "++", "--", "<<", ">>", "&",
    "|", "^", "~", "<<=", ">>=", "&=", "|=", "^=", "&&", "||", "!", "==", "!=", ">", "<", ">=",
    "<=", "?", ":",
];

/// Encoding prefixes of string and character literals.
const ENCODING_PREFIXES: &[&str] = &["u8", "L", "u", "U"];

/// Any run of `f`, `l` and `u` in either case (`10UL`, `1.0f`).
const TYPE_SUFFIXES: Suffixes = Suffixes::any(&['f', 'F', 'l', 'L', 'u', 'U'], true);

fn numbers() -> NumberGrammar {
    NumberGrammar::new(
        &['+', '-'],
        [
            NumericLiteral::hex_float()
                .loose_float()
                .suffixes(TYPE_SUFFIXES),
            NumericLiteral::legacy_octal().suffixes(TYPE_SUFFIXES),
            NumericLiteral::decimal().suffixes(TYPE_SUFFIXES),
        ],
    )
}

pub fn c(service: ServiceHandle) -> LanguageConfiguration {
    finish(
        LanguageConfiguration::builder("C")
            .square_brackets(true)
            .curly_brackets(true)
            .strings(StringGrammar::new([Delimiter::quote("\"")]).with_prefixes(ENCODING_PREFIXES))
            .characters(StringGrammar::new([Delimiter::quote("'")]).with_prefixes(ENCODING_PREFIXES))
            .numbers(numbers())
            .line_comment("//")
            .block_comment(C_BLOCK_COMMENT)
            .identifiers(IdentifierGrammar::ASCII)
            .reserved_identifiers(KEYWORDS)
            .reserved_operators(OPERATORS)
            .language_service(service),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::Probe;

    #[test]
    fn test_c_numbers() {
        let config = c(None);
        let g = config.number_grammar();
        for literal in ["0x1F", "0x1.8p3", "0x1p-2", "0x1.8", "0755", "10UL", "1.5e10f", "3.0L"] {
            assert!(g.accepts(literal), "{literal}");
        }
        assert_eq!(g.probe("089", 0).map(|m| m.end), Some(3));
    }

    #[test]
    fn test_c_character_literals() {
        let config = c(None);
        let chars = config.character_grammar().unwrap();
        assert!(chars.accepts("'a'"));
        assert!(chars.accepts("'\\''"));
        assert!(chars.accepts("u8'x'"));
        assert!(chars.accepts("L'x'"));
        assert!(!chars.accepts("\"s\""));
    }

    #[test]
    fn test_c_wide_strings() {
        let config = c(None);
        assert!(config.string_grammar().accepts("L\"wide\""));
        assert!(config.string_grammar().accepts("u8\"utf\""));
    }

    #[test]
    fn test_c11_keywords_are_identifiers() {
        let config = c(None);
        assert!(config.is_reserved_identifier("_Static_assert"));
        assert!(!config.is_reserved_identifier("main"));
    }
}
