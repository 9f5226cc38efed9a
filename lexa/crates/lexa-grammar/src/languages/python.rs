use crate::config::LanguageConfiguration;
use crate::identifier::IdentifierGrammar;
use crate::number::{NumberGrammar, NumericLiteral, Suffixes};
use crate::service::ServiceHandle;
use crate::string::{Delimiter, StringGrammar};

use super::finish;

const KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
    // 3.10 soft keywords
    "match", "case",
];

const OPERATORS: &[&str] = &[
    "+", "-", "*", "**", "/", "//", "%", "@", "&", "|", "^", "~", "<<", ">>", ":=", "<", ">",
    "<=", ">=", "==", "!=",
];

/// String prefixes in every letter case, two-letter combinations first.
const STRING_PREFIXES: &[&str] = &[
    "rb", "rB", "Rb", "RB", "br", "bR", "Br", "BR", "rf", "rF", "Rf", "RF", "fr", "fR", "Fr",
    "FR", "r", "R", "b", "B", "f", "F", "u", "U",
];

const IMAGINARY: Suffixes = Suffixes::any(&['j', 'J'], false);

fn strings() -> StringGrammar {
    StringGrammar::new([
        Delimiter::block("\"\"\""),
        Delimiter::block("'''"),
        Delimiter::quote("\""),
        Delimiter::quote("'"),
    ])
    .with_prefixes(STRING_PREFIXES)
}

fn numbers() -> NumberGrammar {
    NumberGrammar::new(
        &['+', '-'],
        [
            NumericLiteral::binary(),
            NumericLiteral::octal(),
            NumericLiteral::hex_float(),
            NumericLiteral::decimal().suffixes(IMAGINARY),
        ],
    )
}

/// Python 3. Scoping is indentation-sensitive; `[]` and `{}` are still
/// brackets for matching purposes.
pub fn python(service: ServiceHandle) -> LanguageConfiguration {
    finish(
        LanguageConfiguration::builder("Python")
            .square_brackets(true)
            .curly_brackets(true)
            .indentation_sensitive(true)
            .strings(strings())
            .numbers(numbers())
            .line_comment("#")
            .identifiers(IdentifierGrammar::UNICODE)
            .reserved_identifiers(KEYWORDS)
            .reserved_operators(OPERATORS)
            .language_service(service),
    )
}
