use crate::comment::BlockComment;
use crate::config::LanguageConfiguration;
use crate::identifier::IdentifierGrammar;
use crate::number::{NumberGrammar, NumericLiteral};
use crate::operator::OperatorGrammar;
use crate::service::ServiceHandle;
use crate::string::{Delimiter, StringGrammar};

use super::finish;

const KEYWORDS: &[&str] = &[
    // declarations
    "actor", "associatedtype", "class", "deinit", "enum", "extension", "fileprivate", "func",
    "import", "init", "inout", "internal", "let", "open", "operator", "private",
    "precedencegroup", "protocol", "public", "rethrows", "static", "struct", "subscript",
    "typealias", "var",
    // statements
    "break", "case", "catch", "continue", "default", "defer", "do", "else", "fallthrough",
    "for", "guard", "if", "in", "repeat", "return", "switch", "throw", "where", "while",
    // expressions and types
    "Any", "as", "async", "await", "false", "is", "nil", "self", "Self", "super", "throws",
    "true", "try",
];

const OPERATORS: &[&str] = &[
    "=", "+", "-", "*", "/", "%", "==", "!=", "===", "!==", "<", ">", "<=", ">=", "&&", "||",
    "!", "&", "|", "^", "~", "<<", ">>", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "<<=",
    ">>=", "??", "?", "...", "..<", "->",
];

/// Characters custom operators are built from.
const OPERATOR_SYMBOLS: &[char] = &[
    '/', '=', '-', '+', '!', '*', '%', '<', '>', '&', '|', '^', '~', '?', '.',
];

fn strings() -> StringGrammar {
    StringGrammar::new([
        Delimiter::block("\"\"\""),
        // Raw strings: backslashes are literal.
        Delimiter::new("#\"", "\"#", None),
        Delimiter::quote("\""),
    ])
}

fn numbers() -> NumberGrammar {
    NumberGrammar::new(
        &['+', '-'],
        [
            NumericLiteral::binary(),
            NumericLiteral::octal(),
            NumericLiteral::hex_float(),
            NumericLiteral::decimal(),
        ],
    )
}

/// Swift. Custom operators are matched as runs of operator symbols, and block
/// comments nest.
pub fn swift(service: ServiceHandle) -> LanguageConfiguration {
    finish(
        LanguageConfiguration::builder("Swift")
            .square_brackets(true)
            .curly_brackets(true)
            .strings(strings())
            .numbers(numbers())
            .line_comment("//")
            .block_comment(BlockComment::nested("/*", "*/"))
            .identifiers(IdentifierGrammar::UNICODE)
            .operators(OperatorGrammar::new(OPERATOR_SYMBOLS))
            .reserved_identifiers(KEYWORDS)
            .reserved_operators(OPERATORS)
            .language_service(service),
    )
}
