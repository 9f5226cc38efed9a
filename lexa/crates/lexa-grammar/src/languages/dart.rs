use crate::config::LanguageConfiguration;
use crate::identifier::IdentifierGrammar;
use crate::number::{NumberGrammar, NumericLiteral};
use crate::service::ServiceHandle;
use crate::string::{Delimiter, StringGrammar};

use super::{finish, C_BLOCK_COMMENT};

const KEYWORDS: &[&str] = &[
    "abstract", "as", "assert", "async", "await", "break", "case", "catch", "class", "const",
    "continue", "covariant", "default", "deferred", "do", "dynamic", "else", "enum", "export",
    "extends", "extension", "external", "factory", "false", "final", "finally", "for",
    "function", "get", "hide", "if", "implements", "import", "in", "interface", "is", "late",
    "let", "library", "mixin", "native", "new", "null", "of", "on", "operator", "part",
    "required", "rethrow", "return", "sealed", "set", "show", "static", "super", "switch",
    "sync", "this", "throw", "true", "try", "typedef", "var", "void", "while", "with", "yield",
];

const OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "~/", "%", "++", "--", "==", "!=", "<", "<=", ">", ">=", "&&", "||",
    "!", "?", "??", "??=", "&", "|", "^", "~", "<<", ">>", "+=", "-=", "*=", "/=", "~/=", "%=",
    "&=", "|=", "^=", ">>=", "<<=",
];

fn strings() -> StringGrammar {
    StringGrammar::new([
        Delimiter::block("\"\"\""),
        Delimiter::block("'''"),
        Delimiter::quote("\""),
        Delimiter::quote("'"),
    ])
    .with_prefixes(&["r"])
}

fn numbers() -> NumberGrammar {
    NumberGrammar::new(
        &['-'],
        [
            NumericLiteral::binary(),
            NumericLiteral::hex_float(),
            NumericLiteral::decimal(),
        ],
    )
}

pub fn dart(service: ServiceHandle) -> LanguageConfiguration {
    finish(
        LanguageConfiguration::builder("Dart")
            .square_brackets(true)
            .curly_brackets(true)
            .strings(strings())
            .numbers(numbers())
            .line_comment("//")
            // Dart block comments nest, but highlighting has always ended them
            // at the first `*/`.
            .block_comment(C_BLOCK_COMMENT)
            .identifiers(IdentifierGrammar::ASCII)
            .reserved_identifiers(KEYWORDS)
            .reserved_operators(OPERATORS)
            .language_service(service),
    )
}
