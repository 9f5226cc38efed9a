//! JavaScript and TypeScript share every grammar except their keywords.

use crate::config::{LanguageConfiguration, LanguageConfigurationBuilder};
use crate::identifier::{CharSet, IdentifierGrammar, Letters};
use crate::number::{Fraction, NumberGrammar, NumericLiteral, Suffixes};
use crate::service::ServiceHandle;
use crate::string::{Delimiter, StringGrammar};

use super::{finish, C_BLOCK_COMMENT};

const JS_KEYWORDS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete",
    "do", "else", "export", "extends", "finally", "for", "function", "if", "import", "in",
    "instanceof", "new", "return", "super", "switch", "this", "throw", "try", "typeof", "var",
    "void", "while", "with", "yield",
    // strict mode and future reserved words
    "enum", "implements", "interface", "let", "package", "private", "protected", "public",
    "static", "await",
];

const TS_KEYWORDS: &[&str] = &[
    "abstract", "as", "asserts", "any", "bigint", "boolean", "declare", "from", "global",
    "infer", "is", "keyof", "module", "namespace", "never", "readonly", "require", "number",
    "object", "string", "symbol", "type", "unique", "unknown",
];

const OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "%", "**", "++", "--", "=", "+=", "-=", "*=", "/=", "%=", "**=", "&=",
    "|=", "^=", ">>=", ">>>=", "<<=", "==", "!=", "===", "!==", ">", "<", ">=", "<=", "&&",
    "||", "!", "??", "&", "|", "^", "~", ">>", ">>>", "<<", "=>",
];

const BIGINT: Suffixes = Suffixes::integer_only(&['n']);

const IDENTIFIER: IdentifierGrammar = IdentifierGrammar::new(
    CharSet::letters(Letters::Unicode, &['_', '$']),
    CharSet::alphanumeric(Letters::Unicode, &['_', '$']),
);

fn strings() -> StringGrammar {
    StringGrammar::new([
        Delimiter::quote("\""),
        Delimiter::quote("'"),
        // Template literals; `${...}` substitutions stay inside the string.
        Delimiter::block("`"),
    ])
}

fn numbers() -> NumberGrammar {
    NumberGrammar::new(
        &['+', '-'],
        [
            NumericLiteral::binary().suffixes(BIGINT),
            NumericLiteral::octal().suffixes(BIGINT),
            NumericLiteral::hex().suffixes(BIGINT),
            NumericLiteral::decimal()
                .fraction(Fraction::TrailingOrLeading)
                .suffixes(BIGINT),
        ],
    )
}

fn ecmascript(name: &'static str, service: ServiceHandle) -> LanguageConfigurationBuilder {
    LanguageConfiguration::builder(name)
        .square_brackets(true)
        .curly_brackets(true)
        .strings(strings())
        .numbers(numbers())
        .line_comment("//")
        .block_comment(C_BLOCK_COMMENT)
        .identifiers(IDENTIFIER)
        .reserved_identifiers(JS_KEYWORDS)
        .reserved_operators(OPERATORS)
        .language_service(service)
}

pub fn javascript(service: ServiceHandle) -> LanguageConfiguration {
    finish(ecmascript("JavaScript", service))
}

/// TypeScript: JavaScript plus the type-level keywords.
pub fn typescript(service: ServiceHandle) -> LanguageConfiguration {
    finish(ecmascript("TypeScript", service).reserved_identifiers(TS_KEYWORDS))
}
