use crate::config::LanguageConfiguration;
use crate::identifier::IdentifierGrammar;
use crate::number::{NumberGrammar, NumericLiteral, Suffixes};
use crate::service::ServiceHandle;
use crate::string::{Delimiter, StringGrammar};

use super::{finish, C_BLOCK_COMMENT};

const KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface",
    "long", "native", "new", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "try", "void", "volatile", "while",
];

const OPERATORS: &[&str] = &[
    "=", "==", "===", "!", "!=", "<", "<=", ">", ">=", "++", "--", "+", "-", "*", "/", "%",
    "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "~", ">>", ">>>", "<<", ">>=", ">>>=",
    "<<=", "&", "|", "^", "&&", "||", "??", "?", ":", "->", ".", "::", "=>",
];

/// `L` marks a long; `F`/`D` make any decimal a float or double.
const DECIMAL_SUFFIXES: Suffixes = Suffixes {
    integer: &['l', 'L', 'f', 'F', 'd', 'D'],
    float: &['f', 'F', 'd', 'D'],
    repeat: false,
};

fn numbers() -> NumberGrammar {
    NumberGrammar::new(
        &['-'],
        [
            NumericLiteral::binary().suffixes(Suffixes::integer_only(&['l', 'L'])),
            NumericLiteral::hex_float().suffixes(DECIMAL_SUFFIXES),
            NumericLiteral::decimal().suffixes(DECIMAL_SUFFIXES),
        ],
    )
}

pub fn java(service: ServiceHandle) -> LanguageConfiguration {
    finish(
        LanguageConfiguration::builder("Java")
            .square_brackets(true)
            .curly_brackets(true)
            .strings(StringGrammar::new([Delimiter::quote("\"")]))
            .characters(StringGrammar::new([Delimiter::quote("'")]))
            .numbers(numbers())
            .line_comment("//")
            .block_comment(C_BLOCK_COMMENT)
            .identifiers(IdentifierGrammar::ASCII)
            .reserved_identifiers(KEYWORDS)
            .reserved_operators(OPERATORS)
            .language_service(service),
    )
}
