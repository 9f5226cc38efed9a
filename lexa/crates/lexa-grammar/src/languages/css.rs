use crate::config::LanguageConfiguration;
use crate::identifier::{CharSet, IdentifierGrammar, Letters};
use crate::number::{Fraction, NumberGrammar, NumericLiteral};
use crate::service::ServiceHandle;
use crate::string::StringGrammar;

use super::{finish, C_BLOCK_COMMENT, PLAIN_QUOTES};

/// `-?[a-zA-Z_][a-zA-Z0-9_-]*`, covering vendor prefixes like `-webkit-box`.
const IDENTIFIER: IdentifierGrammar = IdentifierGrammar::new(
    CharSet::letters(Letters::Ascii, &['_']),
    CharSet::alphanumeric(Letters::Ascii, &['_', '-']),
)
.with_lead('-');

fn numbers() -> NumberGrammar {
    // Units are left to the identifier grammar: `12px` is `12` then `px`.
    NumberGrammar::new(
        &['-'],
        [NumericLiteral::decimal()
            .separator(None)
            .fraction(Fraction::TrailingOrLeading)
            .exponent(None)],
    )
}

pub fn css(service: ServiceHandle) -> LanguageConfiguration {
    finish(
        LanguageConfiguration::builder("CSS")
            .square_brackets(true)
            .curly_brackets(true)
            .strings(StringGrammar::new(PLAIN_QUOTES))
            .numbers(numbers())
            .block_comment(C_BLOCK_COMMENT)
            .identifiers(IDENTIFIER)
            .language_service(service),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::Probe;

    #[test]
    fn test_css_numbers() {
        let config = css(None);
        let g = config.number_grammar();
        assert!(g.accepts(".45"));
        assert!(g.accepts("-1.5"));
        assert!(!g.accepts("1_000"));
        assert_eq!(g.probe("12px", 0).map(|m| m.end), Some(2));
    }

    #[test]
    fn test_css_identifiers() {
        let config = css(None);
        let g = config.identifier_grammar().unwrap();
        assert!(g.accepts("-webkit-box"));
        assert!(g.accepts("font-size"));
        assert!(!g.accepts("1em"));
    }
}
