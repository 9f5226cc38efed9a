use crate::config::LanguageConfiguration;
use crate::fragment::{exponent_part, Escape};
use crate::number::{LeadingZero, NumberGrammar, NumericLiteral};
use crate::service::ServiceHandle;
use crate::string::{Delimiter, StringGrammar};

use super::finish;

/// `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`
fn numbers() -> NumberGrammar {
    NumberGrammar::new(
        &['-'],
        [NumericLiteral::decimal()
            .separator(None)
            .leading_zero(LeadingZero::Forbidden)
            .exponent(Some(exponent_part(&['e', 'E'], true, None)))],
    )
}

/// JSON has no identifiers and no comments. `true`, `false` and `null` are
/// reserved words recognised as plain ASCII words.
pub fn json(service: ServiceHandle) -> LanguageConfiguration {
    finish(
        LanguageConfiguration::builder("JSON")
            .square_brackets(true)
            .curly_brackets(true)
            .strings(StringGrammar::new([Delimiter::new(
                "\"",
                "\"",
                Some(Escape::BACKSLASH_PAIRED),
            )]))
            .numbers(numbers())
            .reserved_identifiers(&["true", "false", "null"])
            .language_service(service),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::{Match, Probe};

    #[test]
    fn test_json_zero_is_complete() {
        let config = json(None);
        let g = config.number_grammar();
        assert_eq!(g.probe("0123", 0), Some(Match::new(0, 1)));
        assert_eq!(g.probe("0123", 1), Some(Match::new(1, 4)));
        assert!(g.accepts("-0.5e+10"));
        assert!(!g.accepts("1_000"));
        assert!(!g.accepts("+1"));
    }

    #[test]
    fn test_json_escaped_backslash_closes() {
        let config = json(None);
        let g = config.string_grammar();
        assert!(g.accepts("\"a\\\\\""));
        assert!(g.accepts("\"a\\\"b\""));
    }

    #[test]
    fn test_json_has_no_identifiers() {
        let config = json(None);
        assert!(config.identifier_grammar().is_none());
        assert!(config.comment_grammar().is_empty());
        assert_eq!(config.probe_keyword("null,", 0), Some(Match::new(0, 4)));
        assert_eq!(config.probe_keyword("nullish", 0), None);
    }
}
