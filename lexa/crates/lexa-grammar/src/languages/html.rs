use crate::comment::BlockComment;
use crate::config::LanguageConfiguration;
use crate::identifier::{CharSet, IdentifierGrammar, Letters};
use crate::number::NumberGrammar;
use crate::service::ServiceHandle;
use crate::string::StringGrammar;

use super::{finish, PLAIN_QUOTES};

/// Tag and attribute names, including namespaced (`xlink:href`) and custom
/// element (`my-widget`) forms.
const NAME: IdentifierGrammar = IdentifierGrammar::new(
    CharSet::letters(Letters::Ascii, &['-', '_', ':']),
    CharSet::alphanumeric(Letters::Ascii, &['_', '-', ':', '.']),
);

/// HTML markup. Only attribute values are strings; there are no numbers and no
/// reserved words.
pub fn html(service: ServiceHandle) -> LanguageConfiguration {
    finish(
        LanguageConfiguration::builder("HTML")
            .strings(StringGrammar::new(PLAIN_QUOTES))
            .numbers(NumberGrammar::none())
            .block_comment(BlockComment::new("<!--", "-->"))
            .identifiers(NAME)
            .language_service(service),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::{Match, Probe};

    #[test]
    fn test_html_has_no_brackets_or_numbers() {
        let config = html(None);
        assert!(!config.supports_square_brackets());
        assert!(!config.supports_curly_brackets());
        assert!(config.number_grammar().is_empty());
        assert!(config.reserved_identifiers().is_empty());
        assert_eq!(config.single_line_comment(), None);
    }

    #[test]
    fn test_html_comment_and_names() {
        let config = html(None);
        let text = "<!-- a <b> -->";
        assert_eq!(
            config.comment_grammar().probe(text, 0),
            Some(Match::new(0, text.len()))
        );
        assert!(config.identifier_grammar().unwrap().accepts("xlink:href"));
        assert!(config.identifier_grammar().unwrap().accepts("data-id"));
    }
}
