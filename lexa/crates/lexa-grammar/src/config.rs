//! Language configurations.
//!
//! A [`LanguageConfiguration`] bundles everything a tokenizer needs to know
//! about one language's lexical surface. It is built once through
//! [`LanguageConfigurationBuilder`], which checks the grammar contracts, and is
//! immutable afterwards.
//!
//! # Example
//!
//! ```
//! use lexa_grammar::config::LanguageConfiguration;
//! use lexa_grammar::identifier::IdentifierGrammar;
//! use lexa_grammar::string::{Delimiter, StringGrammar};
//!
//! let config = LanguageConfiguration::builder("Tiny")
//!     .strings(StringGrammar::new([Delimiter::quote("\"")]))
//!     .identifiers(IdentifierGrammar::ASCII)
//!     .reserved_identifiers(&["let", "in"])
//!     .reserved_operators(&["=", "+"])
//!     .build()
//!     .unwrap();
//!
//! assert!(config.is_reserved_identifier("let"));
//! assert!(!config.supports_square_brackets());
//! ```

use std::sync::Arc;

use rustc_hash::FxHashSet;
use tracing::trace;

use crate::comment::{BlockComment, CommentGrammar};
use crate::error::{GrammarError, GrammarResult};
use crate::identifier::IdentifierGrammar;
use crate::number::NumberGrammar;
use crate::operator::OperatorGrammar;
use crate::probe::{Match, Probe};
use crate::service::{same_service, LanguageService, ServiceHandle};
use crate::string::StringGrammar;

/// The immutable lexical description of one language.
#[derive(Clone, Debug)]
pub struct LanguageConfiguration {
    name: &'static str,
    supports_square_brackets: bool,
    supports_curly_brackets: bool,
    indentation_sensitive_scoping: bool,
    string_grammar: StringGrammar,
    character_grammar: Option<StringGrammar>,
    number_grammar: NumberGrammar,
    comments: CommentGrammar,
    identifier_grammar: Option<IdentifierGrammar>,
    operator_grammar: Option<OperatorGrammar>,
    reserved_identifiers: FxHashSet<&'static str>,
    reserved_operators: FxHashSet<&'static str>,
    longest_operator: usize,
    language_service: ServiceHandle,
}

static_assertions::assert_impl_all!(LanguageConfiguration: Send, Sync);

impl LanguageConfiguration {
    /// Starts building a configuration for the language called `name`.
    pub fn builder(name: &'static str) -> LanguageConfigurationBuilder {
        LanguageConfigurationBuilder::new(name)
    }

    /// Display name of the language.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether `[` and `]` are structural brackets.
    pub fn supports_square_brackets(&self) -> bool {
        self.supports_square_brackets
    }

    /// Whether `{` and `}` are structural brackets.
    pub fn supports_curly_brackets(&self) -> bool {
        self.supports_curly_brackets
    }

    /// Whether leading whitespace determines block structure.
    pub fn indentation_sensitive_scoping(&self) -> bool {
        self.indentation_sensitive_scoping
    }

    /// Ordered string delimiters and literal prefixes.
    pub fn string_grammar(&self) -> &StringGrammar {
        &self.string_grammar
    }

    /// The character literal grammar, for languages that distinguish one.
    pub fn character_grammar(&self) -> Option<&StringGrammar> {
        self.character_grammar.as_ref()
    }

    /// Numeric literal forms. Empty for languages without numbers.
    pub fn number_grammar(&self) -> &NumberGrammar {
        &self.number_grammar
    }

    /// Comment syntax, single-line and block.
    pub fn comment_grammar(&self) -> &CommentGrammar {
        &self.comments
    }

    /// Prefix of a comment that runs to the end of the line.
    pub fn single_line_comment(&self) -> Option<&'static str> {
        self.comments.line()
    }

    /// Block comment delimiters and whether they nest.
    pub fn block_comment(&self) -> Option<BlockComment> {
        self.comments.block()
    }

    /// The identifier grammar. `None` for languages without identifiers.
    pub fn identifier_grammar(&self) -> Option<&IdentifierGrammar> {
        self.identifier_grammar.as_ref()
    }

    /// Symbol-run operator grammar, for languages with user-defined operators.
    pub fn operator_grammar(&self) -> Option<&OperatorGrammar> {
        self.operator_grammar.as_ref()
    }

    /// Keywords.
    pub fn reserved_identifiers(&self) -> &FxHashSet<&'static str> {
        &self.reserved_identifiers
    }

    /// Built-in operator spellings.
    pub fn reserved_operators(&self) -> &FxHashSet<&'static str> {
        &self.reserved_operators
    }

    /// The attached semantic service, if any.
    pub fn language_service(&self) -> Option<&Arc<dyn LanguageService>> {
        self.language_service.as_ref()
    }

    /// True if `word` is a keyword.
    pub fn is_reserved_identifier(&self, word: &str) -> bool {
        self.reserved_identifiers.contains(word)
    }

    /// True if `op` is a built-in operator spelling.
    pub fn is_reserved_operator(&self, op: &str) -> bool {
        self.reserved_operators.contains(op)
    }

    /// The grammar reserved words are recognised with: the identifier grammar,
    /// or plain ASCII words when the language has none.
    pub fn keyword_grammar(&self) -> IdentifierGrammar {
        self.identifier_grammar.unwrap_or(IdentifierGrammar::ASCII)
    }

    /// Probes for a reserved identifier at `at`. The whole word must be
    /// reserved, so `classes` is not the keyword `class`.
    pub fn probe_keyword(&self, text: &str, at: usize) -> Option<Match> {
        self.keyword_grammar()
            .probe(text, at)
            .filter(|m| self.is_reserved_identifier(m.text(text)))
    }

    /// Probes for the longest reserved operator starting at `at`.
    pub fn probe_reserved_operator(&self, text: &str, at: usize) -> Option<Match> {
        let rest = text.get(at..)?;
        (1..=self.longest_operator.min(rest.len()))
            .rev()
            .filter_map(|len| rest.get(..len))
            .find(|candidate| self.is_reserved_operator(candidate))
            .map(|op| Match::new(at, at + op.len()))
    }

    /// Returns a copy of this configuration carrying `service`.
    ///
    /// Registry values are shared and never mutated; attaching a service
    /// always derives a new value.
    pub fn with_language_service(&self, service: Arc<dyn LanguageService>) -> Self {
        Self {
            language_service: Some(service),
            ..self.clone()
        }
    }
}

impl PartialEq for LanguageConfiguration {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.supports_square_brackets == other.supports_square_brackets
            && self.supports_curly_brackets == other.supports_curly_brackets
            && self.indentation_sensitive_scoping == other.indentation_sensitive_scoping
            && self.string_grammar == other.string_grammar
            && self.character_grammar == other.character_grammar
            && self.number_grammar == other.number_grammar
            && self.comments == other.comments
            && self.identifier_grammar == other.identifier_grammar
            && self.operator_grammar == other.operator_grammar
            && self.reserved_identifiers == other.reserved_identifiers
            && self.reserved_operators == other.reserved_operators
            && same_service(&self.language_service, &other.language_service)
    }
}

/// Builder for [`LanguageConfiguration`].
///
/// Everything is optional except the name. Unset grammars never match; unset
/// flags are false.
#[derive(Debug)]
pub struct LanguageConfigurationBuilder {
    name: &'static str,
    supports_square_brackets: bool,
    supports_curly_brackets: bool,
    indentation_sensitive_scoping: bool,
    string_grammar: StringGrammar,
    character_grammar: Option<StringGrammar>,
    number_grammar: NumberGrammar,
    line_comment: Option<&'static str>,
    block_comment: Option<BlockComment>,
    identifier_grammar: Option<IdentifierGrammar>,
    operator_grammar: Option<OperatorGrammar>,
    reserved_identifiers: Vec<&'static str>,
    reserved_operators: Vec<&'static str>,
    language_service: ServiceHandle,
}

impl LanguageConfigurationBuilder {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            supports_square_brackets: false,
            supports_curly_brackets: false,
            indentation_sensitive_scoping: false,
            string_grammar: StringGrammar::new([]),
            character_grammar: None,
            number_grammar: NumberGrammar::none(),
            line_comment: None,
            block_comment: None,
            identifier_grammar: None,
            operator_grammar: None,
            reserved_identifiers: Vec::new(),
            reserved_operators: Vec::new(),
            language_service: None,
        }
    }

    /// Name of the language being built.
    pub fn language_name(&self) -> &'static str {
        self.name
    }

    pub fn square_brackets(mut self, supported: bool) -> Self {
        self.supports_square_brackets = supported;
        self
    }

    pub fn curly_brackets(mut self, supported: bool) -> Self {
        self.supports_curly_brackets = supported;
        self
    }

    pub fn indentation_sensitive(mut self, sensitive: bool) -> Self {
        self.indentation_sensitive_scoping = sensitive;
        self
    }

    pub fn strings(mut self, grammar: StringGrammar) -> Self {
        self.string_grammar = grammar;
        self
    }

    pub fn characters(mut self, grammar: StringGrammar) -> Self {
        self.character_grammar = Some(grammar);
        self
    }

    pub fn numbers(mut self, grammar: NumberGrammar) -> Self {
        self.number_grammar = grammar;
        self
    }

    pub fn line_comment(mut self, prefix: &'static str) -> Self {
        self.line_comment = Some(prefix);
        self
    }

    pub fn block_comment(mut self, block: BlockComment) -> Self {
        self.block_comment = Some(block);
        self
    }

    pub fn identifiers(mut self, grammar: IdentifierGrammar) -> Self {
        self.identifier_grammar = Some(grammar);
        self
    }

    pub fn operators(mut self, grammar: OperatorGrammar) -> Self {
        self.operator_grammar = Some(grammar);
        self
    }

    /// Adds reserved identifiers. Duplicates are collapsed.
    pub fn reserved_identifiers(mut self, words: &[&'static str]) -> Self {
        self.reserved_identifiers.extend_from_slice(words);
        self
    }

    /// Adds reserved operators. Duplicates are collapsed.
    pub fn reserved_operators(mut self, ops: &[&'static str]) -> Self {
        self.reserved_operators.extend_from_slice(ops);
        self
    }

    pub fn language_service(mut self, service: ServiceHandle) -> Self {
        self.language_service = service;
        self
    }

    /// Validates the grammars and reserved sets and builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first contract violation found: a shadowed or empty
    /// delimiter, a misordered numeric form, an empty reserved entry, a
    /// spelling in both reserved sets, or a reserved identifier the keyword
    /// grammar does not accept in full.
    pub fn build(self) -> GrammarResult<LanguageConfiguration> {
        let name = self.name;
        let comments = CommentGrammar::new(self.line_comment, self.block_comment);

        self.string_grammar.validate()?;
        if let Some(characters) = &self.character_grammar {
            characters.validate()?;
        }
        self.number_grammar.validate()?;
        comments.validate()?;

        let reserved_identifiers = collect_reserved(name, "identifier", &self.reserved_identifiers)?;
        let reserved_operators = collect_reserved(name, "operator", &self.reserved_operators)?;

        if let Some(spelling) = self
            .reserved_identifiers
            .iter()
            .copied()
            .find(|word| reserved_operators.contains(word))
        {
            return Err(GrammarError::ReservedOverlap {
                language: name,
                spelling,
            });
        }

        let keywords = self.identifier_grammar.unwrap_or(IdentifierGrammar::ASCII);
        if let Some(spelling) = self
            .reserved_identifiers
            .iter()
            .copied()
            .find(|word| !keywords.accepts(word))
        {
            return Err(GrammarError::ReservedNotIdentifier {
                language: name,
                spelling,
            });
        }

        let longest_operator = reserved_operators.iter().map(|op| op.len()).max().unwrap_or(0);

        Ok(LanguageConfiguration {
            name,
            supports_square_brackets: self.supports_square_brackets,
            supports_curly_brackets: self.supports_curly_brackets,
            indentation_sensitive_scoping: self.indentation_sensitive_scoping,
            string_grammar: self.string_grammar,
            character_grammar: self.character_grammar,
            number_grammar: self.number_grammar,
            comments,
            identifier_grammar: self.identifier_grammar,
            operator_grammar: self.operator_grammar,
            reserved_identifiers,
            reserved_operators,
            longest_operator,
            language_service: self.language_service,
        })
    }
}

fn collect_reserved(
    language: &'static str,
    kind: &str,
    spellings: &[&'static str],
) -> GrammarResult<FxHashSet<&'static str>> {
    let mut set = FxHashSet::default();
    for &spelling in spellings {
        if spelling.is_empty() {
            return Err(GrammarError::EmptyReserved { language });
        }
        if !set.insert(spelling) {
            trace!(language, kind, spelling, "duplicate reserved entry collapsed");
        }
    }
    Ok(set)
}
