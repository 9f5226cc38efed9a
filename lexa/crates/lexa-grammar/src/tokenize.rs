//! Reference tokenizer.
//!
//! A straightforward, non-incremental consumer of a [`LanguageConfiguration`].
//! At every position it asks each category in a fixed precedence order and
//! takes the first match:
//!
//! 1. comment
//! 2. character
//! 3. string
//! 4. number
//! 5. identifier (a reserved spelling becomes a keyword)
//! 6. operator (explicit operator grammar, else the longest reserved operator)
//! 7. bracket (`()` always; `[]` and `{}` only when the language declares them)
//! 8. plain text, one character at a time
//!
//! Whitespace separates tokens and is never part of one.

use std::ops::Range;

use crate::config::LanguageConfiguration;
use crate::probe::{Match, Probe};

/// Category of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Comment,
    Character,
    String,
    Number,
    Keyword,
    Identifier,
    Operator,
    Bracket,
    Plain,
}

impl TokenKind {
    /// Lower-case name, as shown by tools.
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Comment => "comment",
            TokenKind::Character => "character",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::Operator => "operator",
            TokenKind::Bracket => "bracket",
            TokenKind::Plain => "plain",
        }
    }
}

/// A classified span of source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
    /// False for a string, character or block comment that never closed.
    pub closed: bool,
}

impl Token {
    fn from_match(kind: TokenKind, m: Match) -> Self {
        Self {
            kind,
            start: m.start,
            end: m.end,
            closed: m.closed,
        }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        &source[self.range()]
    }
}

/// Iterator over the tokens of one buffer.
#[derive(Clone, Debug)]
pub struct Tokenizer<'c, 's> {
    config: &'c LanguageConfiguration,
    source: &'s str,
    position: usize,
}

impl<'c, 's> Tokenizer<'c, 's> {
    pub fn new(config: &'c LanguageConfiguration, source: &'s str) -> Self {
        Self {
            config,
            source,
            position: 0,
        }
    }

    /// Byte offset of the next unread character.
    pub fn position(&self) -> usize {
        self.position
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.source[self.position..];
        let trimmed = rest.trim_start();
        self.position += rest.len() - trimmed.len();
    }

    fn classify(&self, at: usize) -> Token {
        let text = self.source;
        let config = self.config;
        let advancing = |m: &Match| m.end > at;

        if let Some(m) = config.comment_grammar().probe(text, at).filter(advancing) {
            return Token::from_match(TokenKind::Comment, m);
        }
        if let Some(m) = config
            .character_grammar()
            .and_then(|g| g.probe(text, at))
            .filter(advancing)
        {
            return Token::from_match(TokenKind::Character, m);
        }
        if let Some(m) = config.string_grammar().probe(text, at).filter(advancing) {
            return Token::from_match(TokenKind::String, m);
        }
        if let Some(m) = config.number_grammar().probe(text, at).filter(advancing) {
            return Token::from_match(TokenKind::Number, m);
        }
        if let Some(token) = self.word(at) {
            return token;
        }

        let operator = match config.operator_grammar() {
            Some(grammar) => grammar.probe(text, at),
            None => config.probe_reserved_operator(text, at),
        };
        if let Some(m) = operator.filter(advancing) {
            return Token::from_match(TokenKind::Operator, m);
        }

        let c = text[at..].chars().next().unwrap_or_default();
        let single = Match::new(at, at + c.len_utf8());
        if self.is_bracket(c) {
            Token::from_match(TokenKind::Bracket, single)
        } else {
            Token::from_match(TokenKind::Plain, single)
        }
    }

    /// Identifiers and keywords. Without an identifier grammar, words are only
    /// recognised to find reserved spellings; anything else is plain text.
    fn word(&self, at: usize) -> Option<Token> {
        let text = self.source;
        let m = match self.config.identifier_grammar() {
            Some(grammar) => grammar.probe(text, at)?,
            None => self.config.keyword_grammar().probe(text, at)?,
        };
        if m.end <= at {
            return None;
        }
        let kind = if self.config.is_reserved_identifier(m.text(text)) {
            TokenKind::Keyword
        } else if self.config.identifier_grammar().is_some() {
            TokenKind::Identifier
        } else {
            TokenKind::Plain
        };
        Some(Token::from_match(kind, m))
    }

    fn is_bracket(&self, c: char) -> bool {
        match c {
            '(' | ')' => true,
            '[' | ']' => self.config.supports_square_brackets(),
            '{' | '}' => self.config.supports_curly_brackets(),
            _ => false,
        }
    }
}

impl Iterator for Tokenizer<'_, '_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();
        if self.position >= self.source.len() {
            return None;
        }
        let token = self.classify(self.position);
        self.position = token.end;
        Some(token)
    }
}

/// Tokenizes `source` completely.
///
/// ```
/// use lexa_grammar::{tokenize, Language, TokenKind};
///
/// let config = Language::Python.configuration();
/// let kinds: Vec<TokenKind> = tokenize(config, "if x: pass")
///     .into_iter()
///     .map(|t| t.kind)
///     .collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Keyword, TokenKind::Identifier, TokenKind::Plain, TokenKind::Keyword]
/// );
/// ```
pub fn tokenize(config: &LanguageConfiguration, source: &str) -> Vec<Token> {
    Tokenizer::new(config, source).collect()
}
