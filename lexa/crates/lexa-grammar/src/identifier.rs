//! Identifier grammars.
//!
//! An identifier is an optional lead character, one head character and any
//! number of body characters. Reserved words are carved out of this class by
//! the configuration, so every reserved identifier must itself be a
//! well-formed identifier.

use crate::cursor::Cursor;
use crate::probe::{Match, Probe};

/// Which letters a character set admits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Letters {
    /// `a-z` and `A-Z`.
    Ascii,
    /// Any alphabetic Unicode scalar.
    Unicode,
}

/// A set of characters described by class plus extras.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharSet {
    /// Letter class.
    pub letters: Letters,
    /// Whether decimal digits are included (Unicode numerics with
    /// [`Letters::Unicode`]).
    pub digits: bool,
    /// Additional characters such as `_`, `$` or `'`.
    pub extra: &'static [char],
}

impl CharSet {
    /// Letters plus `extra`.
    pub const fn letters(letters: Letters, extra: &'static [char]) -> Self {
        Self {
            letters,
            digits: false,
            extra,
        }
    }

    /// Letters, digits and `extra`.
    pub const fn alphanumeric(letters: Letters, extra: &'static [char]) -> Self {
        Self {
            letters,
            digits: true,
            extra,
        }
    }

    /// Checks membership.
    pub fn contains(&self, c: char) -> bool {
        let letter = match self.letters {
            Letters::Ascii => c.is_ascii_alphabetic(),
            Letters::Unicode => c.is_alphabetic(),
        };
        let digit = self.digits
            && match self.letters {
                Letters::Ascii => c.is_ascii_digit(),
                Letters::Unicode => c.is_numeric(),
            };
        letter || digit || self.extra.contains(&c)
    }
}

/// Grammar of a language's identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdentifierGrammar {
    /// Optional character allowed once before the head (CSS's `-`).
    pub lead: Option<char>,
    /// First character.
    pub head: CharSet,
    /// Every following character.
    pub body: CharSet,
}

impl IdentifierGrammar {
    /// `[A-Za-z_][A-Za-z0-9_]*`.
    pub const ASCII: IdentifierGrammar = IdentifierGrammar::new(
        CharSet::letters(Letters::Ascii, &['_']),
        CharSet::alphanumeric(Letters::Ascii, &['_']),
    );

    /// Unicode letters and `_`, then letters, digits and `_`.
    pub const UNICODE: IdentifierGrammar = IdentifierGrammar::new(
        CharSet::letters(Letters::Unicode, &['_']),
        CharSet::alphanumeric(Letters::Unicode, &['_']),
    );

    /// Builds a grammar from head and body sets.
    pub const fn new(head: CharSet, body: CharSet) -> Self {
        Self {
            lead: None,
            head,
            body,
        }
    }

    /// Allows `lead` once before the head.
    pub const fn with_lead(mut self, lead: char) -> Self {
        self.lead = Some(lead);
        self
    }

    fn scan(&self, cursor: &mut Cursor<'_>) -> bool {
        let start = cursor.snapshot();
        if let Some(lead) = self.lead {
            cursor.eat(lead);
        }
        if !cursor.eat_if(|c| self.head.contains(c)) {
            cursor.restore(start);
            return false;
        }
        while cursor.eat_if(|c| self.body.contains(c)) {}
        true
    }
}

impl Probe for IdentifierGrammar {
    fn probe(&self, text: &str, at: usize) -> Option<Match> {
        let mut cursor = Cursor::at(text, at);
        self.scan(&mut cursor)
            .then(|| Match::new(at, cursor.position()))
    }
}
