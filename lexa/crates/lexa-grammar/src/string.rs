//! String and character literal grammars.
//!
//! A [`StringGrammar`] is an ordered list of delimiter alternatives, optionally
//! preceded by literal prefixes (`u8`, `rb`, ...). Once an opening delimiter
//! matches, the literal is committed to that alternative: it is never retried
//! with a shorter delimiter. A triple quote must therefore be listed before the
//! single quote it starts with, or `'''a'b'''` would end at the second quote.
//! [`StringGrammar::validate`] rejects lists that break this rule.

use crate::cursor::Cursor;
use crate::error::{GrammarError, GrammarResult};
use crate::fragment::{quoted_body, Escape, QuotedBody};
use crate::probe::{Match, Probe};

/// One way of quoting a literal: an opening delimiter and a body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Delimiter {
    /// Opening delimiter.
    pub open: &'static str,
    /// Body scanner, which also owns the closing delimiter.
    pub body: QuotedBody,
}

impl Delimiter {
    /// A delimiter with distinct open and close sequences.
    pub const fn new(open: &'static str, close: &'static str, escape: Option<Escape>) -> Self {
        Self {
            open,
            body: quoted_body(close, escape),
        }
    }

    /// A single-line literal quoted by `quote` on both sides with `\` escapes.
    pub const fn quote(quote: &'static str) -> Self {
        Self::new(quote, quote, Some(Escape::BACKSLASH))
    }

    /// A multi-line literal quoted by `quote` on both sides with `\` escapes.
    pub const fn block(quote: &'static str) -> Self {
        Self::quote(quote).multiline()
    }

    /// Allows the literal to span lines.
    pub const fn multiline(mut self) -> Self {
        self.body = self.body.multiline();
        self
    }

    /// The closing delimiter.
    pub const fn close(&self) -> &'static str {
        self.body.close
    }

    /// Scans open delimiter and body. `None` if the opening does not match;
    /// otherwise whether the literal was closed.
    fn scan(&self, cursor: &mut Cursor<'_>) -> Option<bool> {
        if !cursor.eat_str(self.open) {
            return None;
        }
        Some(self.body.scan(cursor))
    }
}

/// An ordered set of quoting alternatives for one literal category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringGrammar {
    prefixes: Vec<&'static str>,
    alternatives: Vec<Delimiter>,
}

impl StringGrammar {
    /// Builds a grammar trying `alternatives` in the given order.
    pub fn new(alternatives: impl IntoIterator<Item = Delimiter>) -> Self {
        Self {
            prefixes: Vec::new(),
            alternatives: alternatives.into_iter().collect(),
        }
    }

    /// Adds literal prefixes that may precede any delimiter, longest first.
    pub fn with_prefixes(mut self, prefixes: &[&'static str]) -> Self {
        self.prefixes.extend_from_slice(prefixes);
        self
    }

    /// The delimiter alternatives in the order they are tried.
    pub fn alternatives(&self) -> &[Delimiter] {
        &self.alternatives
    }

    /// The literal prefixes in the order they are tried.
    pub fn prefixes(&self) -> &[&'static str] {
        &self.prefixes
    }

    /// Checks that delimiters and prefixes are non-empty and longest-first.
    pub fn validate(&self) -> GrammarResult<()> {
        for delimiter in &self.alternatives {
            if delimiter.open.is_empty() {
                return Err(GrammarError::EmptyDelimiter {
                    what: "opening delimiter",
                });
            }
            if delimiter.close().is_empty() {
                return Err(GrammarError::EmptyDelimiter {
                    what: "closing delimiter",
                });
            }
        }
        if self.prefixes.iter().any(|p| p.is_empty()) {
            return Err(GrammarError::EmptyDelimiter {
                what: "literal prefix",
            });
        }

        let opens: Vec<&'static str> = self.alternatives.iter().map(|d| d.open).collect();
        if let Some((earlier, later)) = first_shadowed(&opens) {
            return Err(GrammarError::ShadowedDelimiter { earlier, later });
        }
        if let Some((earlier, later)) = first_shadowed(&self.prefixes) {
            return Err(GrammarError::ShadowedPrefix { earlier, later });
        }
        Ok(())
    }

    fn scan_delimiters(&self, cursor: &mut Cursor<'_>) -> Option<bool> {
        self.alternatives.iter().find_map(|delimiter| delimiter.scan(cursor))
    }
}

/// Finds the first pair `(earlier, later)` where `earlier` is a prefix of
/// `later` and so would always be committed to first.
fn first_shadowed(items: &[&'static str]) -> Option<(&'static str, &'static str)> {
    items.iter().enumerate().find_map(|(i, earlier)| {
        items[i + 1..]
            .iter()
            .find(|later| later.starts_with(earlier))
            .map(|later| (*earlier, *later))
    })
}

impl Probe for StringGrammar {
    fn probe(&self, text: &str, at: usize) -> Option<Match> {
        let mut cursor = Cursor::at(text, at);
        let start = cursor.snapshot();

        for prefix in &self.prefixes {
            if cursor.eat_str(prefix) {
                if let Some(closed) = self.scan_delimiters(&mut cursor) {
                    return Some(finish(at, cursor.position(), closed));
                }
            }
            cursor.restore(start);
        }

        self.scan_delimiters(&mut cursor)
            .map(|closed| finish(at, cursor.position(), closed))
    }
}

fn finish(start: usize, end: usize, closed: bool) -> Match {
    if closed {
        Match::new(start, end)
    } else {
        Match::unterminated(start, end)
    }
}
