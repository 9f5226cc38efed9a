//! The probe contract shared by every grammar component.
//!
//! A consumer asks each category "does a literal of this kind start exactly
//! here, and how far does it extend?". Probes are pure: the same text and
//! offset always give the same answer.

use std::ops::Range;

/// The maximal extent of one literal.
///
/// `start..end` are byte offsets into the probed buffer. A match is never
/// empty. `closed` is false when a string, character or block comment ran out
/// of input (or, for single-line forms, reached the end of the line) before
/// its closing delimiter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Match {
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
    /// Whether the literal was properly terminated.
    pub closed: bool,
}

impl Match {
    /// A terminated match.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            closed: true,
        }
    }

    /// A match whose closing delimiter never appeared.
    #[inline]
    pub const fn unterminated(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            closed: false,
        }
    }

    /// Length in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false for matches produced by a probe.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The byte range of the match.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The matched text.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.range()]
    }
}

/// A grammar component that can be probed at a buffer position.
pub trait Probe {
    /// Returns the maximal literal starting at byte offset `at`, if any.
    fn probe(&self, text: &str, at: usize) -> Option<Match>;

    /// Returns true if the whole of `text` is exactly one literal.
    fn accepts(&self, text: &str) -> bool {
        self.probe(text, 0)
            .is_some_and(|m| m.closed && m.end == text.len())
    }
}

impl<P: Probe + ?Sized> Probe for &P {
    fn probe(&self, text: &str, at: usize) -> Option<Match> {
        (**self).probe(text, at)
    }
}
