//! Character cursor used by every grammar probe.
//!
//! A probe is asked "does a literal start at byte offset `at`?", so the cursor
//! starts at an arbitrary offset of the buffer and reports absolute byte
//! positions. Probes backtrack by taking a [`CursorSnapshot`] before an
//! optional part and restoring it when the part does not match.

/// A cursor over a source buffer, positioned at a byte offset.
///
/// # Example
///
/// ```
/// use lexa_grammar::cursor::Cursor;
///
/// let mut cursor = Cursor::at("let x = 42;", 4);
/// assert_eq!(cursor.current(), Some('x'));
/// cursor.advance();
/// assert_eq!(cursor.position(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The whole buffer being probed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self::at(source, 0)
    }

    /// Creates a cursor at byte offset `position`.
    ///
    /// An offset past the end, or one that does not fall on a character
    /// boundary, leaves the cursor at the end of the buffer so that every probe
    /// simply fails to match.
    pub fn at(source: &'a str, position: usize) -> Self {
        let position = if source.is_char_boundary(position) {
            position
        } else {
            source.len()
        };
        Self { source, position }
    }

    /// Returns the character under the cursor, or `None` at the end.
    #[inline]
    pub fn current(&self) -> Option<char> {
        let rest = self.remaining();
        // Fast path for ASCII (most common case)
        match rest.as_bytes().first() {
            None => None,
            Some(&b) if b < 128 => Some(b as char),
            Some(_) => rest.chars().next(),
        }
    }

    /// Returns the character `offset` characters ahead (0 = current).
    #[inline]
    pub fn peek(&self, offset: usize) -> Option<char> {
        if offset == 0 {
            return self.current();
        }
        self.remaining().chars().nth(offset)
    }

    /// Advances past the current character. Does nothing at the end.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.current() {
            self.position += c.len_utf8();
        }
    }

    /// Advances by `count` characters.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Consumes `expected` if it is the current character.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.current() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the current character if it is one of `set`.
    pub fn eat_any(&mut self, set: &[char]) -> bool {
        self.eat_if(|c| set.contains(&c))
    }

    /// Consumes the current character if it satisfies `predicate`.
    pub fn eat_if(&mut self, predicate: impl Fn(char) -> bool) -> bool {
        match self.current() {
            Some(c) if predicate(c) => {
                self.advance();
                true
            },
            _ => false,
        }
    }

    /// Consumes `expected` if the remaining text starts with it.
    pub fn eat_str(&mut self, expected: &str) -> bool {
        if self.starts_with(expected) {
            self.position += expected.len();
            true
        } else {
            false
        }
    }

    /// Returns true if the remaining text starts with `s`.
    #[inline]
    pub fn starts_with(&self, s: &str) -> bool {
        self.remaining().starts_with(s)
    }

    /// Returns the current byte position.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the unconsumed rest of the buffer.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the text between `start` and the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Saves the current position.
    #[inline]
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
        }
    }

    /// Rewinds to a previously saved position.
    #[inline]
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
    }
}

/// A saved cursor position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    /// Byte position in source.
    pub position: usize,
}
