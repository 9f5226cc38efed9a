//! Reusable grammar fragments.
//!
//! These are the leaves every language is composed from: digit runs for each
//! base, exponent suffixes and escape-aware quoted bodies. A fragment is a
//! plain value; scanning it against a [`Cursor`] either consumes its maximal
//! extent or leaves the cursor where it was.

use crate::cursor::Cursor;

/// The digit-group separator used by every language that has one.
pub const SEPARATOR: char = '_';

/// Numeric base of a literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Radix {
    /// Digits `0-1`.
    Binary,
    /// Digits `0-7`.
    Octal,
    /// Digits `0-9`.
    Decimal,
    /// Digits `0-9`, `a-f`, `A-F`.
    Hex,
}

impl Radix {
    /// The numeric value of the base.
    pub const fn value(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hex => 16,
        }
    }

    /// Human-readable name, used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Radix::Binary => "binary",
            Radix::Octal => "octal",
            Radix::Decimal => "decimal",
            Radix::Hex => "hexadecimal",
        }
    }

    /// Checks if `c` is a digit of this base.
    ///
    /// ```
    /// use lexa_grammar::fragment::Radix;
    ///
    /// assert!(Radix::Hex.is_digit('f'));
    /// assert!(Radix::Hex.is_digit('F'));
    /// assert!(!Radix::Octal.is_digit('8'));
    /// ```
    #[inline]
    pub fn is_digit(self, c: char) -> bool {
        c.is_digit(self.value())
    }
}

/// One or more digits, optionally broken into groups by a separator.
///
/// Matches `d+ (sep d+)*`. A separator that is not followed by a digit is left
/// unconsumed, so `1_000_` scans as `1_000`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DigitRun {
    /// Alphabet of the run.
    pub radix: Radix,
    /// Group separator, if the language allows one.
    pub separator: Option<char>,
}

/// Builds a digit run over `radix`.
pub const fn digit_run(radix: Radix, separator: Option<char>) -> DigitRun {
    DigitRun { radix, separator }
}

impl DigitRun {
    /// Consumes the run. Returns false, consuming nothing, if no digit is
    /// under the cursor.
    pub fn scan(&self, cursor: &mut Cursor<'_>) -> bool {
        let radix = self.radix;
        if !cursor.eat_if(|c| radix.is_digit(c)) {
            return false;
        }
        loop {
            while cursor.eat_if(|c| radix.is_digit(c)) {}
            match self.separator {
                Some(sep)
                    if cursor.current() == Some(sep)
                        && cursor.peek(1).is_some_and(|c| radix.is_digit(c)) =>
                {
                    cursor.advance();
                },
                _ => return true,
            }
        }
    }
}

/// An exponent suffix: marker, optional sign, decimal digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Exponent {
    /// Characters that introduce the exponent (`e E` or `p P`).
    pub markers: &'static [char],
    /// Whether `+` or `-` may follow the marker.
    pub signed: bool,
    /// The exponent's digits; always decimal.
    pub digits: DigitRun,
}

/// Builds an exponent part introduced by one of `markers`.
pub const fn exponent_part(
    markers: &'static [char],
    allow_sign: bool,
    separator: Option<char>,
) -> Exponent {
    Exponent {
        markers,
        signed: allow_sign,
        digits: digit_run(Radix::Decimal, separator),
    }
}

impl Exponent {
    /// `e`/`E` decimal exponent with sign and `_` separators.
    pub const DECIMAL: Exponent = exponent_part(&['e', 'E'], true, Some(SEPARATOR));

    /// `p`/`P` binary exponent of hex floats.
    pub const BINARY: Exponent = exponent_part(&['p', 'P'], true, Some(SEPARATOR));

    /// Consumes the exponent, or nothing if it is incomplete.
    pub fn scan(&self, cursor: &mut Cursor<'_>) -> bool {
        let snapshot = cursor.snapshot();
        if !cursor.eat_any(self.markers) {
            return false;
        }
        if self.signed {
            cursor.eat_any(&['+', '-']);
        }
        if self.digits.scan(cursor) {
            true
        } else {
            cursor.restore(snapshot);
            false
        }
    }
}

/// How a backslash-style escape character behaves inside a quoted body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Escape {
    /// The escape character, usually `\`.
    pub character: char,
    /// Whether a doubled escape character is one unit, so `"a\\"` closes at
    /// the final quote.
    pub escapes_itself: bool,
}

impl Escape {
    /// `\` escaping the closing quote only.
    pub const BACKSLASH: Escape = Escape {
        character: '\\',
        escapes_itself: false,
    };

    /// `\` escaping the closing quote and itself.
    pub const BACKSLASH_PAIRED: Escape = Escape {
        character: '\\',
        escapes_itself: true,
    };
}

/// The body of a quoted literal up to and including its closing delimiter.
///
/// Scans zero or more of: an escaped close (escape character followed by the
/// first character of `close`), or any character that does not start `close`.
/// An escaped delimiter never ends the body; an unescaped one always does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuotedBody {
    /// Closing delimiter.
    pub close: &'static str,
    /// Escape rule, if the literal has one.
    pub escape: Option<Escape>,
    /// Whether the body may span line breaks.
    pub multiline: bool,
}

/// Builds a single-line body closed by `close`.
pub const fn quoted_body(close: &'static str, escape: Option<Escape>) -> QuotedBody {
    QuotedBody {
        close,
        escape,
        multiline: false,
    }
}

impl QuotedBody {
    /// Allows the body to span lines.
    pub const fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    /// Consumes the body.
    ///
    /// Returns true if the closing delimiter was found and consumed. Otherwise
    /// the cursor stops at the end of the buffer or, for a single-line body,
    /// just before the line break.
    pub fn scan(&self, cursor: &mut Cursor<'_>) -> bool {
        let close_head = self.close.chars().next();
        loop {
            if let Some(escape) = self.escape {
                if cursor.current() == Some(escape.character) {
                    let next = cursor.peek(1);
                    if next.is_some()
                        && (next == close_head
                            || (escape.escapes_itself && next == Some(escape.character)))
                    {
                        cursor.advance_n(2);
                        continue;
                    }
                }
            }
            if cursor.eat_str(self.close) {
                return true;
            }
            match cursor.current() {
                None => return false,
                Some('\n' | '\r') if !self.multiline => return false,
                Some(_) => cursor.advance(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_digits(run: DigitRun, source: &str) -> Option<usize> {
        let mut cursor = Cursor::new(source);
        run.scan(&mut cursor).then(|| cursor.position())
    }

    fn scan_body(body: QuotedBody, source: &str) -> (usize, bool) {
        let mut cursor = Cursor::new(source);
        let closed = body.scan(&mut cursor);
        (cursor.position(), closed)
    }

    #[test]
    fn test_digit_run_with_separators() {
        let run = digit_run(Radix::Decimal, Some(SEPARATOR));
        assert_eq!(scan_digits(run, "1_000 "), Some(5));
        assert_eq!(scan_digits(run, "1__0"), Some(1));
        assert_eq!(scan_digits(run, "12_"), Some(2));
        assert_eq!(scan_digits(run, "_12"), None);
    }

    #[test]
    fn test_digit_run_without_separators() {
        let run = digit_run(Radix::Decimal, None);
        assert_eq!(scan_digits(run, "1_000"), Some(1));
    }

    #[test]
    fn test_digit_run_alphabets() {
        assert_eq!(scan_digits(digit_run(Radix::Binary, None), "1012"), Some(3));
        assert_eq!(scan_digits(digit_run(Radix::Octal, None), "7781"), Some(2));
        assert_eq!(scan_digits(digit_run(Radix::Hex, Some('_')), "AB_cdg"), Some(5));
    }

    #[test]
    fn test_exponent_part() {
        let mut cursor = Cursor::new("e-10;");
        assert!(Exponent::DECIMAL.scan(&mut cursor));
        assert_eq!(cursor.position(), 4);

        let mut cursor = Cursor::new("e+;");
        assert!(!Exponent::DECIMAL.scan(&mut cursor));
        assert_eq!(cursor.position(), 0);

        let mut cursor = Cursor::new("P3");
        assert!(Exponent::BINARY.scan(&mut cursor));
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_unsigned_exponent_rejects_sign() {
        let exponent = exponent_part(&['e'], false, None);
        let mut cursor = Cursor::new("e-1");
        assert!(!exponent.scan(&mut cursor));
    }

    #[test]
    fn test_quoted_body_escaped_close() {
        let body = quoted_body("\"", Some(Escape::BACKSLASH));
        assert_eq!(scan_body(body, "a\\\"b\" tail"), (5, true));
    }

    #[test]
    fn test_quoted_body_triple_close() {
        let body = quoted_body("'''", Some(Escape::BACKSLASH)).multiline();
        assert_eq!(scan_body(body, "a'b'''"), (6, true));
        assert_eq!(scan_body(body, "a\n''b'''"), (8, true));
    }

    #[test]
    fn test_quoted_body_stops_at_line_end() {
        let body = quoted_body("'", None);
        assert_eq!(scan_body(body, "abc\ndef'"), (3, false));
        assert_eq!(scan_body(body, "abc"), (3, false));
    }

    #[test]
    fn test_quoted_body_paired_escape() {
        let single = quoted_body("\"", Some(Escape::BACKSLASH));
        let paired = quoted_body("\"", Some(Escape::BACKSLASH_PAIRED));
        // `a\\"` : the backslash pair does not escape the quote.
        assert_eq!(scan_body(paired, "a\\\\\" x"), (4, true));
        assert_eq!(scan_body(single, "a\\\\\" x\""), (7, true));
    }
}
