//! Numeric literal grammars.
//!
//! A [`NumberGrammar`] is an optional sign followed by an ordered list of
//! [`NumericLiteral`] forms. The first form that matches wins, so base-prefixed
//! forms (`0b`, `0o`, `0x`) must be listed before the bare decimal form: the
//! decimal form would otherwise claim the leading `0` of every prefixed
//! literal. That ordering is checked by [`NumberGrammar::validate`].
//!
//! Inside one form the longer continuation is always tried first:
//!
//! - fraction (with optional exponent), then exponent only, then bare integer;
//! - for hex floats, `hex "." hex p exp` before plain `hex`.
//!
//! Every optional part is scanned greedily and rolled back when incomplete,
//! which gives exactly that ordered-choice behaviour.

use crate::cursor::Cursor;
use crate::error::{GrammarError, GrammarResult};
use crate::fragment::{digit_run, Exponent, Radix, SEPARATOR};
use crate::probe::{Match, Probe};

/// Whether a decimal integer part may start with `0` followed by more digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadingZero {
    /// `007` is one literal.
    Permitted,
    /// `0` is complete on its own; `0123` is `0` followed by `123`.
    Forbidden,
}

/// Where a fractional part may appear.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fraction {
    /// Integers only.
    None,
    /// `1.5`; the integer part is required.
    Trailing,
    /// `1.5` or `.5`.
    TrailingOrLeading,
}

/// Type suffixes accepted after a literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Suffixes {
    /// Accepted after an integer-shaped literal (no fraction, no exponent).
    pub integer: &'static [char],
    /// Accepted after a float-shaped literal.
    pub float: &'static [char],
    /// Whether several suffix characters may follow each other (`10UL`).
    pub repeat: bool,
}

impl Suffixes {
    /// No suffixes.
    pub const NONE: Suffixes = Suffixes {
        integer: &[],
        float: &[],
        repeat: false,
    };

    /// A single suffix character allowed on integers only (BigInt `n`).
    pub const fn integer_only(chars: &'static [char]) -> Self {
        Suffixes {
            integer: chars,
            float: &[],
            repeat: false,
        }
    }

    /// The same suffix set on every literal.
    pub const fn any(chars: &'static [char], repeat: bool) -> Self {
        Suffixes {
            integer: chars,
            float: chars,
            repeat,
        }
    }

    fn scan(&self, cursor: &mut Cursor<'_>, is_float: bool) {
        let allowed = if is_float { self.float } else { self.integer };
        if self.repeat {
            while cursor.eat_any(allowed) {}
        } else {
            cursor.eat_any(allowed);
        }
    }
}

/// One literal form of one base.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumericLiteral {
    /// Base of the integer and fractional digits.
    pub radix: Radix,
    /// Base marker after a leading `0` (`x X`, `b B`, ...). `Some(&[])` is a
    /// bare `0` prefix, as in C's legacy octal. `None` means unprefixed.
    pub prefix: Option<&'static [char]>,
    /// Digit-group separator.
    pub separator: Option<char>,
    /// Leading-zero policy of the integer part.
    pub leading_zero: LeadingZero,
    /// Whether a fractional part is permitted.
    pub fraction: Fraction,
    /// Permitted exponent, if any.
    pub exponent: Option<Exponent>,
    /// When set, a fraction and an exponent must appear together (hex floats
    /// are `hex "." hex p exp` or plain `hex`).
    pub strict_float: bool,
    /// Trailing type suffixes.
    pub suffixes: Suffixes,
}

impl NumericLiteral {
    const fn integer(radix: Radix, prefix: Option<&'static [char]>) -> Self {
        Self {
            radix,
            prefix,
            separator: Some(SEPARATOR),
            leading_zero: LeadingZero::Permitted,
            fraction: Fraction::None,
            exponent: None,
            strict_float: false,
            suffixes: Suffixes::NONE,
        }
    }

    /// `0b1010`, `0B1_0`.
    pub const fn binary() -> Self {
        Self::integer(Radix::Binary, Some(&['b', 'B']))
    }

    /// `0o777`, `0O7_7`.
    pub const fn octal() -> Self {
        Self::integer(Radix::Octal, Some(&['o', 'O']))
    }

    /// C's `0777`: a bare `0` followed by at least one octal digit.
    pub const fn legacy_octal() -> Self {
        let mut literal = Self::integer(Radix::Octal, Some(&[]));
        literal.separator = None;
        literal
    }

    /// `0xFF`, `0xAB_CD`.
    pub const fn hex() -> Self {
        Self::integer(Radix::Hex, Some(&['x', 'X']))
    }

    /// `0x1.8p3` or `0xFF`: a hex literal whose float form needs both the
    /// fraction and the `p` exponent.
    pub const fn hex_float() -> Self {
        let mut literal = Self::hex();
        literal.fraction = Fraction::Trailing;
        literal.exponent = Some(Exponent::BINARY);
        literal.strict_float = true;
        literal
    }

    /// `123`, `1_000.5`, `6.02e23`, `1e9`.
    pub const fn decimal() -> Self {
        let mut literal = Self::integer(Radix::Decimal, None);
        literal.fraction = Fraction::Trailing;
        literal.exponent = Some(Exponent::DECIMAL);
        literal
    }

    /// Replaces the digit separator.
    pub const fn separator(mut self, separator: Option<char>) -> Self {
        self.separator = separator;
        self
    }

    /// Replaces the leading-zero policy.
    pub const fn leading_zero(mut self, policy: LeadingZero) -> Self {
        self.leading_zero = policy;
        self
    }

    /// Replaces the fraction policy.
    pub const fn fraction(mut self, fraction: Fraction) -> Self {
        self.fraction = fraction;
        self
    }

    /// Replaces the exponent.
    pub const fn exponent(mut self, exponent: Option<Exponent>) -> Self {
        self.exponent = exponent;
        self
    }

    /// Makes fraction and exponent optional independently of each other.
    pub const fn loose_float(mut self) -> Self {
        self.strict_float = false;
        self
    }

    /// Replaces the suffixes.
    pub const fn suffixes(mut self, suffixes: Suffixes) -> Self {
        self.suffixes = suffixes;
        self
    }

    /// Consumes one literal of this form, or nothing.
    pub fn scan(&self, cursor: &mut Cursor<'_>) -> bool {
        let start = cursor.snapshot();
        if let Some(markers) = self.prefix {
            if !cursor.eat('0') || (!markers.is_empty() && !cursor.eat_any(markers)) {
                cursor.restore(start);
                return false;
            }
        }

        let digits = digit_run(self.radix, self.separator);
        let has_integer = if self.leading_zero == LeadingZero::Forbidden && cursor.eat('0') {
            true
        } else {
            digits.scan(cursor)
        };
        let after_integer = cursor.snapshot();

        let mut has_fraction = false;
        if has_integer {
            if self.fraction != Fraction::None {
                let before_dot = cursor.snapshot();
                if cursor.eat('.') && digits.scan(cursor) {
                    has_fraction = true;
                } else {
                    cursor.restore(before_dot);
                }
            }
        } else if self.fraction == Fraction::TrailingOrLeading
            && cursor.eat('.')
            && digits.scan(cursor)
        {
            has_fraction = true;
        } else {
            cursor.restore(start);
            return false;
        }

        let has_exponent = self
            .exponent
            .as_ref()
            .is_some_and(|exponent| exponent.scan(cursor));

        let is_float = if self.strict_float && has_fraction != has_exponent {
            if !has_integer {
                cursor.restore(start);
                return false;
            }
            cursor.restore(after_integer);
            false
        } else {
            has_fraction || has_exponent
        };

        self.suffixes.scan(cursor, is_float);
        true
    }

    /// Short description used in error messages.
    pub const fn describe(&self) -> &'static str {
        match (self.prefix, self.radix) {
            (None, radix) => radix.name(),
            (Some(_), Radix::Binary) => "0b binary",
            (Some(_), Radix::Octal) => "0o octal",
            (Some(_), Radix::Decimal) => "0-prefixed decimal",
            (Some(_), Radix::Hex) => "0x hexadecimal",
        }
    }
}

/// A language's complete numeric literal grammar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberGrammar {
    signs: &'static [char],
    forms: Vec<NumericLiteral>,
}

impl NumberGrammar {
    /// Builds a grammar that tries `forms` in order after an optional sign.
    pub fn new(signs: &'static [char], forms: impl IntoIterator<Item = NumericLiteral>) -> Self {
        Self {
            signs,
            forms: forms.into_iter().collect(),
        }
    }

    /// A grammar that never matches, for languages without numbers.
    pub fn none() -> Self {
        Self::new(&[], [])
    }

    /// Characters accepted as a leading sign.
    pub fn signs(&self) -> &'static [char] {
        self.signs
    }

    /// The literal forms in the order they are tried.
    pub fn forms(&self) -> &[NumericLiteral] {
        &self.forms
    }

    /// Returns true if the grammar can never match.
    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// Checks that no unprefixed form is tried before a prefixed one.
    pub fn validate(&self) -> GrammarResult<()> {
        for (i, earlier) in self.forms.iter().enumerate() {
            if earlier.prefix.is_some() {
                continue;
            }
            if let Some(later) = self.forms[i + 1..].iter().find(|f| f.prefix.is_some()) {
                return Err(GrammarError::ShadowedNumericForm {
                    earlier: earlier.describe(),
                    later: later.describe(),
                });
            }
        }
        Ok(())
    }
}

impl Probe for NumberGrammar {
    fn probe(&self, text: &str, at: usize) -> Option<Match> {
        let mut cursor = Cursor::at(text, at);
        cursor.eat_any(self.signs);
        let body = cursor.snapshot();
        for form in &self.forms {
            if form.scan(&mut cursor) {
                return Some(Match::new(at, cursor.position()));
            }
            cursor.restore(body);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn python_like() -> NumberGrammar {
        NumberGrammar::new(
            &['+', '-'],
            [
                NumericLiteral::binary(),
                NumericLiteral::octal(),
                NumericLiteral::hex_float(),
                NumericLiteral::decimal(),
            ],
        )
    }

    fn matched<'a>(grammar: &NumberGrammar, text: &'a str) -> Option<&'a str> {
        grammar.probe(text, 0).map(|m| m.text(text))
    }

    #[test]
    fn test_prefixed_forms() {
        let g = python_like();
        assert_eq!(matched(&g, "0b1_101)"), Some("0b1_101"));
        assert_eq!(matched(&g, "0o7_7 "), Some("0o7_7"));
        assert_eq!(matched(&g, "0xAB_CD;"), Some("0xAB_CD"));
    }

    #[test]
    fn test_prefix_without_digits_falls_back_to_decimal() {
        let g = python_like();
        assert_eq!(matched(&g, "0b2"), Some("0"));
        assert_eq!(matched(&g, "0x"), Some("0"));
    }

    #[test]
    fn test_hex_float_needs_fraction_and_exponent() {
        let g = python_like();
        assert_eq!(matched(&g, "0x1.2p3,"), Some("0x1.2p3"));
        assert_eq!(matched(&g, "0x1.2p-3"), Some("0x1.2p-3"));
        assert_eq!(matched(&g, "0x1.2 "), Some("0x1"));
        assert_eq!(matched(&g, "0x1p3"), Some("0x1"));
    }

    #[test]
    fn test_decimal_alternatives() {
        let g = python_like();
        assert_eq!(matched(&g, "123.456e+10 "), Some("123.456e+10"));
        assert_eq!(matched(&g, "123e45"), Some("123e45"));
        assert_eq!(matched(&g, "1_000"), Some("1_000"));
        assert_eq!(matched(&g, "1."), Some("1"));
        assert_eq!(matched(&g, "1e"), Some("1"));
        assert_eq!(matched(&g, ".5"), None);
    }

    #[test]
    fn test_sign() {
        let g = python_like();
        assert_eq!(matched(&g, "-42"), Some("-42"));
        assert_eq!(matched(&g, "+0x1F"), Some("+0x1F"));
        assert_eq!(matched(&g, "-"), None);
        assert_eq!(matched(&g, "-x"), None);
    }

    #[test]
    fn test_leading_dot_fraction() {
        let g = NumberGrammar::new(
            &['-'],
            [NumericLiteral::decimal().fraction(Fraction::TrailingOrLeading)],
        );
        assert_eq!(matched(&g, ".5e3"), Some(".5e3"));
        assert_eq!(matched(&g, "-.5"), Some("-.5"));
        assert_eq!(matched(&g, "."), None);
    }

    #[test]
    fn test_forbidden_leading_zero() {
        let g = NumberGrammar::new(
            &['-'],
            [NumericLiteral::decimal()
                .separator(None)
                .leading_zero(LeadingZero::Forbidden)],
        );
        assert_eq!(matched(&g, "0123"), Some("0"));
        assert_eq!(matched(&g, "123"), Some("123"));
        assert_eq!(matched(&g, "0.5e-2"), Some("0.5e-2"));
        assert_eq!(matched(&g, "-0"), Some("-0"));
    }

    #[test]
    fn test_integer_only_suffix() {
        let g = NumberGrammar::new(
            &[],
            [
                NumericLiteral::hex().suffixes(Suffixes::integer_only(&['n'])),
                NumericLiteral::decimal().suffixes(Suffixes::integer_only(&['n'])),
            ],
        );
        assert_eq!(matched(&g, "10n"), Some("10n"));
        assert_eq!(matched(&g, "0xFFn"), Some("0xFFn"));
        assert_eq!(matched(&g, "1.5n"), Some("1.5"));
        assert_eq!(matched(&g, "1e3n"), Some("1e3"));
    }

    #[test]
    fn test_repeated_suffixes() {
        let g = NumberGrammar::new(
            &[],
            [NumericLiteral::decimal().suffixes(Suffixes::any(&['u', 'U', 'l', 'L'], true))],
        );
        assert_eq!(matched(&g, "10UL;"), Some("10UL"));
        assert_eq!(matched(&g, "10ull"), Some("10ull"));
    }

    #[test]
    fn test_legacy_octal() {
        let g = NumberGrammar::new(&[], [NumericLiteral::legacy_octal(), NumericLiteral::decimal()]);
        assert_eq!(matched(&g, "0755 "), Some("0755"));
        assert_eq!(matched(&g, "0 "), Some("0"));
        assert_eq!(matched(&g, "0.5"), Some("0.5"));
    }

    #[test]
    fn test_empty_grammar_never_matches() {
        let g = NumberGrammar::none();
        assert!(g.is_empty());
        assert_eq!(g.probe("42", 0), None);
    }

    #[test]
    fn test_validate_rejects_decimal_before_prefixed() {
        let g = NumberGrammar::new(&[], [NumericLiteral::decimal(), NumericLiteral::hex()]);
        assert_eq!(
            g.validate(),
            Err(GrammarError::ShadowedNumericForm {
                earlier: "decimal",
                later: "0x hexadecimal",
            })
        );
        assert!(python_like().validate().is_ok());
    }

    #[test]
    fn test_probe_at_offset() {
        let g = python_like();
        let text = "x = 0x1F;";
        let m = g.probe(text, 4).unwrap();
        assert_eq!(m, Match::new(4, 8));
        assert_eq!(g.probe(text, 0), None);
    }
}
