//! Comment grammars.
//!
//! A language declares at most one single-line comment prefix and at most one
//! block comment pair. Block comments either end at the first closing
//! delimiter or, when nested, keep a depth counter so that
//! `/* a /* b */ c */` is a single comment.

use crate::cursor::Cursor;
use crate::error::{GrammarError, GrammarResult};
use crate::probe::{Match, Probe};

/// A block comment delimiter pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockComment {
    /// Opening delimiter, such as `/*`.
    pub open: &'static str,
    /// Closing delimiter, such as `*/`.
    pub close: &'static str,
    /// Whether an inner opening delimiter starts a nested comment.
    pub nested: bool,
}

impl BlockComment {
    /// A block comment that ends at the first closing delimiter.
    pub const fn new(open: &'static str, close: &'static str) -> Self {
        Self {
            open,
            close,
            nested: false,
        }
    }

    /// A block comment that nests.
    pub const fn nested(open: &'static str, close: &'static str) -> Self {
        Self {
            open,
            close,
            nested: true,
        }
    }

    /// Scans the rest of the comment after its opening delimiter.
    /// Returns whether the outermost comment was closed.
    fn scan_body(&self, cursor: &mut Cursor<'_>) -> bool {
        let mut depth = 1usize;
        while !cursor.is_at_end() {
            if cursor.eat_str(self.close) {
                depth -= 1;
                if depth == 0 {
                    return true;
                }
            } else if self.nested && cursor.eat_str(self.open) {
                depth += 1;
            } else {
                cursor.advance();
            }
        }
        false
    }
}

/// Comment syntax of one language.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommentGrammar {
    line: Option<&'static str>,
    block: Option<BlockComment>,
}

impl CommentGrammar {
    /// Builds a comment grammar from its two optional parts.
    pub fn new(line: Option<&'static str>, block: Option<BlockComment>) -> Self {
        Self { line, block }
    }

    /// The single-line comment prefix.
    pub fn line(&self) -> Option<&'static str> {
        self.line
    }

    /// The block comment pair.
    pub fn block(&self) -> Option<BlockComment> {
        self.block
    }

    /// Returns true if the language has no comments.
    pub fn is_empty(&self) -> bool {
        self.line.is_none() && self.block.is_none()
    }

    /// Checks that no delimiter is empty.
    pub fn validate(&self) -> GrammarResult<()> {
        if self.line.is_some_and(str::is_empty) {
            return Err(GrammarError::EmptyDelimiter {
                what: "single-line comment prefix",
            });
        }
        if let Some(block) = self.block {
            if block.open.is_empty() || block.close.is_empty() {
                return Err(GrammarError::EmptyDelimiter {
                    what: "block comment delimiter",
                });
            }
        }
        Ok(())
    }

    fn probe_line(&self, cursor: &mut Cursor<'_>) -> bool {
        let Some(prefix) = self.line else {
            return false;
        };
        if !cursor.eat_str(prefix) {
            return false;
        }
        while !matches!(cursor.current(), None | Some('\n' | '\r')) {
            cursor.advance();
        }
        true
    }

    fn probe_block(&self, cursor: &mut Cursor<'_>) -> Option<bool> {
        let block = self.block?;
        if !cursor.eat_str(block.open) {
            return None;
        }
        Some(block.scan_body(cursor))
    }
}

impl Probe for CommentGrammar {
    fn probe(&self, text: &str, at: usize) -> Option<Match> {
        let mut cursor = Cursor::at(text, at);

        // The longer opening wins when one starts with the other (`--` and `--[[`).
        let block_first = match (self.line, self.block) {
            (Some(line), Some(block)) => block.open.len() >= line.len(),
            _ => true,
        };

        if block_first {
            if let Some(closed) = self.probe_block(&mut cursor) {
                return Some(finish(at, cursor.position(), closed));
            }
            self.probe_line(&mut cursor)
                .then(|| Match::new(at, cursor.position()))
        } else {
            if self.probe_line(&mut cursor) {
                return Some(Match::new(at, cursor.position()));
            }
            self.probe_block(&mut cursor)
                .map(|closed| finish(at, cursor.position(), closed))
        }
    }
}

fn finish(start: usize, end: usize, closed: bool) -> Match {
    if closed {
        Match::new(start, end)
    } else {
        Match::unterminated(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c_comments() -> CommentGrammar {
        CommentGrammar::new(Some("//"), Some(BlockComment::new("/*", "*/")))
    }

    fn matched<'a>(grammar: &CommentGrammar, text: &'a str) -> Option<(&'a str, bool)> {
        grammar.probe(text, 0).map(|m| (m.text(text), m.closed))
    }

    #[test]
    fn test_line_comment_stops_before_newline() {
        let g = c_comments();
        assert_eq!(matched(&g, "// note\nint x;"), Some(("// note", true)));
        assert_eq!(matched(&g, "// last line"), Some(("// last line", true)));
    }

    #[test]
    fn test_block_comment() {
        let g = c_comments();
        assert_eq!(matched(&g, "/* a\n b */ x"), Some(("/* a\n b */", true)));
    }

    #[test]
    fn test_non_nested_block_ends_at_first_close() {
        let g = c_comments();
        assert_eq!(
            matched(&g, "/* outer /* inner */ outer */"),
            Some(("/* outer /* inner */", true))
        );
    }

    #[test]
    fn test_nested_block_comment() {
        let g = CommentGrammar::new(Some("--"), Some(BlockComment::nested("{-", "-}")));
        assert_eq!(
            matched(&g, "{- outer {- inner -} outer -}hello"),
            Some(("{- outer {- inner -} outer -}", true))
        );
    }

    #[test]
    fn test_unterminated_block_runs_to_end() {
        let g = c_comments();
        assert_eq!(matched(&g, "/* never closed\nx"), Some(("/* never closed\nx", false)));
    }

    #[test]
    fn test_not_a_comment() {
        let g = c_comments();
        assert_eq!(g.probe("/ 2", 0), None);
        assert_eq!(CommentGrammar::default().probe("// x", 0), None);
        assert!(CommentGrammar::default().is_empty());
    }

    #[test]
    fn test_longer_block_open_wins() {
        let g = CommentGrammar::new(Some("--"), Some(BlockComment::new("--[[", "]]")));
        assert_eq!(matched(&g, "--[[ a\nb ]] c"), Some(("--[[ a\nb ]]", true)));
        assert_eq!(matched(&g, "-- a\nb"), Some(("-- a", true)));
    }

    #[test]
    fn test_validate_rejects_empty_prefix() {
        let g = CommentGrammar::new(Some(""), None);
        assert!(g.validate().is_err());
        assert!(c_comments().validate().is_ok());
    }
}
