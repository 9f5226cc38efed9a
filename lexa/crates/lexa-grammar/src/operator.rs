//! Operator grammars.
//!
//! Most languages recognise operators only through their reserved operator
//! set (longest reserved spelling wins). Languages with user-definable
//! operators, such as Haskell and Swift, declare an explicit grammar: a run of
//! operator symbol characters.

use crate::cursor::Cursor;
use crate::probe::{Match, Probe};

/// A maximal run of operator symbol characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperatorGrammar {
    symbols: &'static [char],
}

impl OperatorGrammar {
    /// Builds a grammar over `symbols`.
    pub const fn new(symbols: &'static [char]) -> Self {
        Self { symbols }
    }

    /// The symbol characters.
    pub fn symbols(&self) -> &'static [char] {
        self.symbols
    }
}

impl Probe for OperatorGrammar {
    fn probe(&self, text: &str, at: usize) -> Option<Match> {
        let mut cursor = Cursor::at(text, at);
        let start = cursor.position();
        while cursor.eat_any(self.symbols) {}
        (cursor.position() > start).then(|| Match::new(start, cursor.position()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_run() {
        let g = OperatorGrammar::new(&['<', '>', '=', '|', '$']);
        assert_eq!(g.probe("<$> x", 0), Some(Match::new(0, 3)));
        assert_eq!(g.probe("x >>= f", 2), Some(Match::new(2, 5)));
        assert_eq!(g.probe("x", 0), None);
    }

    #[test]
    fn test_offset_inside_character_never_matches() {
        let g = OperatorGrammar::new(&['+']);
        assert_eq!(g.probe("é+", 1), None);
        assert_eq!(g.probe("é+", 2), Some(Match::new(2, 3)));
        assert_eq!(g.probe("+", 5), None);
    }
}
