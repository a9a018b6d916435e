//! Elementary (one-dimensional, two-state) Wolfram rules.

use std::fmt;

use vita_core::Cell;

/// A Wolfram code for a one-dimensional automaton.
///
/// Bit `p` of the code is the next state for the neighbourhood pattern
/// `p = left << 2 | cell << 1 | right`. Every row of a grid evolves as an
/// independent line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementaryRule(pub u8);

impl ElementaryRule {
    /// Rule 30 (chaotic).
    pub const RULE_30: ElementaryRule = ElementaryRule(30);
    /// Rule 90 (Sierpinski triangle: `left XOR right`).
    pub const RULE_90: ElementaryRule = ElementaryRule(90);
    /// Rule 110 (Turing complete).
    pub const RULE_110: ElementaryRule = ElementaryRule(110);
    /// Rule 184 (traffic flow: live cells move right when the way is clear).
    pub const RULE_184: ElementaryRule = ElementaryRule(184);

    /// The Wolfram code.
    pub fn code(self) -> u8 {
        self.0
    }

    /// Next state of `cell` given its left and right neighbours.
    pub fn next(self, left: Cell, cell: Cell, right: Cell) -> Cell {
        let pattern = (left.as_byte() << 2) | (cell.as_byte() << 1) | right.as_byte();
        Cell::from((self.0 >> pattern) & 1 == 1)
    }
}

impl From<u8> for ElementaryRule {
    fn from(code: u8) -> Self {
        Self(code)
    }
}

impl fmt::Display for ElementaryRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rule {}", self.0)
    }
}
