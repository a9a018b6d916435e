//! The rule bound to a grid: a transition table plus its neighbourhood.

use std::fmt;

use crate::elementary::ElementaryRule;
use crate::life::LifeRule;
use vita_core::Cell;
use vita_space::{halo, line1d, moore, CellView, EdgeBehavior, Halo};

/// A transition rule together with the neighbourhood strategy it reads.
///
/// Life tables count Moore neighbours. Without a [`Halo`] the count uses
/// the rule's own [`EdgeBehavior`]; with one (tile backends) off-grid
/// offsets are read from the halo and the edge behaviour is ignored.
/// Elementary rules only look along each row and never consult a halo.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// Life-like birth/survival table over the Moore neighbourhood.
    Life {
        /// Birth/survival sets.
        table: LifeRule,
        /// Edge treatment when the grid stands alone.
        edge: EdgeBehavior,
    },
    /// One-dimensional Wolfram code applied row by row.
    Elementary(ElementaryRule),
}

impl Rule {
    /// Conway's Life on a torus, the default for a standalone grid.
    pub const fn conway() -> Self {
        Rule::Life {
            table: LifeRule::CONWAY,
            edge: EdgeBehavior::Wrap,
        }
    }

    /// A Life-like table with the given edge treatment.
    pub const fn life(table: LifeRule, edge: EdgeBehavior) -> Self {
        Rule::Life { table, edge }
    }

    /// An elementary rule from its Wolfram code.
    pub const fn elementary(code: u8) -> Self {
        Rule::Elementary(ElementaryRule(code))
    }

    /// Next state of the cell at `(row, col)` of `view`.
    pub fn apply(&self, view: &CellView<'_>, halo: Option<&Halo<'_>>, row: i32, col: i32) -> Cell {
        let cell = view.get(row, col);
        match *self {
            Rule::Life { table, edge } => {
                let count = match halo {
                    Some(h) => halo::count_alive(view, h, row, col),
                    None => moore::count_alive(view, row, col, edge),
                };
                table.next(cell, count)
            }
            Rule::Elementary(rule) => {
                let (left, right) = line1d::neighbours(view, row, col);
                rule.next(left, cell, right)
            }
        }
    }
}

impl Default for Rule {
    fn default() -> Self {
        Self::conway()
    }
}

impl From<LifeRule> for Rule {
    fn from(table: LifeRule) -> Self {
        Rule::Life {
            table,
            edge: EdgeBehavior::Wrap,
        }
    }
}

impl From<ElementaryRule> for Rule {
    fn from(rule: ElementaryRule) -> Self {
        Rule::Elementary(rule)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Life { table, edge } => write!(f, "{table} ({edge:?})"),
            Rule::Elementary(rule) => write!(f, "{rule}"),
        }
    }
}
