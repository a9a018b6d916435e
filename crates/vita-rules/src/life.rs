//! Life-like birth/survival rule tables.

use std::fmt;
use std::str::FromStr;

use crate::error::RuleError;
use vita_core::Cell;

/// A Life-like transition table.
///
/// Bit `n` of `birth` set means a dead cell with `n` live neighbours comes
/// alive; bit `n` of `survival` set means a live cell with `n` live
/// neighbours stays alive. Every other combination yields a dead cell.
/// Only bits `0..=8` are meaningful.
///
/// # Examples
///
/// ```
/// use vita_core::Cell;
/// use vita_rules::LifeRule;
///
/// let rule: LifeRule = "B3/S23".parse().unwrap();
/// assert_eq!(rule, LifeRule::CONWAY);
/// assert_eq!(rule.next(Cell::Dead, 3), Cell::Alive);
/// assert_eq!(rule.next(Cell::Alive, 4), Cell::Dead);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LifeRule {
    birth: u16,
    survival: u16,
}

const fn mask(counts: &[u8]) -> u16 {
    let mut m = 0u16;
    let mut i = 0;
    while i < counts.len() {
        m |= 1 << counts[i];
        i += 1;
    }
    m
}

const VALID_BITS: u16 = 0x01ff;

impl LifeRule {
    /// Conway's Game of Life, `B3/S23`.
    pub const CONWAY: LifeRule = LifeRule::from_masks(mask(&[3]), mask(&[2, 3]));
    /// `B34/S23`: Conway survival with an extra birth on four neighbours.
    pub const B34_S23: LifeRule = LifeRule::from_masks(mask(&[3, 4]), mask(&[2, 3]));
    /// Seeds, `B2/S`: every live cell dies each generation.
    pub const SEEDS: LifeRule = LifeRule::from_masks(mask(&[2]), 0);
    /// Day & Night, `B3678/S34678`.
    pub const DAY_AND_NIGHT: LifeRule =
        LifeRule::from_masks(mask(&[3, 6, 7, 8]), mask(&[3, 4, 6, 7, 8]));

    const fn from_masks(birth: u16, survival: u16) -> Self {
        Self {
            birth: birth & VALID_BITS,
            survival: survival & VALID_BITS,
        }
    }

    /// Build a table from explicit birth and survival neighbour counts.
    pub fn new(birth: &[u8], survival: &[u8]) -> Result<Self, RuleError> {
        if let Some(&count) = birth.iter().chain(survival).find(|&&n| n > 8) {
            return Err(RuleError::CountOutOfRange { count });
        }
        Ok(Self::from_masks(mask(birth), mask(survival)))
    }

    /// Parse `B<digits>/S<digits>` notation (case-insensitive, either
    /// section may be empty).
    pub fn parse(notation: &str) -> Result<Self, RuleError> {
        let invalid = |reason: &str| RuleError::InvalidNotation {
            notation: notation.to_string(),
            reason: reason.to_string(),
        };

        let (b, s) = notation
            .trim()
            .split_once('/')
            .ok_or_else(|| invalid("expected a '/' between birth and survival"))?;
        let b = b
            .strip_prefix(|c: char| c.eq_ignore_ascii_case(&'b'))
            .ok_or_else(|| invalid("birth section must start with 'B'"))?;
        let s = s
            .strip_prefix(|c: char| c.eq_ignore_ascii_case(&'s'))
            .ok_or_else(|| invalid("survival section must start with 'S'"))?;

        let digits = |section: &str| -> Result<u16, RuleError> {
            let mut m = 0u16;
            for ch in section.chars() {
                match ch.to_digit(10) {
                    Some(d) if d <= 8 => m |= 1 << d,
                    _ => return Err(invalid(&format!("unexpected {ch:?}"))),
                }
            }
            Ok(m)
        };

        Ok(Self::from_masks(digits(b)?, digits(s)?))
    }

    /// Whether a dead cell with `count` live neighbours is born.
    pub fn is_birth(&self, count: u8) -> bool {
        count <= 8 && self.birth & (1 << count) != 0
    }

    /// Whether a live cell with `count` live neighbours survives.
    pub fn is_survival(&self, count: u8) -> bool {
        count <= 8 && self.survival & (1 << count) != 0
    }

    /// Next state of `cell` given its live neighbour count.
    pub fn next(&self, cell: Cell, count: u8) -> Cell {
        let alive = match cell {
            Cell::Dead => self.is_birth(count),
            Cell::Alive => self.is_survival(count),
        };
        Cell::from(alive)
    }
}

impl Default for LifeRule {
    fn default() -> Self {
        Self::CONWAY
    }
}

impl FromStr for LifeRule {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for LifeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("B")?;
        for n in 0..=8u8 {
            if self.is_birth(n) {
                write!(f, "{n}")?;
            }
        }
        f.write_str("/S")?;
        for n in 0..=8u8 {
            if self.is_survival(n) {
                write!(f, "{n}")?;
            }
        }
        Ok(())
    }
}
