// ============================================================================
// Numeral Validator
// Grammar checks over symbol sequences: alphabet, adjacency and repetition
// ============================================================================

use crate::numeral::table::{self, SYMBOLS};
use std::fmt;

/// Longest run of one symbol repeated after its first occurrence ("III").
const MAX_REPEATS: usize = 2;

/// First rule a candidate numeral breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Violation {
    Empty,
    UnknownSymbol { index: usize, symbol: char },
    IllegalIncrease { index: usize, prev: char, current: char },
    TooManyRepeats { index: usize, symbol: char },
    RepeatedFiveFamily { index: usize, symbol: char },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Empty => write!(f, "empty numeral"),
            Violation::UnknownSymbol { index, symbol } => {
                write!(f, "unknown symbol {:?} at {}", symbol, index)
            },
            Violation::IllegalIncrease {
                index,
                prev,
                current,
            } => write!(f, "{} may not precede {} (at {})", prev, current, index),
            Violation::TooManyRepeats { index, symbol } => {
                write!(f, "{} repeated more than {} times (at {})", symbol, MAX_REPEATS + 1, index)
            },
            Violation::RepeatedFiveFamily { index, symbol } => {
                write!(f, "{} may not be repeated (at {})", symbol, index)
            },
        }
    }
}

/// Check whether `s` is a well-formed Roman numeral.
///
/// Rules:
/// - at least one symbol, and only the seven symbols
/// - an increase is only legal from the symbol one position below a
///   V/L/D, or from the symbol two positions below an I/X/C/M
/// - no symbol appears more than three times in a row, and V, L, D never
///   appear twice in a row
///
/// Adjacent pairs are all that is checked, so non-canonical forms such as
/// "IIIX" pass. Never fails and has no side effects.
///
/// # Example
/// ```
/// use roman_numerals::converter::validate;
///
/// assert!(validate("MCMLXXXIV"));
/// assert!(validate("IIIX"));
/// assert!(!validate("IC"));
/// ```
pub fn validate(s: &str) -> bool {
    match find_violation(s) {
        Some(violation) => {
            tracing::trace!(numeral = s, %violation, "numeral rejected");
            false
        },
        None => true,
    }
}

pub(crate) fn find_violation(s: &str) -> Option<Violation> {
    if s.is_empty() {
        return Some(Violation::Empty);
    }

    let mut positions = Vec::with_capacity(s.len());
    for (index, symbol) in s.chars().enumerate() {
        match table::position_of_symbol(symbol) {
            Ok(pos) => positions.push(pos),
            Err(_) => return Some(Violation::UnknownSymbol { index, symbol }),
        }
    }

    let mut repeats = 0;
    for (index, pair) in positions.windows(2).enumerate() {
        let index = index + 1;
        let (prev, current) = (pair[0], pair[1]);
        let (prev_symbol, prev_value) = SYMBOLS[prev];
        let (symbol, value) = SYMBOLS[current];

        if value > prev_value && !is_legal_increase(prev, current) {
            return Some(Violation::IllegalIncrease {
                index,
                prev: prev_symbol,
                current: symbol,
            });
        }

        if value == prev_value {
            repeats += 1;
        } else {
            repeats = 0;
        }

        if repeats > 0 && table::is_five_family(value) {
            return Some(Violation::RepeatedFiveFamily { index, symbol });
        }
        if repeats > MAX_REPEATS {
            return Some(Violation::TooManyRepeats { index, symbol });
        }
    }

    None
}

/// Whether stepping up from position `prev` to position `current` forms a
/// legal subtractive pair (IV, IX, XL, XC, CD, CM).
fn is_legal_increase(prev: usize, current: usize) -> bool {
    let value = SYMBOLS[current].1;
    (table::is_five_family(value) && prev + 1 == current)
        || (table::is_one_family(value) && prev + 2 == current)
}
