// ============================================================================
// Numeral Table
// The seven Roman symbols plus scale and boundary arithmetic over values
// ============================================================================

use super::errors::{NumeralError, NumeralResult};
use arrayvec::ArrayVec;

/// The smallest value that can be written as a Roman numeral.
pub const MIN_VALUE: u32 = 1;

/// The greatest value that can be written as a Roman numeral.
pub const MAX_VALUE: u32 = 3999;

/// Symbols in canonical order, paired with their values.
///
/// The position of a pair in this array is the symbol's position on the
/// scale (I=0 … M=6). Adjacency checks in the validator rely on it.
pub const SYMBOLS: [(char, u32); 7] = [
    ('I', 1),
    ('V', 5),
    ('X', 10),
    ('L', 50),
    ('C', 100),
    ('D', 500),
    ('M', 1000),
];

/// Enough room for the decimal digits of any `u32`.
pub const DIGIT_CAPACITY: usize = 10;

// ============================================================================
// Symbol Lookups
// ============================================================================

/// Value of a single symbol.
///
/// # Errors
/// Returns `UnknownSymbol` if `symbol` is not one of the seven symbols.
#[inline]
pub fn value_of(symbol: char) -> NumeralResult<u32> {
    SYMBOLS
        .iter()
        .find(|(c, _)| *c == symbol)
        .map(|&(_, v)| v)
        .ok_or(NumeralError::UnknownSymbol(symbol))
}

/// Symbol carrying exactly `value`.
///
/// # Errors
/// Returns `UnknownValue` unless `value` is one of 1, 5, 10, 50, 100, 500, 1000.
#[inline]
pub fn symbol_of(value: u32) -> NumeralResult<char> {
    SYMBOLS
        .iter()
        .find(|(_, v)| *v == value)
        .map(|&(c, _)| c)
        .ok_or(NumeralError::UnknownValue(value))
}

/// Position of a symbol on the scale (I=0 … M=6).
#[inline]
pub fn position_of_symbol(symbol: char) -> NumeralResult<usize> {
    SYMBOLS
        .iter()
        .position(|(c, _)| *c == symbol)
        .ok_or(NumeralError::UnknownSymbol(symbol))
}

/// Position of a symbol value on the scale (1=0 … 1000=6).
#[inline]
pub fn position_of_value(value: u32) -> NumeralResult<usize> {
    SYMBOLS
        .iter()
        .position(|(_, v)| *v == value)
        .ok_or(NumeralError::UnknownValue(value))
}

/// Whether `symbol` is one of the seven symbols.
#[inline]
pub fn is_symbol(symbol: char) -> bool {
    SYMBOLS.iter().any(|(c, _)| *c == symbol)
}

/// Whether `value` can be written with a single symbol.
#[inline]
pub fn is_symbol_value(value: u32) -> bool {
    SYMBOLS.iter().any(|(_, v)| *v == value)
}

// ============================================================================
// Scale Arithmetic
// ============================================================================

/// Number of decimal digits in `n` (zero has one digit).
pub fn count_digits(n: u32) -> usize {
    let mut rest = n;
    let mut digits = 1;
    while rest >= 10 {
        rest /= 10;
        digits += 1;
    }
    digits
}

/// Largest power of ten not greater than `n`.
///
/// For 763 this is 100, since 700 is 7 × 100; trailing digits are ignored.
/// Zero maps to a scale of 1.
pub fn proportional_scale(n: u32) -> u32 {
    let mut div = n;
    let mut scale = 1;
    while div >= 10 {
        div /= 10;
        scale *= 10;
    }
    scale
}

/// Leading decimal digit of `n` (0 for 0).
#[inline]
pub fn leading_digit(n: u32) -> u32 {
    n / proportional_scale(n)
}

/// Split `n` into one addend per decimal place, most significant first.
///
/// ```ignore
/// assert_eq!(digit_groups(1984).as_slice(), &[1000, 900, 80, 4]);
/// assert_eq!(digit_groups(505).as_slice(), &[500, 0, 5]);
/// ```
pub fn digit_groups(n: u32) -> ArrayVec<u32, DIGIT_CAPACITY> {
    let count = count_digits(n);
    let mut groups = ArrayVec::new();
    let mut scale = proportional_scale(n);

    for _ in 0..count {
        groups.push(n / scale % 10 * scale);
        scale /= 10;
    }

    groups
}

/// Adjacent table values `(lo, hi)` with `lo < n <= hi`.
///
/// 47 lies between X and L, so this returns `(10, 50)`. Values that fall
/// outside every pair (0, or anything above 1000) yield `(0, 1)`.
pub fn boundaries(n: u32) -> (u32, u32) {
    SYMBOLS
        .windows(2)
        .map(|pair| (pair[0].1, pair[1].1))
        .find(|&(lo, hi)| lo < n && n <= hi)
        .unwrap_or((0, 1))
}

/// Symbols of the form 5×10^k (V, L, D).
#[inline]
pub fn is_five_family(value: u32) -> bool {
    is_symbol_value(value) && leading_digit(value) == 5
}

/// Symbols of the form 1×10^k (I, X, C, M).
#[inline]
pub fn is_one_family(value: u32) -> bool {
    is_symbol_value(value) && leading_digit(value) == 1
}
