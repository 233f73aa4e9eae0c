// ============================================================================
// Numeral Generator
// Integer → canonical Roman numeral
// ============================================================================

use crate::numeral::table::{self, MAX_VALUE, MIN_VALUE};
use crate::numeral::{NumeralError, NumeralResult};

/// Convert an integer in [1, 3999] to its canonical Roman numeral.
///
/// The integer is split into digit groups (1984 → 1000 + 900 + 80 + 4) and
/// each group is written independently, most significant first.
///
/// # Errors
/// Returns `OutOfRange` if `n` is outside [MIN_VALUE, MAX_VALUE].
///
/// # Example
/// ```
/// use roman_numerals::converter::to_numeral;
///
/// assert_eq!(to_numeral(1984).unwrap(), "MCMLXXXIV");
/// assert!(to_numeral(0).is_err());
/// ```
pub fn to_numeral(n: u32) -> NumeralResult<String> {
    if !(MIN_VALUE..=MAX_VALUE).contains(&n) {
        tracing::debug!(value = n, "integer outside Roman numeral range");
        return Err(NumeralError::OutOfRange(n));
    }

    let mut numeral = String::with_capacity(16);
    for group in table::digit_groups(n) {
        numeral.push_str(&group_to_numeral(group)?);
    }

    tracing::trace!(value = n, numeral = %numeral, "generated numeral");
    Ok(numeral)
}

/// Whether a group's leading digit has to be written subtractively (4 and 9).
#[inline]
pub fn requires_subtraction(group: u32) -> bool {
    matches!(table::leading_digit(group), 4 | 9)
}

/// Write one digit group, i.e. a single digit times its power of ten.
///
/// Only the leading digit of `group` matters: 742 is treated as 700 → "DCC".
fn group_to_numeral(group: u32) -> NumeralResult<String> {
    let scale = table::proportional_scale(group);
    let group = table::leading_digit(group) * scale;

    if group == 0 {
        return Ok(String::new());
    }

    // Nothing above M, so thousands are plain repetition.
    if group >= 1000 {
        return Ok("M".repeat((group / 1000) as usize));
    }

    if table::is_symbol_value(group) {
        return Ok(table::symbol_of(group)?.to_string());
    }

    let (lo, hi) = table::boundaries(group);
    let unit = table::symbol_of(scale)?;

    let numeral = if requires_subtraction(group) {
        let reps = ((hi - group) / scale) as usize;
        let mut s = unit.to_string().repeat(reps);
        s.push(table::symbol_of(hi)?);
        s
    } else {
        let reps = ((group - lo) / scale) as usize;
        let mut s = table::symbol_of(lo)?.to_string();
        s.push_str(&unit.to_string().repeat(reps));
        s
    };

    Ok(numeral)
}
