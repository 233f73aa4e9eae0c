// ============================================================================
// Numeral Parser
// Validated Roman numeral → integer via signed-term summation
// ============================================================================

use super::validator;
use crate::numeral::table;
use crate::numeral::{NumeralError, NumeralResult};
use smallvec::SmallVec;

/// Parse a Roman numeral into its integer value.
///
/// Each symbol becomes a positive term. Wherever a term is smaller than the
/// one after it, that term and the run of equal terms directly before it are
/// negated, so "IIIX" reads as -1 -1 -1 +10 = 7. The terms are then summed.
///
/// # Errors
/// Returns `MalformedNumeral` if [`validate`](super::validate) rejects `s`.
///
/// # Example
/// ```
/// use roman_numerals::converter::parse;
///
/// assert_eq!(parse("MCMLXXXIV").unwrap(), 1984);
/// assert_eq!(parse("IIIX").unwrap(), 7);
/// assert!(parse("IIII").is_err());
/// ```
pub fn parse(s: &str) -> NumeralResult<u32> {
    if let Some(violation) = validator::find_violation(s) {
        tracing::debug!(numeral = s, %violation, "refusing to parse malformed numeral");
        return Err(NumeralError::MalformedNumeral(s.to_string()));
    }

    let mut terms = s
        .chars()
        .map(|c| table::value_of(c).map(i64::from))
        .collect::<NumeralResult<SmallVec<[i64; 16]>>>()?;

    negate_subtractive_runs(&mut terms);

    let total: i64 = terms.iter().sum();
    tracing::trace!(numeral = s, total, "parsed numeral");

    u32::try_from(total).map_err(|_| NumeralError::MalformedNumeral(s.to_string()))
}

/// Negate every term that is subtracted from its successor, together with
/// the run of equal magnitude immediately before it.
fn negate_subtractive_runs(terms: &mut [i64]) {
    for i in 1..terms.len() {
        let prev = terms[i - 1].abs();
        if prev < terms[i].abs() {
            for term in terms[..i].iter_mut().rev() {
                if term.abs() != prev {
                    break;
                }
                *term = -*term;
            }
        }
    }
}
