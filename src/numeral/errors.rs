// ============================================================================
// Numeral Errors
// Error types for Roman numeral conversion, validation and parsing
// ============================================================================

use super::table::{MAX_VALUE, MIN_VALUE};
use std::fmt;

/// Errors that can occur while converting to or from Roman numerals.
///
/// Every variant carries the offending input so callers can report it
/// without keeping their own copy around.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NumeralError {
    /// Integer outside [MIN_VALUE, MAX_VALUE] given to the generator
    OutOfRange(u32),
    /// String rejected by the validator
    MalformedNumeral(String),
    /// Character is not one of the seven symbols
    UnknownSymbol(char),
    /// Value is not one of the seven symbol values
    UnknownValue(u32),
}

impl NumeralError {
    /// Table lookup failures are internal logic errors; range and format
    /// errors are caused by caller input.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            NumeralError::UnknownSymbol(_) | NumeralError::UnknownValue(_)
        )
    }
}

impl fmt::Display for NumeralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumeralError::OutOfRange(n) => write!(
                f,
                "Roman numerals can only represent numbers within the interval [{}, {}]: {}",
                MIN_VALUE, MAX_VALUE, n
            ),
            NumeralError::MalformedNumeral(s) => write!(f, "malformed Roman numeral: {}", s),
            NumeralError::UnknownSymbol(c) => write!(f, "unknown Roman numeral symbol: {:?}", c),
            NumeralError::UnknownValue(v) => {
                write!(f, "no Roman numeral symbol has the value {}", v)
            },
        }
    }
}

impl std::error::Error for NumeralError {}

/// Result type alias for numeral operations
pub type NumeralResult<T> = Result<T, NumeralError>;
