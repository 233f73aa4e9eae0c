// ============================================================================
// Roman Numeral Value Type
// Owned numeral text with conversion to and from integers
// ============================================================================

use crate::converter;
use crate::numeral::{NumeralError, NumeralResult};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A Roman numeral as written.
///
/// [`RomanNumeral::new`] stores any text unchecked; a malformed numeral is
/// only reported when it is parsed. Use [`validate`](Self::validate) first,
/// or build through `FromStr`, which rejects malformed input up front.
///
/// # Example
/// ```
/// use roman_numerals::domain::RomanNumeral;
///
/// let numeral = RomanNumeral::from_arabic(1984).unwrap();
/// assert_eq!(numeral.as_str(), "MCMLXXXIV");
/// assert_eq!(numeral.parse().unwrap(), 1984);
///
/// let checked: RomanNumeral = "XLII".parse().unwrap();
/// assert_eq!(checked.parse().unwrap(), 42);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RomanNumeral(String);

impl RomanNumeral {
    /// Wrap numeral text without checking it.
    pub fn new(numeral: impl Into<String>) -> Self {
        Self(numeral.into())
    }

    /// Canonical numeral for an integer in [1, 3999].
    ///
    /// # Errors
    /// Returns `OutOfRange` if `n` cannot be written as a Roman numeral.
    pub fn from_arabic(n: u32) -> NumeralResult<Self> {
        converter::to_numeral(n).map(Self)
    }

    /// Whether the stored text is a well-formed numeral.
    #[inline]
    pub fn validate(&self) -> bool {
        converter::validate(&self.0)
    }

    /// Integer value of the numeral.
    ///
    /// # Errors
    /// Returns `MalformedNumeral` if the text fails validation.
    #[inline]
    pub fn parse(&self) -> NumeralResult<u32> {
        converter::parse(&self.0)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RomanNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RomanNumeral {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for RomanNumeral {
    type Err = NumeralError;

    /// Accepts only text that passes validation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if converter::validate(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(NumeralError::MalformedNumeral(s.to_string()))
        }
    }
}

impl TryFrom<u32> for RomanNumeral {
    type Error = NumeralError;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        Self::from_arabic(n)
    }
}
