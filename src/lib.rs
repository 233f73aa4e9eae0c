// ============================================================================
// Roman Numerals Library
// Strict conversion between integers and Roman numerals in [1, 3999]
// ============================================================================

//! # Roman Numerals
//!
//! Converts integers to canonical Roman numerals, validates numeral strings
//! against Roman grammar, and parses them back into integers.
//!
//! ## Features
//!
//! - **Canonical generation**: `4 → IV`, `3999 → MMMCMXCIX`, never `IIII`
//! - **Strict validation**: alphabet, subtractive-pair legality and repetition limits
//! - **Signed-term parsing**: tolerates rule-conforming runs such as `IIIX` (7)
//! - **Lazy batch parsing** with fail-fast or collect-all error handling
//! - Optional `serde` support and `tracing` subscriber bootstrap (`logging`)
//!
//! ## Example
//!
//! ```rust
//! use roman_numerals::prelude::*;
//!
//! let numeral = to_numeral(1984).unwrap();
//! assert_eq!(numeral, "MCMLXXXIV");
//! assert!(validate(&numeral));
//! assert_eq!(parse(&numeral).unwrap(), 1984);
//!
//! // Generation is canonical, parsing is more lenient
//! assert!(validate("IIIX"));
//! assert_eq!(parse("IIIX").unwrap(), 7);
//!
//! assert_eq!(to_numeral(4000), Err(NumeralError::OutOfRange(4000)));
//!
//! let parser = NumeralParser::new(["XII", "IV"]);
//! assert_eq!(parser.as_parsed_list().unwrap(), vec![12, 4]);
//! ```

pub mod batch;
pub mod converter;
pub mod domain;
pub mod numeral;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::batch::{NumeralParser, NumeralParserIter};
    pub use crate::converter::{parse, to_numeral, validate};
    pub use crate::domain::{BatchConfig, BatchMode, RomanNumeral};
    pub use crate::numeral::{NumeralError, NumeralResult, MAX_VALUE, MIN_VALUE};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_round_trip_full_range() {
        for n in MIN_VALUE..=MAX_VALUE {
            let numeral = to_numeral(n).unwrap();
            assert!(validate(&numeral), "{} -> {} failed validation", n, numeral);
            assert_eq!(parse(&numeral).unwrap(), n, "{} -> {}", n, numeral);
        }
    }

    #[test]
    fn test_generated_numerals_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for n in MIN_VALUE..=MAX_VALUE {
            assert!(seen.insert(to_numeral(n).unwrap()));
        }
    }

    #[test]
    fn test_range_limits() {
        assert_eq!(to_numeral(MIN_VALUE - 1), Err(NumeralError::OutOfRange(0)));
        assert_eq!(
            to_numeral(MAX_VALUE + 1),
            Err(NumeralError::OutOfRange(4000))
        );
        assert_eq!(to_numeral(MIN_VALUE).unwrap(), "I");
        assert_eq!(to_numeral(MAX_VALUE).unwrap(), "MMMCMXCIX");
    }

    #[test]
    fn test_malformed_rejection() {
        for s in ["IIII", "VV", "IC", ""] {
            assert!(!validate(s));
            assert_eq!(parse(s), Err(NumeralError::MalformedNumeral(s.to_string())));
        }
    }

    #[test]
    fn test_batch_over_generated_numerals() {
        let numerals: Vec<String> = (MIN_VALUE..=MAX_VALUE)
            .map(|n| RomanNumeral::from_arabic(n).unwrap().into_string())
            .collect();

        let parsed = NumeralParser::new(numerals).as_parsed_list().unwrap();
        let expected: Vec<u32> = (MIN_VALUE..=MAX_VALUE).collect();
        assert_eq!(parsed, expected);
    }
}
