// ============================================================================
// Converter Module
// Generation, validation and parsing of Roman numerals
// ============================================================================
//
// Generation only ever emits canonical numerals. Validation and parsing
// accept any string that obeys the pairwise rules, which includes some
// non-canonical forms ("IIIX" = 7). Both directions are kept as they are;
// the gap between them is intended.

mod generator;
mod parser;
mod validator;

pub use generator::{requires_subtraction, to_numeral};
pub use parser::parse;
pub use validator::validate;
