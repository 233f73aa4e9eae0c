// ============================================================================
// Batch Module
// Lazy parsing over many numerals, built only on the public converter API
// ============================================================================

mod numeral_parser;

pub use numeral_parser::{NumeralParser, NumeralParserIter};
