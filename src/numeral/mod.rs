// ============================================================================
// Numeral Module
// Symbol table, scale arithmetic and error types shared by the converter
// ============================================================================
//
// This module provides:
// - SYMBOLS: the fixed seven-symbol table (I, V, X, L, C, D, M)
// - Lookups between symbols, values and scale positions
// - Digit-group and boundary arithmetic used by the generator
// - NumeralError: Error types for conversion and parsing
//
// Design principles:
// - Table is a compile-time constant, no synchronization needed
// - All lookups return Result (no silent fallbacks, no panics)

mod errors;
pub mod table;

pub use errors::{NumeralError, NumeralResult};
pub use table::{MAX_VALUE, MIN_VALUE, SYMBOLS};
