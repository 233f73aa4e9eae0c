// ============================================================================
// Domain Models Module
// Numeral value type and batch configuration
// ============================================================================

pub mod config;
pub mod roman;

pub use config::{BatchConfig, BatchMode};
pub use roman::RomanNumeral;
