// ============================================================================
// Utilities Module
// Helper functions for hosts embedding the converter
// ============================================================================

mod logging;

pub use logging::{init_logging, DEFAULT_FILTER};
