// ============================================================================
// Batch Configuration
// How a batch of numerals is parsed and how it reports failures
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Batch Mode
// ============================================================================

/// What a batch does when it meets a malformed numeral
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BatchMode {
    /// Yield the first error, then stop
    #[default]
    FailFast,

    /// Yield one result per input, errors included
    CollectAll,
}

// ============================================================================
// Complete Batch Configuration
// ============================================================================

/// Configuration for a [`NumeralParser`](crate::batch::NumeralParser)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BatchConfig {
    /// Label attached to the batch's tracing events
    pub name: String,

    /// Failure handling
    pub mode: BatchMode,
}

impl BatchConfig {
    /// Create a new configuration with required parameters
    pub fn new(name: String, mode: BatchMode) -> Self {
        Self { name, mode }
    }

    /// Builder method: Set failure handling
    pub fn with_mode(mut self, mode: BatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Batch name cannot be empty".to_string());
        }
        Ok(())
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Stop at the first malformed numeral
    pub fn fail_fast(name: String) -> Self {
        Self::new(name, BatchMode::FailFast)
    }

    /// Report every malformed numeral alongside the parsed ones
    pub fn collect_all(name: String) -> Self {
        Self::new(name, BatchMode::CollectAll)
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self::fail_fast("numerals".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = BatchConfig::new("ledger".to_string(), BatchMode::CollectAll);

        assert_eq!(config.name, "ledger");
        assert_eq!(config.mode, BatchMode::CollectAll);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = BatchConfig::fail_fast("ledger".to_string()).with_mode(BatchMode::CollectAll);
        assert_eq!(config.mode, BatchMode::CollectAll);
    }

    #[test]
    fn test_validation() {
        let config = BatchConfig::fail_fast("  ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_defaults() {
        let config = BatchConfig::default();
        assert_eq!(config.mode, BatchMode::FailFast);
        assert_eq!(BatchMode::default(), BatchMode::FailFast);
        assert!(config.validate().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let config = BatchConfig::collect_all("ledger".to_string());
        let json = serde_json::to_string(&config).unwrap();
        let back: BatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
