// ============================================================================
// Batch Numeral Parser
// Lazily parses a list of numerals in input order
// ============================================================================

use crate::converter;
use crate::domain::{BatchConfig, BatchMode};
use crate::numeral::NumeralResult;
use std::fmt;
use std::iter::FusedIterator;

/// Parses many numerals, one [`parse`](crate::converter::parse) call per
/// input, in input order.
///
/// Iteration consumes the parser. To start again, build a new parser from
/// the same inputs.
///
/// # Example
/// ```
/// use roman_numerals::batch::NumeralParser;
///
/// let parser = NumeralParser::new(["XII", "IV", "MMXXIV"]);
/// assert_eq!(parser.as_parsed_list().unwrap(), vec![12, 4, 2024]);
/// ```
#[derive(Debug, Clone)]
pub struct NumeralParser {
    inputs: Vec<String>,
    config: BatchConfig,
}

impl NumeralParser {
    /// Fail-fast parser over `inputs` with the default configuration.
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            config: BatchConfig::default(),
        }
    }

    /// Parser over `inputs` with an explicit configuration.
    ///
    /// # Returns
    /// * `Result<NumeralParser, String>` - Parser, or the config validation error
    pub fn with_config<I, S>(inputs: I, config: BatchConfig) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        config.validate()?;
        let mut parser = Self::new(inputs);
        parser.config = config;
        Ok(parser)
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Parse every input and collect the values.
    ///
    /// # Errors
    /// Returns `MalformedNumeral` for the first input that fails validation,
    /// whatever the configured mode.
    pub fn as_parsed_list(self) -> NumeralResult<Vec<u32>> {
        self.into_iter().collect()
    }
}

impl fmt::Display for NumeralParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.inputs.join(", "))
    }
}

impl IntoIterator for NumeralParser {
    type Item = NumeralResult<u32>;
    type IntoIter = NumeralParserIter;

    fn into_iter(self) -> Self::IntoIter {
        tracing::debug!(
            batch = %self.config.name,
            mode = ?self.config.mode,
            inputs = self.inputs.len(),
            "starting numeral batch"
        );
        NumeralParserIter {
            inputs: self.inputs.into_iter(),
            config: self.config,
            position: 0,
            finished: false,
        }
    }
}

/// Forward-only iterator produced by [`NumeralParser`].
#[derive(Debug)]
pub struct NumeralParserIter {
    inputs: std::vec::IntoIter<String>,
    config: BatchConfig,
    position: usize,
    finished: bool,
}

impl NumeralParserIter {
    /// Number of inputs consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl Iterator for NumeralParserIter {
    type Item = NumeralResult<u32>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let Some(numeral) = self.inputs.next() else {
            self.finished = true;
            tracing::debug!(batch = %self.config.name, parsed = self.position, "numeral batch exhausted");
            return None;
        };

        let index = self.position;
        self.position += 1;

        let result = converter::parse(&numeral);
        if let Err(ref err) = result {
            tracing::debug!(batch = %self.config.name, index, error = %err, "malformed numeral in batch");
            if self.config.mode == BatchMode::FailFast {
                self.finished = true;
            }
        }

        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            return (0, Some(0));
        }
        let remaining = self.inputs.len();
        match self.config.mode {
            BatchMode::CollectAll => (remaining, Some(remaining)),
            BatchMode::FailFast => (remaining.min(1), Some(remaining)),
        }
    }
}

impl FusedIterator for NumeralParserIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeral::NumeralError;

    #[test]
    fn test_parses_in_order() {
        let parser = NumeralParser::new(vec!["I", "XIV", "MCMXCIX"]);
        assert_eq!(parser.len(), 3);

        let values: Vec<u32> = parser.into_iter().map(Result::unwrap).collect();
        assert_eq!(values, vec![1, 14, 1999]);
    }

    #[test]
    fn test_fail_fast_stops_at_first_error() {
        let parser = NumeralParser::new(["X", "IIII", "V", "VV"]);
        let mut iter = parser.into_iter();

        assert_eq!(iter.next(), Some(Ok(10)));
        assert_eq!(
            iter.next(),
            Some(Err(NumeralError::MalformedNumeral("IIII".to_string())))
        );
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.position(), 2);
    }

    #[test]
    fn test_collect_all_keeps_going() {
        let config = BatchConfig::collect_all("mixed".to_string());
        let parser = NumeralParser::with_config(["X", "IIII", "V", "VV"], config).unwrap();

        let results: Vec<_> = parser.into_iter().collect();
        assert_eq!(results.len(), 4);
        assert_eq!(results[0], Ok(10));
        assert!(results[1].is_err());
        assert_eq!(results[2], Ok(5));
        assert_eq!(
            results[3],
            Err(NumeralError::MalformedNumeral("VV".to_string()))
        );
    }

    #[test]
    fn test_as_parsed_list() {
        let parser = NumeralParser::new(["XL", "IIIX"]);
        assert_eq!(parser.as_parsed_list().unwrap(), vec![40, 7]);

        let parser = NumeralParser::new(["XL", "IC", "X"]);
        assert_eq!(
            parser.as_parsed_list(),
            Err(NumeralError::MalformedNumeral("IC".to_string()))
        );
    }

    #[test]
    fn test_empty_batch() {
        let parser = NumeralParser::new(Vec::<String>::new());
        assert!(parser.is_empty());
        assert_eq!(parser.as_parsed_list().unwrap(), Vec::<u32>::new());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = BatchConfig::fail_fast(String::new());
        assert!(NumeralParser::with_config(["I"], config).is_err());
    }

    #[test]
    fn test_display_lists_inputs() {
        let parser = NumeralParser::new(["I", "II", "III"]);
        assert_eq!(parser.to_string(), "[I, II, III]");
    }

    #[test]
    fn test_size_hint() {
        let parser = NumeralParser::new(["I", "II"]);
        let mut iter = parser.into_iter();
        assert_eq!(iter.size_hint(), (1, Some(2)));
        iter.next();
        iter.next();
        assert_eq!(iter.size_hint(), (0, Some(0)));
    }
}
