//! Configuration for price history computation.

use super::normalize::PriceMode;
use crate::shared::{ScaleDivisor, ORACLE_PRICE_DECIMALS};
use serde::{Deserialize, Serialize};

/// Tunables for turning observations into a price history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Fixed-point precision of the oracle accumulators.
    pub scale_decimals: u8,
    /// How point prices are derived from accumulator samples.
    pub mode: PriceMode,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            scale_decimals: ORACLE_PRICE_DECIMALS,
            mode: PriceMode::Cumulative,
        }
    }
}

impl HistoryConfig {
    /// Set accumulator precision.
    pub fn with_scale_decimals(mut self, decimals: u8) -> Self {
        self.scale_decimals = decimals;
        self
    }

    /// Set normalization mode.
    pub fn with_mode(mut self, mode: PriceMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn scale(&self) -> ScaleDivisor {
        ScaleDivisor::new(self.scale_decimals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HistoryConfig::default();
        assert_eq!(config.scale_decimals, 18);
        assert_eq!(config.mode, PriceMode::Cumulative);
    }

    #[test]
    fn test_partial_config_deserializes_with_defaults() {
        let config: HistoryConfig = serde_json::from_str(r#"{"mode":"time_weighted"}"#).unwrap();
        assert_eq!(config.mode, PriceMode::TimeWeighted);
        assert_eq!(config.scale_decimals, 18);
    }

    #[test]
    fn test_builder_methods() {
        let config = HistoryConfig::default()
            .with_scale_decimals(6)
            .with_mode(PriceMode::TimeWeighted);
        assert_eq!(config.scale().decimals(), 6);
        assert_eq!(config.mode, PriceMode::TimeWeighted);
    }
}
