//! Conversions from wire types to domain types for price history.

use super::wire::OracleObservation;
use super::Observation;
use crate::error::SdkError;
use crate::shared::PairSide;
use alloy_primitives::U256;
use std::str::FromStr;

/// Parse an accumulator string (decimal or `0x`-prefixed hex).
pub fn parse_accumulator(raw: &str) -> Result<U256, SdkError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SdkError::InvalidAccumulator {
            value: raw.to_string(),
            reason: "empty accumulator".to_string(),
        });
    }
    U256::from_str(trimmed).map_err(|e| SdkError::InvalidAccumulator {
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

impl OracleObservation {
    /// Read the accumulator for `side` into a core observation.
    pub fn to_observation(&self, side: PairSide) -> Result<Observation, SdkError> {
        let raw = match side {
            PairSide::Token0 => self.price0_cumulative.as_str(),
            PairSide::Token1 => {
                self.price1_cumulative
                    .as_deref()
                    .ok_or_else(|| SdkError::InvalidAccumulator {
                        value: String::new(),
                        reason: format!("observation at {} has no price1_cumulative", self.timestamp),
                    })?
            }
        };
        Ok(Observation::new(self.timestamp, parse_accumulator(raw)?))
    }
}

/// Convert a whole observation set for one pair side. Fails on the first bad sample.
pub fn observations_for_side(
    wire: &[OracleObservation],
    side: PairSide,
) -> Result<Vec<Observation>, SdkError> {
    wire.iter().map(|o| o.to_observation(side)).collect()
}
