//! Wire types for raw oracle observations.

use crate::error::SdkError;
use crate::shared::PairAddress;
use serde::{Deserialize, Serialize};

/// A single oracle observation as reported by the data source.
///
/// Accumulators are decimal or `0x`-hex strings since they exceed `u64`.
/// Some oracles report only the token0 accumulator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleObservation {
    pub timestamp: i64,
    pub price0_cumulative: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price1_cumulative: Option<String>,
}

/// Observation set for one pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleObservationsResponse {
    pub pair: PairAddress,
    #[serde(default)]
    pub observations: Vec<OracleObservation>,
}

impl OracleObservationsResponse {
    /// Decode a raw JSON payload from the oracle.
    pub fn from_json(json: &str) -> Result<Self, SdkError> {
        Ok(serde_json::from_str(json)?)
    }
}
