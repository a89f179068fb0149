//! Shared newtypes and utilities used across domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the oracle sends, so they can be used directly in wire types
//! without conversion overhead.

pub mod scaling;
pub mod serde_util;

pub use scaling::{scale_to_decimal, scaled_ratio, ScaleDivisor, ORACLE_PRICE_DECIMALS};

use crate::error::SdkError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ─── PairAddress ─────────────────────────────────────────────────────────────

/// Newtype for trading pair identifiers (e.g. a pool contract address).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PairAddress(String);

impl PairAddress {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PairAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PairAddress {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PairAddress {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// ─── PairSide ────────────────────────────────────────────────────────────────

/// Which of the pair's two accumulators is read.
///
/// `Token0` reads `price0_cumulative` (token0 priced in token1), `Token1`
/// reads `price1_cumulative`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PairSide {
    #[default]
    Token0,
    Token1,
}

impl std::fmt::Display for PairSide {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            PairSide::Token0 => write!(f, "token0"),
            PairSide::Token1 => write!(f, "token1"),
        }
    }
}

// ─── Period ──────────────────────────────────────────────────────────────────

/// Lookback window for a price history query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "1h")]
    Hour1,
    #[default]
    #[serde(rename = "24h")]
    Hour24,
    #[serde(rename = "7d")]
    Day7,
    #[serde(rename = "30d")]
    Day30,
}

impl Period {
    pub const ALL: [Period; 4] = [Period::Hour1, Period::Hour24, Period::Day7, Period::Day30];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hour1 => "1h",
            Self::Hour24 => "24h",
            Self::Day7 => "7d",
            Self::Day30 => "30d",
        }
    }

    /// Length of the window in seconds.
    pub fn seconds(&self) -> i64 {
        match self {
            Self::Hour1 => 3_600,
            Self::Hour24 => 86_400,
            Self::Day7 => 604_800,
            Self::Day30 => 2_592_000,
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Period {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| SdkError::InvalidPeriod(s.to_string()))
    }
}

// ─── Utilities ───────────────────────────────────────────────────────────────

/// Current wall-clock time in Unix seconds.
///
/// Only a convenience for callers; every computation takes `now` explicitly.
pub fn now_unix() -> i64 {
    chrono::Utc::now().timestamp()
}
