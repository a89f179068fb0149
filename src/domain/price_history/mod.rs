//! Price history domain — windowed price series and summary statistics
//! derived from cumulative-price oracle observations.
//!
//! Pipeline: window selection → observation filter → point normalization →
//! chronological sort → statistics. Everything here is pure and synchronous;
//! only [`client`] touches an (injected) data source.

pub mod client;
pub mod config;
mod convert;
pub mod normalize;
pub mod stats;
pub mod volume;
pub mod wire;
pub mod window;

pub use client::{ObservationSource, PriceHistoryClient, PriceHistoryRequest};
pub use config::HistoryConfig;
pub use convert::{observations_for_side, parse_accumulator};
pub use normalize::PriceMode;
pub use stats::PriceStats;
pub use volume::{NoVolume, VolumeSource};
pub use window::Window;

use crate::shared::serde_util::u256_string;
use crate::shared::{Period, ScaleDivisor};
use alloy_primitives::U256;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A raw cumulative-price sample for one side of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Unix timestamp in seconds.
    pub timestamp: i64,
    /// Fixed-point accumulator, non-decreasing over time.
    #[serde(with = "u256_string")]
    pub cumulative_price: U256,
}

impl Observation {
    pub fn new(timestamp: i64, cumulative_price: U256) -> Self {
        Self {
            timestamp,
            cumulative_price,
        }
    }
}

/// A single point of the price series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Unix timestamp in seconds.
    pub timestamp: i64,
    pub price: Decimal,
    /// Same as `price`; no separate USD conversion is applied.
    pub price_usd: Decimal,
    #[serde(with = "u256_string")]
    pub volume: U256,
}

impl PricePoint {
    pub fn new(timestamp: i64, price: Decimal, volume: U256) -> Self {
        Self {
            timestamp,
            price,
            price_usd: price,
            volume,
        }
    }

    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.timestamp, 0)
    }
}

/// Price series for one window plus its summary statistics.
///
/// Built fresh per computation and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceHistory {
    /// Ascending by timestamp.
    pub points: Vec<PricePoint>,
    pub min_price: Decimal,
    pub max_price: Decimal,
    pub average_price: Decimal,
    pub current_price: Decimal,
    #[serde(with = "u256_string")]
    pub total_volume: U256,
    pub percent_change: Decimal,
}

impl PriceHistory {
    /// Build from points already sorted ascending by timestamp.
    pub fn from_points(points: Vec<PricePoint>) -> Self {
        let stats = PriceStats::from_points(&points);
        Self {
            points,
            min_price: stats.min_price,
            max_price: stats.max_price,
            average_price: stats.average_price,
            current_price: stats.current_price,
            total_volume: stats.total_volume,
            percent_change: stats.percent_change,
        }
    }

    pub fn stats(&self) -> PriceStats {
        PriceStats {
            min_price: self.min_price,
            max_price: self.max_price,
            average_price: self.average_price,
            current_price: self.current_price,
            total_volume: self.total_volume,
            percent_change: self.percent_change,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }
}

/// Runs the price history pipeline with a fixed configuration.
#[derive(Debug, Clone)]
pub struct PriceHistoryEngine<V = NoVolume> {
    config: HistoryConfig,
    scale: ScaleDivisor,
    volume: V,
}

impl Default for PriceHistoryEngine<NoVolume> {
    fn default() -> Self {
        Self::new(HistoryConfig::default())
    }
}

impl PriceHistoryEngine<NoVolume> {
    pub fn new(config: HistoryConfig) -> Self {
        Self {
            scale: config.scale(),
            config,
            volume: NoVolume,
        }
    }
}

impl<V: VolumeSource> PriceHistoryEngine<V> {
    /// Replace the volume collaborator.
    pub fn with_volume<W: VolumeSource>(self, volume: W) -> PriceHistoryEngine<W> {
        PriceHistoryEngine {
            config: self.config,
            scale: self.scale,
            volume,
        }
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    /// Compute the price history of `observations` over `period` ending at `now`.
    pub fn compute(&self, observations: &[Observation], period: Period, now: i64) -> PriceHistory {
        let window = Window::select(period, now);
        let retained = window::filter_observations(observations, &window);

        let points = match self.config.mode {
            PriceMode::Cumulative => {
                let mut points: Vec<PricePoint> = retained
                    .iter()
                    .map(|o| normalize::normalize(o, &self.scale, &self.volume))
                    .collect();
                normalize::sort_points(&mut points);
                points
            }
            PriceMode::TimeWeighted => {
                normalize::time_weighted_points(&retained, &self.scale, &self.volume)
            }
        };

        let history = PriceHistory::from_points(points);
        tracing::debug!(
            period = %period,
            start_time = window.start_time,
            end_time = window.end_time,
            observations = observations.len(),
            retained = retained.len(),
            points = history.len(),
            "Computed price history"
        );
        history
    }
}

/// Compute a price history with the default configuration.
pub fn compute_price_history(observations: &[Observation], period: Period, now: i64) -> PriceHistory {
    PriceHistoryEngine::new(HistoryConfig::default()).compute(observations, period, now)
}
