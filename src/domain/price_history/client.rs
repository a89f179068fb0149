//! Price history client — fetches observations from an injected oracle
//! source and runs the pipeline.
//!
//! No caching, dedup, or retry happens here. Those belong to the caller's
//! request layer.

use super::{
    observations_for_side, HistoryConfig, NoVolume, PriceHistory, PriceHistoryEngine,
    VolumeSource,
};
use super::wire::OracleObservation;
use crate::error::{SdkError, SourceError};
use crate::shared::{now_unix, PairAddress, PairSide, Period};
use std::future::Future;
use std::str::FromStr;

/// The oracle collaborator: returns a pair's observations in any order.
pub trait ObservationSource {
    type Error: Into<SourceError>;

    fn observations(
        &self,
        pair: &PairAddress,
    ) -> impl Future<Output = Result<Vec<OracleObservation>, Self::Error>> + Send;
}

/// Parameters for one price history computation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceHistoryRequest {
    /// Pair to query (required; `None` fails with `MissingPair`).
    pub pair: Option<PairAddress>,
    /// Which accumulator of the pair to read.
    pub side: PairSide,
    /// Lookback window.
    pub period: Period,
    /// Reference time in Unix seconds; wall clock when unset.
    pub now: Option<i64>,
}

impl PriceHistoryRequest {
    /// Create a request with the required pair.
    pub fn new(pair: impl Into<PairAddress>) -> Self {
        Self {
            pair: Some(pair.into()),
            ..Default::default()
        }
    }

    /// Set pair side.
    pub fn with_side(mut self, side: PairSide) -> Self {
        self.side = side;
        self
    }

    /// Set period.
    pub fn with_period(mut self, period: Period) -> Self {
        self.period = period;
        self
    }

    /// Set period from its token (`"1h"`, `"24h"`, `"7d"`, `"30d"`).
    pub fn with_period_token(self, token: &str) -> Result<Self, SdkError> {
        Ok(self.with_period(Period::from_str(token)?))
    }

    /// Pin the reference time.
    pub fn with_now(mut self, now: i64) -> Self {
        self.now = Some(now);
        self
    }
}

/// Computes price histories from an [`ObservationSource`].
pub struct PriceHistoryClient<S, V = NoVolume> {
    source: S,
    engine: PriceHistoryEngine<V>,
}

impl<S: ObservationSource> PriceHistoryClient<S, NoVolume> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, HistoryConfig::default())
    }

    pub fn with_config(source: S, config: HistoryConfig) -> Self {
        Self {
            source,
            engine: PriceHistoryEngine::new(config),
        }
    }
}

impl<S: ObservationSource, V: VolumeSource> PriceHistoryClient<S, V> {
    /// Replace the volume collaborator.
    pub fn with_volume<W: VolumeSource>(self, volume: W) -> PriceHistoryClient<S, W> {
        PriceHistoryClient {
            source: self.source,
            engine: self.engine.with_volume(volume),
        }
    }

    pub fn engine(&self) -> &PriceHistoryEngine<V> {
        &self.engine
    }

    /// Fetch observations for the request's pair and compute its history.
    ///
    /// Fails with `MissingPair` before contacting the source when no pair is
    /// set. Source errors are returned as `SdkError::Source` untouched.
    pub async fn get(&self, request: &PriceHistoryRequest) -> Result<PriceHistory, SdkError> {
        let pair = request.pair.as_ref().ok_or(SdkError::MissingPair)?;
        let now = request.now.unwrap_or_else(now_unix);

        let wire = self
            .source
            .observations(pair)
            .await
            .map_err(SdkError::from_source)?;
        let observations = observations_for_side(&wire, request.side)?;

        tracing::debug!(
            pair = %pair,
            side = %request.side,
            period = %request.period,
            now,
            "Fetched {} observation(s)",
            observations.len()
        );

        Ok(self.engine.compute(&observations, request.period, now))
    }
}
