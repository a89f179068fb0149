//! # Oracle Price History
//!
//! Windowed price series and summary statistics for a trading pair, derived
//! from raw cumulative-price oracle observations.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Shared** — Newtypes (`PairAddress`, `Period`, `PairSide`) and fixed-point scaling
//! 2. **Domain** — The pure pipeline: window → filter → normalize → sort → statistics
//! 3. **Client** — `PriceHistoryClient` over an injected `ObservationSource`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use oracle_price_history::prelude::*;
//!
//! let history = compute_price_history(&observations, Period::Hour24, now);
//! println!("{} -> {} ({}%)", history.min_price, history.max_price, history.percent_change);
//! ```

// ── Layer 1: Shared ──────────────────────────────────────────────────────────

/// Shared newtypes and fixed-point conversions.
pub mod shared;

/// Unified error types.
pub mod error;

// ── Layer 2/3: Domain + client ───────────────────────────────────────────────

/// Domain modules (vertical slices): types, wire types, conversions, client.
pub mod domain;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{now_unix, PairAddress, PairSide, Period, ScaleDivisor};

    // Domain types — price history
    pub use crate::domain::price_history::wire::{OracleObservation, OracleObservationsResponse};
    pub use crate::domain::price_history::{
        compute_price_history, HistoryConfig, NoVolume, Observation, ObservationSource,
        PriceHistory, PriceHistoryClient, PriceHistoryEngine, PriceHistoryRequest, PriceMode,
        PricePoint, PriceStats, VolumeSource, Window,
    };

    // Errors
    pub use crate::error::SdkError;
}
