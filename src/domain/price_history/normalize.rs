//! Point normalization: cumulative accumulators to decimal point prices.
//!
//! [`PriceMode::Cumulative`] scales each accumulator sample on its own, so the
//! resulting series drifts upward with elapsed time rather than tracking a
//! spot price. [`PriceMode::TimeWeighted`] derives the per-interval
//! time-weighted price from consecutive samples instead.

use super::volume::VolumeSource;
use super::{Observation, PricePoint};
use crate::shared::{scale_to_decimal, scaled_ratio, ScaleDivisor};
use serde::{Deserialize, Serialize};

/// How point prices are derived from accumulator samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceMode {
    /// `price = cumulative_price / 10^decimals`, one point per observation.
    #[default]
    Cumulative,
    /// `price = Δcumulative / Δt / 10^decimals` between consecutive observations.
    TimeWeighted,
}

/// Normalize a single observation into a price point.
pub fn normalize<V: VolumeSource + ?Sized>(
    observation: &Observation,
    scale: &ScaleDivisor,
    volume: &V,
) -> PricePoint {
    let price = scale_to_decimal(observation.cumulative_price, scale);
    PricePoint::new(
        observation.timestamp,
        price,
        volume.volume_at(observation.timestamp),
    )
}

/// Sort points ascending by timestamp. Ties keep their input order.
pub fn sort_points(points: &mut [PricePoint]) {
    points.sort_by_key(|p| p.timestamp);
}

/// Derive time-weighted points from consecutive observations.
///
/// The earliest observation only anchors the first interval, so `n`
/// observations yield at most `n - 1` points. Intervals with no elapsed time,
/// an elapsed time that overflows `i64`, or a decreasing accumulator are
/// skipped. Output is sorted.
pub fn time_weighted_points<V: VolumeSource + ?Sized>(
    observations: &[&Observation],
    scale: &ScaleDivisor,
    volume: &V,
) -> Vec<PricePoint> {
    let mut sorted = observations.to_vec();
    sorted.sort_by_key(|o| o.timestamp);

    sorted
        .windows(2)
        .filter_map(|pair| {
            let (prev, cur) = (pair[0], pair[1]);
            let elapsed = match cur.timestamp.checked_sub(prev.timestamp) {
                Some(elapsed) if elapsed > 0 => elapsed,
                _ => {
                    tracing::debug!(
                        "Skipping interval without a usable elapsed time between {} and {}",
                        prev.timestamp,
                        cur.timestamp
                    );
                    return None;
                }
            };
            let Some(delta) = cur.cumulative_price.checked_sub(prev.cumulative_price) else {
                tracing::warn!(
                    "Accumulator decreased between {} and {}, skipping interval",
                    prev.timestamp,
                    cur.timestamp
                );
                return None;
            };
            Some(PricePoint::new(
                cur.timestamp,
                scaled_ratio(delta, elapsed as u64, scale),
                volume.volume_at(cur.timestamp),
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::price_history::volume::NoVolume;
    use alloy_primitives::U256;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    const E18: u128 = 1_000_000_000_000_000_000;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn obs(timestamp: i64, cumulative: u128) -> Observation {
        Observation::new(timestamp, U256::from(cumulative))
    }

    #[test]
    fn test_normalize_scales_by_1e18() {
        let point = normalize(&obs(100, 2 * E18), &ScaleDivisor::default(), &NoVolume);
        assert_eq!(point.timestamp, 100);
        assert_eq!(point.price, dec("2"));
        assert_eq!(point.price_usd, point.price);
        assert_eq!(point.volume, U256::ZERO);
    }

    #[test]
    fn test_normalize_uses_volume_source() {
        let volume = |ts: i64| U256::from(ts as u64 * 10);
        let point = normalize(&obs(7, E18), &ScaleDivisor::default(), &volume);
        assert_eq!(point.volume, U256::from(70u64));
    }

    #[test]
    fn test_sort_points_is_stable() {
        let mut points = vec![
            PricePoint::new(30, dec("3"), U256::ZERO),
            PricePoint::new(10, dec("1"), U256::ZERO),
            PricePoint::new(30, dec("4"), U256::ZERO),
            PricePoint::new(20, dec("2"), U256::ZERO),
        ];
        sort_points(&mut points);
        let seen: Vec<(i64, Decimal)> = points.iter().map(|p| (p.timestamp, p.price)).collect();
        assert_eq!(
            seen,
            vec![(10, dec("1")), (20, dec("2")), (30, dec("3")), (30, dec("4"))]
        );
    }

    #[test]
    fn test_time_weighted_constant_price() {
        // Price 1.5 held constant: the accumulator grows 1.5e18 per second.
        let rate = 3 * E18 / 2;
        let input = [obs(200, 200 * rate), obs(0, 0), obs(100, 100 * rate)];
        let refs: Vec<&Observation> = input.iter().collect();
        let points = time_weighted_points(&refs, &ScaleDivisor::default(), &NoVolume);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].timestamp, 100);
        assert_eq!(points[1].timestamp, 200);
        assert!(points.iter().all(|p| p.price == dec("1.5")));
    }

    #[test]
    fn test_time_weighted_skips_degenerate_intervals() {
        let input = [obs(0, 10 * E18), obs(0, 11 * E18), obs(10, 5 * E18), obs(20, 25 * E18)];
        let refs: Vec<&Observation> = input.iter().collect();
        let points = time_weighted_points(&refs, &ScaleDivisor::default(), &NoVolume);
        // (0 -> 0) no elapsed time, (0 -> 10) decreasing, (10 -> 20) = 20e18 / 10s.
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].timestamp, 20);
        assert_eq!(points[0].price, dec("2"));
    }

    #[test]
    fn test_time_weighted_skips_overflowing_interval() {
        let input = [obs(i64::MAX, 10), obs(-3000, 0)];
        let refs: Vec<&Observation> = input.iter().collect();
        let points = time_weighted_points(&refs, &ScaleDivisor::default(), &NoVolume);
        // i64::MAX - (-3000) does not fit in i64.
        assert!(points.is_empty());
    }

    #[test]
    fn test_time_weighted_needs_two_observations() {
        let input = [obs(0, E18)];
        let refs: Vec<&Observation> = input.iter().collect();
        assert!(time_weighted_points(&refs, &ScaleDivisor::default(), &NoVolume).is_empty());
    }
}
