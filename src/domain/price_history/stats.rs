//! Summary statistics over an ordered price series.
//!
//! Every reduction is total: an empty series yields zeros rather than
//! an undefined min/max/mean.

use super::PricePoint;
use alloy_primitives::U256;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::shared::serde_util::u256_string;

/// Aggregates of a price series sorted ascending by timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceStats {
    pub min_price: Decimal,
    pub max_price: Decimal,
    pub average_price: Decimal,
    pub current_price: Decimal,
    #[serde(with = "u256_string")]
    pub total_volume: U256,
    pub percent_change: Decimal,
}

impl PriceStats {
    /// Reduce `points` (assumed sorted ascending by timestamp).
    pub fn from_points(points: &[PricePoint]) -> Self {
        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            return Self::default();
        };

        let min_price = points.iter().map(|p| p.price).min().unwrap_or_default();
        let max_price = points.iter().map(|p| p.price).max().unwrap_or_default();

        Self {
            min_price,
            max_price,
            average_price: mean(points).clamp(min_price, max_price),
            current_price: last.price,
            total_volume: points
                .iter()
                .fold(U256::ZERO, |acc, p| acc.saturating_add(p.volume)),
            percent_change: percent_change(first.price, last.price),
        }
    }
}

/// `(last - first) / first * 100`, or zero when `first` is zero.
///
/// Overflow saturates toward the sign of the change.
pub fn percent_change(first: Decimal, last: Decimal) -> Decimal {
    if first.is_zero() {
        return Decimal::ZERO;
    }

    last.checked_sub(first)
        .and_then(|diff| diff.checked_div(first))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or_else(|| {
            tracing::warn!("Percent change from {} to {} overflows, saturating", first, last);
            if (last > first) == first.is_sign_positive() {
                Decimal::MAX
            } else {
                Decimal::MIN
            }
        })
}

fn mean(points: &[PricePoint]) -> Decimal {
    if points.is_empty() {
        return Decimal::ZERO;
    }

    let count = Decimal::from(points.len());
    match points
        .iter()
        .try_fold(Decimal::ZERO, |acc, p| acc.checked_add(p.price))
    {
        Some(sum) => sum / count,
        // Running mean when the plain sum leaves Decimal range.
        None => points
            .iter()
            .enumerate()
            .fold(Decimal::ZERO, |avg, (i, p)| {
                avg + (p.price - avg) / Decimal::from(i + 1)
            }),
    }
}
