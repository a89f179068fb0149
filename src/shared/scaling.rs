//! Pure conversion from fixed-point oracle integers to display decimals.
//!
//! Exact amounts stay `U256`; the only way into `rust_decimal::Decimal` is
//! through the functions here. Results are lossy past 28 significant digits.
//! No async, no network calls.

use alloy_primitives::U256;
use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Fixed-point precision of the oracle's cumulative price accumulators.
pub const ORACLE_PRICE_DECIMALS: u8 = 18;

/// Largest scale `Decimal` can represent.
pub const MAX_SCALE_DECIMALS: u8 = 28;

/// A `10^decimals` divisor, kept as an exact integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleDivisor {
    decimals: u8,
    divisor: U256,
}

impl ScaleDivisor {
    /// Divisor for `decimals` fractional digits, clamped to [`MAX_SCALE_DECIMALS`].
    pub fn new(decimals: u8) -> Self {
        let decimals = if decimals > MAX_SCALE_DECIMALS {
            tracing::warn!(
                "Scale of {} decimals exceeds Decimal precision, clamping to {}",
                decimals,
                MAX_SCALE_DECIMALS
            );
            MAX_SCALE_DECIMALS
        } else {
            decimals
        };

        Self {
            decimals,
            divisor: U256::from(10u128.pow(decimals as u32)),
        }
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn divisor(&self) -> U256 {
        self.divisor
    }
}

impl Default for ScaleDivisor {
    fn default() -> Self {
        Self::new(ORACLE_PRICE_DECIMALS)
    }
}

/// Convert a fixed-point integer into a decimal: `value / 10^decimals`.
///
/// Saturates to `Decimal::MAX` when the integer part does not fit.
pub fn scale_to_decimal(value: U256, scale: &ScaleDivisor) -> Decimal {
    ratio_to_decimal(value, scale.divisor)
}

/// Convert an accumulator delta into a per-second decimal price:
/// `delta / elapsed / 10^decimals`.
///
/// `elapsed` must be non-zero; a zero interval yields zero.
pub fn scaled_ratio(delta: U256, elapsed: u64, scale: &ScaleDivisor) -> Decimal {
    if elapsed == 0 {
        return Decimal::ZERO;
    }
    ratio_to_decimal(delta, scale.divisor.saturating_mul(U256::from(elapsed)))
}

fn u256_to_decimal(value: U256) -> Option<Decimal> {
    u128::try_from(value).ok().and_then(Decimal::from_u128)
}

fn ratio_to_decimal(numerator: U256, denominator: U256) -> Decimal {
    if denominator.is_zero() {
        return Decimal::ZERO;
    }

    // Shrink both sides until the denominator is representable.
    let ten = U256::from(10u8);
    let (mut num, mut den) = (numerator, denominator);
    while u256_to_decimal(den).is_none() {
        num /= ten;
        den /= ten;
    }

    let whole = match u256_to_decimal(num / den) {
        Some(whole) => whole,
        None => {
            tracing::warn!(
                "Scaled value {} / {} exceeds Decimal range, saturating",
                numerator,
                denominator
            );
            return Decimal::MAX;
        }
    };

    let (Some(rem), Some(den)) = (u256_to_decimal(num % den), u256_to_decimal(den)) else {
        return whole.normalize();
    };
    if den.is_zero() {
        return whole.normalize();
    }

    whole
        .checked_add(rem / den)
        .unwrap_or(Decimal::MAX)
        .normalize()
}
