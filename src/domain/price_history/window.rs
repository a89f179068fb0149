//! Lookback window selection and observation filtering.

use super::Observation;
use crate::shared::Period;
use serde::{Deserialize, Serialize};

/// Time range a price history covers, in Unix seconds.
///
/// Only `start_time` bounds filtering; `end_time` records the `now` the
/// window was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub start_time: i64,
    pub end_time: i64,
}

impl Window {
    /// Derive the window ending at `now`: `start_time = now - period.seconds()`,
    /// saturating at `i64::MIN`.
    pub fn select(period: Period, now: i64) -> Self {
        Self {
            start_time: now.saturating_sub(period.seconds()),
            end_time: now,
        }
    }

    /// Inclusive lower-bound check.
    pub fn contains(&self, timestamp: i64) -> bool {
        timestamp >= self.start_time
    }
}

/// Keep the observations at or after the window start, in input order.
pub fn filter_observations<'a>(
    observations: &'a [Observation],
    window: &Window,
) -> Vec<&'a Observation> {
    observations
        .iter()
        .filter(|o| window.contains(o.timestamp))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::U256;

    const NOW: i64 = 1_700_000_000;

    fn obs(timestamp: i64) -> Observation {
        Observation::new(timestamp, U256::from(timestamp as u64))
    }

    #[test]
    fn test_select_is_exact_for_every_period() {
        for period in Period::ALL {
            let window = Window::select(period, NOW);
            assert_eq!(window.start_time, NOW - period.seconds());
            assert_eq!(window.end_time, NOW);
        }
        assert_eq!(Window::select(Period::Hour1, NOW).start_time, NOW - 3600);
        assert_eq!(Window::select(Period::Day30, NOW).start_time, NOW - 2_592_000);
    }

    #[test]
    fn test_select_allows_negative_start() {
        let window = Window::select(Period::Day7, 100);
        assert_eq!(window.start_time, 100 - 604_800);
        assert!(window.contains(0));
    }

    #[test]
    fn test_select_saturates_near_i64_min() {
        let window = Window::select(Period::Hour1, i64::MIN + 10);
        assert_eq!(window.start_time, i64::MIN);
        assert_eq!(window.end_time, i64::MIN + 10);
        assert!(window.contains(i64::MIN));
    }

    #[test]
    fn test_filter_boundary() {
        let window = Window::select(Period::Hour1, NOW);
        let input = vec![obs(window.start_time - 1), obs(window.start_time)];
        let kept = filter_observations(&input, &window);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].timestamp, window.start_time);
    }

    #[test]
    fn test_filter_preserves_input_order() {
        let window = Window::select(Period::Hour24, NOW);
        let input = vec![obs(NOW), obs(NOW - 90_000), obs(NOW - 10), obs(NOW - 50)];
        let kept: Vec<i64> = filter_observations(&input, &window)
            .iter()
            .map(|o| o.timestamp)
            .collect();
        assert_eq!(kept, vec![NOW, NOW - 10, NOW - 50]);
    }

    #[test]
    fn test_filter_empty_input() {
        let window = Window::select(Period::Hour1, NOW);
        assert!(filter_observations(&[], &window).is_empty());
    }
}
