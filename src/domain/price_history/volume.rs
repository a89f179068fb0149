//! Trade-volume lookup used to populate `PricePoint::volume`.

use alloy_primitives::U256;

/// Supplies the traded volume recorded at an observation timestamp.
///
/// Any `Fn(i64) -> U256` closure is a volume source.
pub trait VolumeSource {
    fn volume_at(&self, timestamp: i64) -> U256;
}

/// No volume data wired in; every point reports zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoVolume;

impl VolumeSource for NoVolume {
    fn volume_at(&self, _timestamp: i64) -> U256 {
        U256::ZERO
    }
}

impl<F> VolumeSource for F
where
    F: Fn(i64) -> U256,
{
    fn volume_at(&self, timestamp: i64) -> U256 {
        self(timestamp)
    }
}
