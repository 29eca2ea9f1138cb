//! Rotation interval domain type.

use std::time::Duration;

/// Shortest allowed rotation cadence.
pub const MIN_ROTATION_INTERVAL_MS: u64 = 1_000;
/// Longest allowed rotation cadence.
pub const MAX_ROTATION_INTERVAL_MS: u64 = 60_000;
/// Cadence of the quote carousel on the original page.
pub const DEFAULT_ROTATION_INTERVAL_MS: u64 = 5_000;

/// Time between automatic advances, in milliseconds.
///
/// Values outside 1–60 s are clamped, so a zero interval can never reach
/// the timer.
///
/// ```
/// use folio::rotation::RotationInterval;
///
/// assert_eq!(RotationInterval::from_millis(250).as_millis(), 1_000);
/// assert_eq!(RotationInterval::from_millis(5_000).as_millis(), 5_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationInterval(u64);

impl RotationInterval {
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(MIN_ROTATION_INTERVAL_MS, MAX_ROTATION_INTERVAL_MS))
    }

    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for RotationInterval {
    fn default() -> Self {
        Self(DEFAULT_ROTATION_INTERVAL_MS)
    }
}
