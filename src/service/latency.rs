use std::time::Duration;

/// Simulated round-trip time for each service operation.
///
/// The engine is local, but callers were written against a remote API and
/// expect calls to take a moment. Tests use [`LatencyProfile::none`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    pub analyze: Duration,
    /// Batch delay is `max(batch_floor, batch_per_item * items)`
    pub batch_floor: Duration,
    pub batch_per_item: Duration,
    pub history: Duration,
    pub stats: Duration,
    pub search: Duration,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self::simulated()
    }
}

impl LatencyProfile {
    pub fn simulated() -> Self {
        Self {
            analyze: Duration::from_millis(800),
            batch_floor: Duration::from_millis(1000),
            batch_per_item: Duration::from_millis(200),
            history: Duration::from_millis(300),
            stats: Duration::from_millis(200),
            search: Duration::from_millis(400),
        }
    }

    pub fn none() -> Self {
        Self {
            analyze: Duration::ZERO,
            batch_floor: Duration::ZERO,
            batch_per_item: Duration::ZERO,
            history: Duration::ZERO,
            stats: Duration::ZERO,
            search: Duration::ZERO,
        }
    }

    pub fn from_enabled(enabled: bool) -> Self {
        if enabled {
            Self::simulated()
        } else {
            Self::none()
        }
    }

    pub fn batch(&self, items: usize) -> Duration {
        let scaled = self
            .batch_per_item
            .saturating_mul(u32::try_from(items).unwrap_or(u32::MAX));
        scaled.max(self.batch_floor)
    }
}

pub(crate) async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
