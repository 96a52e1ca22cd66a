//! Sources for the polarity of texts whose marker counts tie.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait TieBreaker: Send + Sync {
    /// Returns a value in `[low, high]`.
    fn draw(&self, low: f64, high: f64) -> f64;
}

/// Uniform draw, the production behaviour: tied input is treated as
/// ambiguous and lands somewhere in the neutral band.
pub struct RandomTieBreaker {
    rng: Mutex<StdRng>,
}

impl RandomTieBreaker {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomTieBreaker {
    fn default() -> Self {
        Self::new()
    }
}

impl TieBreaker for RandomTieBreaker {
    fn draw(&self, low: f64, high: f64) -> f64 {
        if low >= high {
            return low;
        }
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        rng.gen_range(low..=high)
    }
}

/// Always returns the same value, clamped into the requested range.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedTieBreaker(pub f64);

impl TieBreaker for FixedTieBreaker {
    fn draw(&self, low: f64, high: f64) -> f64 {
        self.0.clamp(low, high)
    }
}
