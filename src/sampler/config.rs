//! Sampler configuration parameters.

use serde::{Deserialize, Serialize};

/// Number of cards in a deck.
pub const DECK_SIZE: usize = 8;

/// Sampler configuration parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// Cards per deck (default: 8).
    pub deck_size: usize,

    /// Maximum full-assembly attempts when a target elixir is set
    /// (default: 1000). Exhaustion is an explicit failure, never a
    /// best-effort deck.
    pub max_attempts: u32,

    /// Accepted distance from the target average elixir (default: 0.2).
    pub tolerance: f64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            deck_size: DECK_SIZE,
            max_attempts: 1000,
            tolerance: 0.2,
        }
    }
}

impl SamplerConfig {
    /// Create a config with a custom attempt budget.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Create a config with a custom elixir tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}
