//! Slider values for the per-rarity and per-archetype counts.

use serde::{Deserialize, Serialize};

/// One slider's position.
///
/// `Random` is a sentinel distinct from `Exact(0)`: a random slider leaves
/// its axis unconstrained, while an explicit zero excludes matching cards
/// from the pool entirely.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SliderValue {
    /// No constraint; matching cards may appear freely.
    #[default]
    Random,
    /// Exactly this many matching cards; zero excludes them.
    Exact(u8),
}

impl SliderValue {
    /// The explicit count, or `None` for the random sentinel.
    #[must_use]
    pub fn exact(self) -> Option<u8> {
        match self {
            SliderValue::Random => None,
            SliderValue::Exact(n) => Some(n),
        }
    }

    /// Whether this slider is the random sentinel.
    #[must_use]
    pub fn is_random(self) -> bool {
        self == SliderValue::Random
    }

    /// Whether this slider excludes its axis (explicit zero).
    #[must_use]
    pub fn is_exclusion(self) -> bool {
        self == SliderValue::Exact(0)
    }
}
