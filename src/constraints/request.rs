//! The full configuration surface of one deck-generation request.

use serde::{Deserialize, Serialize};

use crate::catalog::{Archetype, Rarity};
use crate::error::GenerateError;
use crate::sampler::SamplerConfig;

use super::slider::SliderValue;

/// Per-rarity slider positions.
///
/// Field order is slider order; requirement tie-breaking is stable with
/// respect to it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaritySliders {
    pub common: SliderValue,
    pub rare: SliderValue,
    pub epic: SliderValue,
    pub legendary: SliderValue,
    /// Clamped to at most 1 when read; game rules cap champions per deck.
    pub champion: SliderValue,
}

impl RaritySliders {
    /// Slider entries in input order, champion clamped to its cap of 1.
    #[must_use]
    pub fn entries(&self) -> [(Rarity, SliderValue); 5] {
        let champion = match self.champion {
            SliderValue::Exact(n) => SliderValue::Exact(n.min(1)),
            SliderValue::Random => SliderValue::Random,
        };
        [
            (Rarity::Common, self.common),
            (Rarity::Rare, self.rare),
            (Rarity::Epic, self.epic),
            (Rarity::Legendary, self.legendary),
            (Rarity::Champion, champion),
        ]
    }
}

/// Per-archetype slider positions.
///
/// `troop` covers the whole troop group (`troop`, `troop-air`,
/// `troop-ground`); air and ground have no sliders of their own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeSliders {
    pub troop: SliderValue,
    pub spell: SliderValue,
    pub building: SliderValue,
}

impl ArchetypeSliders {
    /// Slider entries in input order.
    #[must_use]
    pub fn entries(&self) -> [(Archetype, SliderValue); 3] {
        [
            (Archetype::Troop, self.troop),
            (Archetype::Spell, self.spell),
            (Archetype::Building, self.building),
        ]
    }
}

/// Everything one generation call is parameterized by.
///
/// ## Example
///
/// ```
/// use deckforge::constraints::{GeneratorRequest, SliderValue};
///
/// let request = GeneratorRequest::default()
///     .with_rarity_count(deckforge::catalog::Rarity::Common, SliderValue::Exact(4))
///     .with_target_elixir(3.5);
///
/// assert!(request.validate_budget().is_ok());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratorRequest {
    pub rarities: RaritySliders,
    pub archetypes: ArchetypeSliders,

    /// Target average elixir; `None` means unconstrained.
    /// `Some(t)` is only meaningful for 0 < t <= 8; `with_target_elixir`
    /// normalizes non-positive inputs to `None`.
    pub target_elixir: Option<f64>,

    /// Inclusive upper mastery level (0..=10); `None` means no bound.
    /// Setting a bound requires mastery data to have been loaded.
    pub mastery_bound: Option<u32>,

    /// Deck size, retry budget, and elixir tolerance.
    pub sampler: SamplerConfig,
}

impl GeneratorRequest {
    /// Set one rarity slider (builder pattern).
    #[must_use]
    pub fn with_rarity_count(mut self, rarity: Rarity, value: SliderValue) -> Self {
        match rarity {
            Rarity::Common => self.rarities.common = value,
            Rarity::Rare => self.rarities.rare = value,
            Rarity::Epic => self.rarities.epic = value,
            Rarity::Legendary => self.rarities.legendary = value,
            Rarity::Champion => self.rarities.champion = value,
        }
        self
    }

    /// Set one archetype slider (builder pattern).
    ///
    /// Only the three slider archetypes are valid keys. The troop subtypes
    /// have no sliders of their own and cannot be constrained alone; panics
    /// in debug builds when given `troop-air` or `troop-ground`, and leaves
    /// the request unchanged in release builds.
    #[must_use]
    pub fn with_archetype_count(mut self, archetype: Archetype, value: SliderValue) -> Self {
        match archetype {
            Archetype::Troop => self.archetypes.troop = value,
            Archetype::Spell => self.archetypes.spell = value,
            Archetype::Building => self.archetypes.building = value,
            Archetype::TroopAir | Archetype::TroopGround => {
                debug_assert!(false, "no slider for {archetype}; use Archetype::Troop");
            }
        }
        self
    }

    /// Set the target average elixir; non-positive values mean "no target".
    #[must_use]
    pub fn with_target_elixir(mut self, target: f64) -> Self {
        self.target_elixir = (target > 0.0).then_some(target);
        self
    }

    /// Set the inclusive upper mastery bound.
    #[must_use]
    pub fn with_mastery_bound(mut self, bound: u32) -> Self {
        self.mastery_bound = Some(bound);
        self
    }

    /// Replace the sampler configuration.
    #[must_use]
    pub fn with_sampler(mut self, sampler: SamplerConfig) -> Self {
        self.sampler = sampler;
        self
    }

    /// Sum of all explicit non-zero slider counts (champion clamped).
    #[must_use]
    pub fn explicit_total(&self) -> usize {
        let rarities = self
            .rarities
            .entries()
            .iter()
            .filter_map(|(_, v)| v.exact())
            .map(usize::from)
            .sum::<usize>();
        let archetypes = self
            .archetypes
            .entries()
            .iter()
            .filter_map(|(_, v)| v.exact())
            .map(usize::from)
            .sum::<usize>();
        rarities + archetypes
    }

    /// Reject requests whose explicit counts exceed the deck size.
    ///
    /// This is the configuration-level budget check; it blocks generation
    /// before any sampling runs.
    pub fn validate_budget(&self) -> Result<(), GenerateError> {
        let requested = self.explicit_total();
        if requested > self.sampler.deck_size {
            return Err(GenerateError::BudgetExceeded {
                requested,
                deck_size: self.sampler.deck_size,
            });
        }
        Ok(())
    }
}
