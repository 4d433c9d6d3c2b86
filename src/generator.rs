//! Top-level deck generation: resolve constraints, assemble, and retry
//! whole assemblies against a target average elixir.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::catalog::{Card, Catalog};
use crate::constraints::{resolve, GeneratorRequest};
use crate::error::GenerateError;
use crate::mastery::MasteryBook;
use crate::sampler::{assemble, DeckRng};

/// A successfully generated deck.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeneratedDeck {
    /// Exactly `deck_size` cards with distinct ids and at most one champion.
    pub cards: SmallVec<[Card; 8]>,

    /// Mean elixir cost over the deck.
    pub average_elixir: f64,

    /// Full assemblies it took; 1 unless a target elixir forced retries.
    pub attempts: u32,
}

impl GeneratedDeck {
    /// Card ids joined with `;`, the payload of a game deck link.
    #[must_use]
    pub fn export_ids(&self) -> String {
        self.cards
            .iter()
            .map(|c| c.id.as_str())
            .collect::<Vec<_>>()
            .join(";")
    }
}

/// Deck generator over a loaded catalog and optional player mastery data.
///
/// Generation is synchronous and call-local: the pool, requirement list,
/// and deck of one call are never shared, so a generator can be reused
/// freely across calls.
///
/// ## Example
///
/// ```
/// use deckforge::catalog::{Archetype, Card, Catalog, Rarity};
/// use deckforge::constraints::GeneratorRequest;
/// use deckforge::generator::DeckGenerator;
/// use deckforge::sampler::DeckRng;
///
/// let cards = (0..10).map(|i| {
///     Card::new(format!("Card{i}"), 3.0, Rarity::Common, format!("{i}"), Archetype::Spell)
/// });
/// let generator = DeckGenerator::new(Catalog::from_cards(cards).unwrap());
///
/// let deck = generator
///     .generate_with_rng(&GeneratorRequest::default(), &mut DeckRng::new(42))
///     .unwrap();
/// assert_eq!(deck.cards.len(), 8);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DeckGenerator {
    catalog: Catalog,
    mastery: Option<MasteryBook>,
}

impl DeckGenerator {
    /// Create a generator over a loaded catalog, without mastery data.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            mastery: None,
        }
    }

    /// Attach player mastery data from a completed lookup (builder pattern).
    #[must_use]
    pub fn with_mastery(mut self, book: MasteryBook) -> Self {
        self.mastery = Some(book);
        self
    }

    /// Replace the mastery data, e.g. after looking up a different player.
    pub fn set_mastery(&mut self, book: Option<MasteryBook>) {
        self.mastery = book;
    }

    /// The catalog this generator draws from.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Whether mastery data has been attached.
    #[must_use]
    pub fn has_mastery(&self) -> bool {
        self.mastery.is_some()
    }

    /// Generate a deck with an entropy-seeded RNG.
    pub fn generate(&self, request: &GeneratorRequest) -> Result<GeneratedDeck, GenerateError> {
        self.generate_with_rng(request, &mut DeckRng::from_entropy())
    }

    /// Generate a deck with a caller-supplied RNG.
    ///
    /// Constraints are resolved once; with a target elixir set, whole
    /// assemblies are rejection-sampled from fresh pool snapshots until the
    /// average lands within tolerance or the attempt budget runs out. Pool
    /// and fill shortfalls are never retried; they fail the call at the
    /// first attempt that hits them.
    pub fn generate_with_rng(
        &self,
        request: &GeneratorRequest,
        rng: &mut DeckRng,
    ) -> Result<GeneratedDeck, GenerateError> {
        let resolved = resolve(&self.catalog, request, self.mastery.as_ref())?;
        let config = &request.sampler;

        // Non-positive targets mean unconstrained, matching the slider's
        // zero position.
        let target = request.target_elixir.filter(|t| *t > 0.0);

        let Some(target) = target else {
            let (cards, average_elixir) =
                assemble(&resolved.pool, &resolved.requirements, config, rng)?;
            return Ok(GeneratedDeck {
                cards,
                average_elixir,
                attempts: 1,
            });
        };

        for attempt in 1..=config.max_attempts {
            let (cards, average_elixir) =
                assemble(&resolved.pool, &resolved.requirements, config, rng)?;
            if (average_elixir - target).abs() <= config.tolerance {
                log::debug!("hit target elixir {target} on attempt {attempt}");
                return Ok(GeneratedDeck {
                    cards,
                    average_elixir,
                    attempts: attempt,
                });
            }
            log::trace!("attempt {attempt}: average {average_elixir} off target {target}");
        }

        Err(GenerateError::ElixirTargetUnsatisfiable {
            target,
            tolerance: config.tolerance,
            attempts: config.max_attempts,
        })
    }
}
