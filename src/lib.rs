//! # deckforge
//!
//! Constrained random deck generation over a fixed card catalog.
//!
//! Given a catalog of cards, per-rarity and per-archetype slider counts, an
//! optional target average elixir, and an optional per-card mastery bound
//! from a looked-up player profile, `deckforge` assembles an 8-card deck
//! satisfying the constraints, falling back to uniform random selection
//! when unconstrained.
//!
//! ## Design Principles
//!
//! 1. **Pure generation**: one call is a pure function of catalog, request,
//!    mastery data, and RNG seed. No UI state, no shared pool; each
//!    rejection-sampling attempt restarts from a persistent pool snapshot.
//!
//! 2. **Explicit failure**: a deck is complete or the call fails with a
//!    typed error. Never a short deck, never a best-effort average elixir.
//!
//! 3. **Uniform draws**: sampling n of m candidates gives every n-subset
//!    equal probability; constraints act only through filters, never
//!    through weights.
//!
//! ## Modules
//!
//! - `catalog`: card records, the ordered registry, resource parsing
//! - `mastery`: player badge data behind the lookup seam
//! - `constraints`: request surface and the constraint resolver
//! - `sampler`: seeded RNG and the deck assembly pass
//! - `generator`: resolve, assemble, and the elixir-target retry loop
//! - `error`: the full failure taxonomy

pub mod catalog;
pub mod constraints;
pub mod error;
pub mod generator;
pub mod mastery;
pub mod sampler;

// Re-export commonly used types
pub use crate::catalog::{parse_catalog, Archetype, Card, CardId, Catalog, Rarity};

pub use crate::constraints::{
    resolve, ArchetypeSliders, GeneratorRequest, RaritySliders, RequirementKey, RequirementSpec,
    ResolvedConstraints, SliderValue,
};

pub use crate::error::{CatalogError, GenerateError, LookupError};

pub use crate::generator::{DeckGenerator, GeneratedDeck};

pub use crate::mastery::{
    BadgeRecord, MasteryBook, MasteryProvider, MasteryRecord, MASTERY_BADGE_PREFIX,
};

pub use crate::sampler::{assemble, DeckCards, DeckRng, SamplerConfig, DECK_SIZE};
