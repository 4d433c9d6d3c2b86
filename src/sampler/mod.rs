//! Deck sampling: configuration, the seeded RNG, and deck assembly.
//!
//! ## Key Types
//!
//! - `SamplerConfig`: deck size, attempt budget, elixir tolerance
//! - `DeckRng`: seeded uniform RNG for every draw
//! - `assemble`: one full assembly attempt over a pool snapshot

pub mod assemble;
pub mod config;
pub mod rng;

pub use assemble::{assemble, DeckCards};
pub use config::{SamplerConfig, DECK_SIZE};
pub use rng::DeckRng;
