//! Card catalog: records, the ordered registry, and the resource parser.
//!
//! ## Key Types
//!
//! - `Card`: static card record (name, elixir cost, rarity, archetype, id)
//! - `CardId`: identity key, unique per catalog
//! - `Rarity` / `Archetype`: the two constraint axes
//! - `Catalog`: ordered registry with id lookup
//! - `parse_catalog`: delimited-text resource parser

pub mod card;
pub mod parse;
pub mod registry;

pub use card::{Archetype, Card, CardId, Rarity};
pub use parse::parse_catalog;
pub use registry::Catalog;
