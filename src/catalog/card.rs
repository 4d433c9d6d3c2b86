//! Card records - static catalog data.
//!
//! A `Card` holds the immutable properties a deck is built from: name,
//! elixir cost, rarity tier, archetype, identity key, and the name of the
//! mastery badge it maps to (possibly empty for cards without one).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rarity tier of a card.
///
/// Champion is special: game rules allow at most one champion per deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
    Champion,
}

impl Rarity {
    /// All rarities, in slider order.
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
        Rarity::Champion,
    ];

    /// Lowercase name, matching the catalog resource.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
            Rarity::Champion => "champion",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rarity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "common" => Ok(Rarity::Common),
            "rare" => Ok(Rarity::Rare),
            "epic" => Ok(Rarity::Epic),
            "legendary" => Ok(Rarity::Legendary),
            "champion" => Ok(Rarity::Champion),
            _ => Err(()),
        }
    }
}

/// Functional category of a card.
///
/// `TroopAir` and `TroopGround` are subtypes of `Troop` for filtering:
/// a `Troop` filter key matches any archetype in the troop group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Archetype {
    Troop,
    TroopAir,
    TroopGround,
    Spell,
    Building,
}

impl Archetype {
    /// Kebab-case name, matching the catalog resource.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Archetype::Troop => "troop",
            Archetype::TroopAir => "troop-air",
            Archetype::TroopGround => "troop-ground",
            Archetype::Spell => "spell",
            Archetype::Building => "building",
        }
    }

    /// Whether this archetype belongs to the troop group.
    #[must_use]
    pub const fn is_troop(self) -> bool {
        matches!(
            self,
            Archetype::Troop | Archetype::TroopAir | Archetype::TroopGround
        )
    }

    /// Whether a card with this archetype matches `filter` used as a key.
    ///
    /// `Troop` as a filter key matches the whole troop group; every other
    /// key matches by equality.
    #[must_use]
    pub const fn matches_filter(self, filter: Archetype) -> bool {
        match filter {
            Archetype::Troop => self.is_troop(),
            _ => self as u8 == filter as u8,
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Archetype {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "troop" => Ok(Archetype::Troop),
            "troop-air" => Ok(Archetype::TroopAir),
            "troop-ground" => Ok(Archetype::TroopGround),
            "spell" => Ok(Archetype::Spell),
            "building" => Ok(Archetype::Building),
            _ => Err(()),
        }
    }
}

/// Identity key of a card, unique per catalog.
///
/// Kept as the raw catalog string (e.g. `"26000000"`) so decks can be
/// exported back into game links without translation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        CardId::new(s)
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Static card record, loaded once from the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Display name, non-empty.
    pub name: String,

    /// Elixir cost; non-negative, may be fractional.
    pub elixir_cost: f64,

    /// Rarity tier.
    pub rarity: Rarity,

    /// Identity key, unique per catalog.
    pub id: CardId,

    /// Functional category.
    pub archetype: Archetype,

    /// External mastery-badge identifier; empty when the card has none.
    pub mastery_name: String,
}

impl Card {
    /// Create a card record with no mastery badge mapping.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        elixir_cost: f64,
        rarity: Rarity,
        id: impl Into<String>,
        archetype: Archetype,
    ) -> Self {
        Self {
            name: name.into(),
            elixir_cost,
            rarity,
            id: CardId::new(id),
            archetype,
            mastery_name: String::new(),
        }
    }

    /// Set the mastery badge identifier (builder pattern).
    #[must_use]
    pub fn with_mastery_name(mut self, mastery_name: impl Into<String>) -> Self {
        self.mastery_name = mastery_name.into();
        self
    }

    /// Whether this card is the champion rarity.
    #[must_use]
    pub fn is_champion(&self) -> bool {
        self.rarity == Rarity::Champion
    }
}
