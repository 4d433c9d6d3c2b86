//! Player mastery data: badge records, the provider seam, and the book.
//!
//! A player lookup returns a profile whose badge list carries per-card
//! mastery entries (badge names with the `Mastery` prefix plus a level and
//! level cap). The transport lives outside this crate behind the
//! [`MasteryProvider`] trait; this module turns an already-fetched badge
//! list into a [`MasteryBook`] the constraint resolver can query.
//!
//! Cards are matched to badges through the catalog's `masteryName` column.
//! Cards with no matching badge are mastery level 0.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::catalog::{Card, Catalog};
use crate::error::LookupError;

/// Badge names carrying mastery data start with this prefix.
pub const MASTERY_BADGE_PREFIX: &str = "Mastery";

/// Raw badge entry from a player profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeRecord {
    pub name: String,
    pub level: u32,
    pub max_level: u32,
}

/// One card's mastery standing for the looked-up player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasteryRecord {
    /// Card name, or the raw badge name when no catalog card maps to it.
    pub card_name: String,
    pub level: u32,
    pub max_level: u32,
}

/// Seam to the external player-lookup collaborator.
///
/// Implementations fetch a player profile by tag and return its badge
/// list; HTTP transport, auth, and tag formatting are their concern.
pub trait MasteryProvider {
    fn lookup(&self, tag: &str) -> Result<Vec<BadgeRecord>, LookupError>;
}

/// Mastery levels for one player, keyed by card name.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MasteryBook {
    records: FxHashMap<String, MasteryRecord>,
}

impl MasteryBook {
    /// Build a book from already-resolved mastery records.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = MasteryRecord>) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|r| (r.card_name.clone(), r))
                .collect(),
        }
    }

    /// Build a book from a raw badge list, mapping badges to cards through
    /// the catalog's `masteryName` column.
    ///
    /// Badges without the mastery prefix are ignored. A mastery badge no
    /// catalog card maps to is kept under its badge name so the record is
    /// not lost, but no card will resolve to it.
    #[must_use]
    pub fn from_badges(badges: &[BadgeRecord], catalog: &Catalog) -> Self {
        let by_badge: FxHashMap<&str, &Card> = catalog
            .iter()
            .filter(|c| !c.mastery_name.is_empty())
            .map(|c| (c.mastery_name.as_str(), c))
            .collect();

        let records = badges
            .iter()
            .filter(|b| b.name.starts_with(MASTERY_BADGE_PREFIX))
            .map(|badge| {
                let card_name = by_badge
                    .get(badge.name.as_str())
                    .map_or_else(|| badge.name.clone(), |card| card.name.clone());
                MasteryRecord {
                    card_name,
                    level: badge.level,
                    max_level: badge.max_level,
                }
            });

        Self::from_records(records)
    }

    /// Mastery level for a card; 0 when the player has no badge for it.
    #[must_use]
    pub fn level_for(&self, card: &Card) -> u32 {
        self.records.get(&card.name).map_or(0, |r| r.level)
    }

    /// Record for a card, if the player has one.
    #[must_use]
    pub fn get(&self, card_name: &str) -> Option<&MasteryRecord> {
        self.records.get(card_name)
    }

    /// Number of records in the book.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
