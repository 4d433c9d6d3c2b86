//! Catalog of card records with ordered iteration and id lookup.
//!
//! The catalog preserves resource order, which downstream code relies on
//! for stable tie-breaking, and indexes cards by their identity key.

use rustc_hash::FxHashMap;

use crate::error::CatalogError;

use super::card::{Card, CardId};

/// Ordered collection of the cards a deck can be built from.
///
/// ## Example
///
/// ```
/// use deckforge::catalog::{Card, Catalog, Rarity, Archetype};
///
/// let mut catalog = Catalog::new();
/// catalog
///     .push(Card::new("Knight", 3.0, Rarity::Common, "26000000", Archetype::TroopGround))
///     .unwrap();
///
/// assert_eq!(catalog.len(), 1);
/// assert!(catalog.get(&"26000000".into()).is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    cards: Vec<Card>,
    by_id: FxHashMap<CardId, usize>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from an already-parsed ordered sequence of cards.
    ///
    /// Fails on a duplicate identity key; the reported line number is the
    /// card's position in the sequence (1-based).
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for card in cards {
            catalog.push(card)?;
        }
        Ok(catalog)
    }

    /// Append a card, rejecting duplicate identity keys.
    ///
    /// The error's line number is the card's 1-based position; the resource
    /// parser remaps it to the physical line.
    pub fn push(&mut self, card: Card) -> Result<(), CatalogError> {
        if self.by_id.contains_key(&card.id) {
            return Err(CatalogError::DuplicateId {
                line: self.cards.len() + 1,
                id: card.id.0.clone(),
            });
        }
        self.by_id.insert(card.id.clone(), self.cards.len());
        self.cards.push(card);
        Ok(())
    }

    /// Get a card by identity key.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.by_id.get(id).map(|&idx| &self.cards[idx])
    }

    /// Number of cards in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the catalog holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in resource order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterate over cards in resource order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Cards matching a predicate, in resource order.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Card>
    where
        F: Fn(&Card) -> bool,
    {
        self.cards.iter().filter(move |c| predicate(c))
    }
}
