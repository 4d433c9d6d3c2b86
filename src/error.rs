//! Error taxonomy for catalog loading, player lookup, and deck generation.
//!
//! Every variant here is an expected, user-facing condition. Generation
//! failures abort the current call and produce no partial deck; the caller
//! (typically a renderer) decides how to display them.

use thiserror::Error;

/// A deck-generation request could not be satisfied.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GenerateError {
    /// A mastery bound was requested but no player mastery data has been
    /// supplied. The caller must run a player lookup first; the bound is
    /// never silently ignored.
    #[error("mastery filter requested but no player mastery data is loaded")]
    MissingMasteryData,

    /// Fewer cards remain after exclusion filters than a deck needs.
    #[error("only {available} cards remain after filtering; a full deck needs more")]
    InsufficientPool {
        /// Pool size after mastery and exclusion filters.
        available: usize,
    },

    /// The requirement pass left fewer cards than open deck slots.
    #[error("not enough cards to fill the deck: {needed} slots open, {available} candidates left")]
    InsufficientFill {
        /// Open slots when the random fill ran out of candidates.
        needed: usize,
        /// Cards still available at that point.
        available: usize,
    },

    /// Explicit slider counts add up to more than the deck holds.
    /// Caught before any sampling runs.
    #[error("requested card counts total {requested}, exceeding the deck size of {deck_size}")]
    BudgetExceeded { requested: usize, deck_size: usize },

    /// Rejection sampling exhausted its attempt budget without landing
    /// within tolerance of the target average elixir. No best-effort deck
    /// is returned.
    #[error("could not match target elixir {target} within \u{b1}{tolerance} after {attempts} attempts")]
    ElixirTargetUnsatisfiable {
        target: f64,
        tolerance: f64,
        /// Number of full assemblies tried before giving up.
        attempts: u32,
    },
}

/// A catalog resource could not be parsed into card records.
///
/// Line numbers are 1-based and count physical lines of the resource,
/// header included.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum CatalogError {
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: card name is empty")]
    EmptyName { line: usize },

    #[error("line {line}: invalid elixir cost {value:?}")]
    InvalidElixir { line: usize, value: String },

    #[error("line {line}: unknown rarity {value:?}")]
    UnknownRarity { line: usize, value: String },

    #[error("line {line}: unknown archetype {value:?}")]
    UnknownArchetype { line: usize, value: String },

    #[error("line {line}: duplicate card id {id:?}")]
    DuplicateId { line: usize, id: String },
}

/// The mastery provider's underlying player lookup failed.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum LookupError {
    /// The request never produced a response (network failure, timeout).
    #[error("player lookup request failed: {0}")]
    Transport(String),

    /// The lookup endpoint answered with a non-success status.
    #[error("player lookup returned status {status}: {message}")]
    Status { status: u16, message: String },
}
