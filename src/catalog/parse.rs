//! Parser for the delimited card-catalog resource.
//!
//! The resource is comma-delimited with a header row and the columns
//! `name,elixirCost,rarity,id,archetype,masteryName`. The header and blank
//! lines are skipped; any other malformed line is a typed error carrying
//! its 1-based line number rather than being dropped silently.

use crate::error::CatalogError;

use super::card::Card;
use super::registry::Catalog;

const FIELD_COUNT: usize = 6;

/// Parse a catalog resource into an ordered [`Catalog`].
///
/// ## Example
///
/// ```
/// use deckforge::catalog::parse_catalog;
///
/// let text = "\
/// name,elixirCost,rarity,id,archetype,masteryName
/// Knight,3,common,26000000,troop-ground,Knight
/// Fireball,4,rare,28000000,spell,Fireball
/// ";
/// let catalog = parse_catalog(text).unwrap();
/// assert_eq!(catalog.len(), 2);
/// ```
pub fn parse_catalog(text: &str) -> Result<Catalog, CatalogError> {
    let mut catalog = Catalog::new();
    let mut seen_header = false;

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let row = raw.trim_end_matches('\r');
        if row.trim().is_empty() {
            continue;
        }
        if !seen_header {
            seen_header = true;
            continue;
        }

        let card = parse_row(row, line)?;
        catalog.push(card).map_err(|err| match err {
            CatalogError::DuplicateId { id, .. } => CatalogError::DuplicateId { line, id },
            other => other,
        })?;
    }

    log::debug!("parsed catalog with {} cards", catalog.len());
    Ok(catalog)
}

fn parse_row(row: &str, line: usize) -> Result<Card, CatalogError> {
    let fields: Vec<&str> = row.split(',').map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return Err(CatalogError::FieldCount {
            line,
            expected: FIELD_COUNT,
            found: fields.len(),
        });
    }

    let name = fields[0];
    if name.is_empty() {
        return Err(CatalogError::EmptyName { line });
    }

    let elixir_cost: f64 = fields[1].parse().map_err(|_| CatalogError::InvalidElixir {
        line,
        value: fields[1].to_string(),
    })?;
    if !elixir_cost.is_finite() || elixir_cost < 0.0 {
        return Err(CatalogError::InvalidElixir {
            line,
            value: fields[1].to_string(),
        });
    }

    let rarity = fields[2].parse().map_err(|()| CatalogError::UnknownRarity {
        line,
        value: fields[2].to_string(),
    })?;

    let archetype = fields[4]
        .parse()
        .map_err(|()| CatalogError::UnknownArchetype {
            line,
            value: fields[4].to_string(),
        })?;

    Ok(Card::new(name, elixir_cost, rarity, fields[3], archetype).with_mastery_name(fields[5]))
}
