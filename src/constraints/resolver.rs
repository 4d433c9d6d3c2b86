//! Constraint resolver: sliders in, filtered pool and ordered requirements out.
//!
//! The resolver is a pure function of the catalog, the request, and the
//! optionally supplied mastery book. It produces an immutable pool snapshot
//! plus the ordered requirement list the sampler consumes; nothing here
//! mutates shared state or touches a renderer.

use im::Vector;

use crate::catalog::{Archetype, Card, Catalog, Rarity};
use crate::error::GenerateError;
use crate::mastery::MasteryBook;

use super::request::GeneratorRequest;

/// Axis a requirement selects on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequirementKey {
    Rarity(Rarity),
    Archetype(Archetype),
}

impl RequirementKey {
    /// Whether a card belongs to this requirement's candidate subset.
    ///
    /// Rarity keys match by equality; the `Troop` archetype key matches the
    /// whole troop group.
    #[must_use]
    pub fn matches(&self, card: &Card) -> bool {
        match self {
            RequirementKey::Rarity(rarity) => card.rarity == *rarity,
            RequirementKey::Archetype(filter) => card.archetype.matches_filter(*filter),
        }
    }
}

/// One positive slider, normalized for the sampler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequirementSpec {
    pub key: RequirementKey,
    /// Requested number of matching cards; always > 0.
    pub want: usize,
}

/// Resolver output: the post-exclusion pool and the ordered requirements.
///
/// The pool is an `im` vector so each rejection-sampling attempt can
/// restart from an O(1) structural clone of this snapshot.
#[derive(Clone, Debug)]
pub struct ResolvedConstraints {
    pub pool: Vector<Card>,
    pub requirements: Vec<RequirementSpec>,
}

/// Interpret a request against the catalog.
///
/// Steps, in order: budget check, mastery filter, zero-slider exclusions,
/// pool-size check, requirement list construction. Fails with the first
/// violated condition; see [`GenerateError`].
pub fn resolve(
    catalog: &Catalog,
    request: &GeneratorRequest,
    mastery: Option<&MasteryBook>,
) -> Result<ResolvedConstraints, GenerateError> {
    request.validate_budget()?;

    let mut pool: Vector<Card> = catalog.iter().cloned().collect();

    if let Some(bound) = request.mastery_bound {
        let book = mastery.ok_or(GenerateError::MissingMasteryData)?;
        pool = pool
            .into_iter()
            .filter(|card| book.level_for(card) <= bound)
            .collect();
        log::debug!("mastery bound {bound} leaves {} cards", pool.len());
    }

    for (rarity, value) in request.rarities.entries() {
        if value.is_exclusion() {
            pool = pool.into_iter().filter(|c| c.rarity != rarity).collect();
        }
    }
    for (archetype, value) in request.archetypes.entries() {
        if value.is_exclusion() {
            pool = pool
                .into_iter()
                .filter(|c| !c.archetype.matches_filter(archetype))
                .collect();
        }
    }

    if pool.len() < request.sampler.deck_size {
        return Err(GenerateError::InsufficientPool {
            available: pool.len(),
        });
    }

    let requirements = build_requirements(request);
    log::debug!(
        "resolved pool of {} cards with {} requirements",
        pool.len(),
        requirements.len()
    );

    Ok(ResolvedConstraints { pool, requirements })
}

/// Ordered requirement list: archetypes before rarities, each group sorted
/// descending by requested count.
///
/// Archetype subsets are typically smaller and must claim slots before the
/// broader rarity constraints compete for them, and large requirements are
/// riskier to satisfy late when the pool has shrunk. Ties keep input order
/// (stable sort).
fn build_requirements(request: &GeneratorRequest) -> Vec<RequirementSpec> {
    let mut archetypes: Vec<RequirementSpec> = request
        .archetypes
        .entries()
        .iter()
        .filter_map(|&(archetype, value)| match value.exact() {
            Some(n) if n > 0 => Some(RequirementSpec {
                key: RequirementKey::Archetype(archetype),
                want: usize::from(n),
            }),
            _ => None,
        })
        .collect();
    archetypes.sort_by(|a, b| b.want.cmp(&a.want));

    let mut rarities: Vec<RequirementSpec> = request
        .rarities
        .entries()
        .iter()
        .filter_map(|&(rarity, value)| match value.exact() {
            Some(n) if n > 0 => Some(RequirementSpec {
                key: RequirementKey::Rarity(rarity),
                want: usize::from(n),
            }),
            _ => None,
        })
        .collect();
    rarities.sort_by(|a, b| b.want.cmp(&a.want));

    archetypes.extend(rarities);
    archetypes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::SliderValue;

    fn card(name: &str, id: &str, rarity: Rarity, archetype: Archetype) -> Card {
        Card::new(name, 3.0, rarity, id, archetype)
    }

    /// 8 commons (troop-ground), 6 rares (spell), 1 epic (troop-air),
    /// 2 epics (building), 1 champion (troop): 18 cards, and any single
    /// exclusion still leaves at least 8.
    fn catalog() -> Catalog {
        let mut cards = Vec::new();
        for i in 0..8 {
            cards.push(card(
                &format!("Common{i}"),
                &format!("1{i}"),
                Rarity::Common,
                Archetype::TroopGround,
            ));
        }
        for i in 0..6 {
            cards.push(card(
                &format!("Rare{i}"),
                &format!("2{i}"),
                Rarity::Rare,
                Archetype::Spell,
            ));
        }
        cards.push(card("Air", "30", Rarity::Epic, Archetype::TroopAir));
        cards.push(card("Tower0", "40", Rarity::Epic, Archetype::Building));
        cards.push(card("Tower1", "41", Rarity::Epic, Archetype::Building));
        cards.push(card("Champ", "50", Rarity::Champion, Archetype::Troop));
        Catalog::from_cards(cards).unwrap()
    }

    #[test]
    fn test_unconstrained_keeps_full_pool() {
        let resolved = resolve(&catalog(), &GeneratorRequest::default(), None).unwrap();
        assert_eq!(resolved.pool.len(), 18);
        assert!(resolved.requirements.is_empty());
    }

    #[test]
    fn test_zero_rarity_excludes() {
        let request =
            GeneratorRequest::default().with_rarity_count(Rarity::Common, SliderValue::Exact(0));
        let resolved = resolve(&catalog(), &request, None).unwrap();
        assert_eq!(resolved.pool.len(), 10);
        assert!(resolved.pool.iter().all(|c| c.rarity != Rarity::Common));
        assert!(resolved.requirements.is_empty());
    }

    #[test]
    fn test_zero_troop_excludes_whole_group() {
        let request = GeneratorRequest::default()
            .with_archetype_count(Archetype::Troop, SliderValue::Exact(0));
        let resolved = resolve(&catalog(), &request, None).unwrap();
        // commons (troop-ground), the troop-air epic, and the troop champion go
        assert_eq!(resolved.pool.len(), 8);
        assert!(resolved.pool.iter().all(|c| !c.archetype.is_troop()));
    }

    #[test]
    fn test_insufficient_pool() {
        // excluding commons and rares leaves 4 cards
        let request = GeneratorRequest::default()
            .with_rarity_count(Rarity::Common, SliderValue::Exact(0))
            .with_rarity_count(Rarity::Rare, SliderValue::Exact(0));
        let err = resolve(&catalog(), &request, None).unwrap_err();
        assert_eq!(err, GenerateError::InsufficientPool { available: 4 });
    }

    #[test]
    fn test_pool_of_seven_is_insufficient() {
        // excluding commons and epics leaves 7 cards, one short of a deck
        let request = GeneratorRequest::default()
            .with_rarity_count(Rarity::Common, SliderValue::Exact(0))
            .with_rarity_count(Rarity::Epic, SliderValue::Exact(0));
        let err = resolve(&catalog(), &request, None).unwrap_err();
        assert_eq!(err, GenerateError::InsufficientPool { available: 7 });
    }

    #[test]
    fn test_budget_checked_before_pool() {
        let request = GeneratorRequest::default()
            .with_rarity_count(Rarity::Common, SliderValue::Exact(8))
            .with_rarity_count(Rarity::Rare, SliderValue::Exact(8));
        let err = resolve(&catalog(), &request, None).unwrap_err();
        assert!(matches!(err, GenerateError::BudgetExceeded { .. }));
    }

    #[test]
    fn test_mastery_bound_without_book_fails() {
        let request = GeneratorRequest::default().with_mastery_bound(5);
        let err = resolve(&catalog(), &request, None).unwrap_err();
        assert_eq!(err, GenerateError::MissingMasteryData);
    }

    #[test]
    fn test_mastery_bound_filters_pool() {
        use crate::mastery::MasteryRecord;

        let book = MasteryBook::from_records(vec![MasteryRecord {
            card_name: "Common0".to_string(),
            level: 9,
            max_level: 10,
        }]);
        let request = GeneratorRequest::default().with_mastery_bound(5);
        let resolved = resolve(&catalog(), &request, Some(&book)).unwrap();
        // only Common0 is above the bound; unmapped cards count as level 0
        assert_eq!(resolved.pool.len(), 17);
        assert!(resolved.pool.iter().all(|c| c.name != "Common0"));
    }

    #[test]
    fn test_requirement_ordering() {
        let request = GeneratorRequest::default()
            .with_rarity_count(Rarity::Common, SliderValue::Exact(2))
            .with_rarity_count(Rarity::Rare, SliderValue::Exact(3))
            .with_archetype_count(Archetype::Spell, SliderValue::Exact(1))
            .with_archetype_count(Archetype::Building, SliderValue::Exact(2));
        let resolved = resolve(&catalog(), &request, None).unwrap();

        let keys: Vec<_> = resolved
            .requirements
            .iter()
            .map(|r| (r.key, r.want))
            .collect();
        assert_eq!(
            keys,
            vec![
                (RequirementKey::Archetype(Archetype::Building), 2),
                (RequirementKey::Archetype(Archetype::Spell), 1),
                (RequirementKey::Rarity(Rarity::Rare), 3),
                (RequirementKey::Rarity(Rarity::Common), 2),
            ]
        );
    }

    #[test]
    fn test_requirement_ties_keep_input_order() {
        let request = GeneratorRequest::default()
            .with_rarity_count(Rarity::Epic, SliderValue::Exact(2))
            .with_rarity_count(Rarity::Rare, SliderValue::Exact(2));
        let resolved = resolve(&catalog(), &request, None).unwrap();
        // rare comes before epic in slider order
        assert_eq!(
            resolved.requirements[0].key,
            RequirementKey::Rarity(Rarity::Rare)
        );
        assert_eq!(
            resolved.requirements[1].key,
            RequirementKey::Rarity(Rarity::Epic)
        );
    }
}
