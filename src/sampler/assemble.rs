//! Deck assembly: greedy requirement satisfaction, then uniform random fill.
//!
//! One call to [`assemble`] is one full attempt. It never returns a short
//! deck: either every slot is filled or the attempt fails with a typed
//! error. The elixir-target rejection loop in `generator` calls this
//! repeatedly against fresh clones of the resolved pool.

use im::Vector;
use smallvec::SmallVec;

use crate::catalog::Card;
use crate::constraints::RequirementSpec;
use crate::error::GenerateError;

use super::config::SamplerConfig;
use super::rng::DeckRng;

/// Cards of one assembled deck; inline storage for the standard 8 slots.
pub type DeckCards = SmallVec<[Card; 8]>;

/// Assemble one deck from a pool snapshot and ordered requirements.
///
/// The pool is cloned (O(1), persistent vector) and consumed locally;
/// requirement picks remove cards so no identity can be drawn twice. Once
/// any champion enters the deck, all remaining champions are purged from
/// the working pool, so a second champion can never be picked.
///
/// Returns the deck and its average elixir cost.
pub fn assemble(
    pool: &Vector<Card>,
    requirements: &[RequirementSpec],
    config: &SamplerConfig,
    rng: &mut DeckRng,
) -> Result<(DeckCards, f64), GenerateError> {
    let mut pool = pool.clone();
    let mut deck = DeckCards::new();
    let mut champion_present = false;

    for requirement in requirements {
        if deck.len() >= config.deck_size {
            break;
        }
        let remaining = config.deck_size - deck.len();

        // Candidate positions in the current pool, champions apart.
        let mut non_champions: Vec<usize> = Vec::new();
        let mut champions: Vec<usize> = Vec::new();
        for (idx, card) in pool.iter().enumerate() {
            if !requirement.key.matches(card) {
                continue;
            }
            if card.is_champion() {
                champions.push(idx);
            } else {
                non_champions.push(idx);
            }
        }

        let candidates = non_champions.len() + champions.len();
        let take = requirement.want.min(candidates).min(remaining);

        let mut chosen: Vec<usize> = rng
            .sample_indices(non_champions.len(), take.min(non_champions.len()))
            .into_iter()
            .map(|i| non_champions[i])
            .collect();

        // A champion fills the shortfall only when none is in the deck yet,
        // and only ever one.
        if chosen.len() < take && !champion_present {
            if let Some(&champ) = rng.choose(&champions) {
                chosen.push(champ);
            }
        }

        let newly_champion = remove_picked(&mut pool, &mut deck, chosen);
        if newly_champion && !champion_present {
            champion_present = true;
            pool = purge_champions(pool);
        }
    }

    if deck.len() < config.deck_size {
        // Unconstrained fills still honor the one-champion cap: keep one
        // randomly chosen champion as the only eligible candidate.
        if !champion_present {
            pool = cap_champions_to_one(pool, rng);
        }

        let remaining = config.deck_size - deck.len();
        if pool.len() < remaining {
            return Err(GenerateError::InsufficientFill {
                needed: remaining,
                available: pool.len(),
            });
        }

        let chosen = rng.sample_indices(pool.len(), remaining);
        remove_picked(&mut pool, &mut deck, chosen);
    }

    let average = deck.iter().map(|c| c.elixir_cost).sum::<f64>() / deck.len() as f64;
    Ok((deck, average))
}

/// Move the cards at `positions` from the pool into the deck.
///
/// Returns whether any picked card was a champion.
fn remove_picked(pool: &mut Vector<Card>, deck: &mut DeckCards, mut positions: Vec<usize>) -> bool {
    // back-to-front so earlier positions stay valid
    positions.sort_unstable_by(|a, b| b.cmp(a));
    let mut picked_champion = false;
    for idx in positions {
        let card = pool.remove(idx);
        picked_champion |= card.is_champion();
        deck.push(card);
    }
    picked_champion
}

fn purge_champions(pool: Vector<Card>) -> Vector<Card> {
    pool.into_iter().filter(|c| !c.is_champion()).collect()
}

/// Leave at most one champion in the pool, chosen uniformly.
fn cap_champions_to_one(pool: Vector<Card>, rng: &mut DeckRng) -> Vector<Card> {
    let champions: Vec<usize> = pool
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_champion())
        .map(|(idx, _)| idx)
        .collect();
    if champions.len() < 2 {
        return pool;
    }
    let keep = *rng.choose(&champions).unwrap_or(&champions[0]);
    pool.into_iter()
        .enumerate()
        .filter(|(idx, card)| !card.is_champion() || *idx == keep)
        .map(|(_, card)| card)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Archetype, Rarity};
    use crate::constraints::{RequirementKey, RequirementSpec};

    fn card(name: &str, id: &str, elixir: f64, rarity: Rarity, archetype: Archetype) -> Card {
        Card::new(name, elixir, rarity, id, archetype)
    }

    fn mixed_pool() -> Vector<Card> {
        let mut pool = Vector::new();
        for i in 0..6 {
            pool.push_back(card(
                &format!("Common{i}"),
                &format!("1{i}"),
                3.0,
                Rarity::Common,
                Archetype::TroopGround,
            ));
        }
        for i in 0..4 {
            pool.push_back(card(
                &format!("Rare{i}"),
                &format!("2{i}"),
                4.0,
                Rarity::Rare,
                Archetype::Spell,
            ));
        }
        pool.push_back(card("Epic0", "30", 5.0, Rarity::Epic, Archetype::Building));
        pool.push_back(card("Legend0", "40", 4.0, Rarity::Legendary, Archetype::TroopAir));
        pool.push_back(card("ChampA", "50", 4.0, Rarity::Champion, Archetype::Troop));
        pool.push_back(card("ChampB", "51", 3.0, Rarity::Champion, Archetype::Troop));
        pool
    }

    fn rarity_req(rarity: Rarity, want: usize) -> RequirementSpec {
        RequirementSpec {
            key: RequirementKey::Rarity(rarity),
            want,
        }
    }

    fn archetype_req(archetype: Archetype, want: usize) -> RequirementSpec {
        RequirementSpec {
            key: RequirementKey::Archetype(archetype),
            want,
        }
    }

    fn champion_count(deck: &DeckCards) -> usize {
        deck.iter().filter(|c| c.is_champion()).count()
    }

    #[test]
    fn test_unconstrained_fill() {
        let config = SamplerConfig::default();
        let mut rng = DeckRng::new(42);
        let (deck, avg) = assemble(&mixed_pool(), &[], &config, &mut rng).unwrap();

        assert_eq!(deck.len(), 8);
        let mut ids: Vec<_> = deck.iter().map(|c| c.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 8);
        assert!(avg > 0.0);
    }

    #[test]
    fn test_exact_rarity_counts() {
        let config = SamplerConfig::default();
        let requirements = vec![
            rarity_req(Rarity::Common, 4),
            rarity_req(Rarity::Rare, 2),
            rarity_req(Rarity::Epic, 1),
            rarity_req(Rarity::Legendary, 1),
        ];
        for seed in 0..20 {
            let mut rng = DeckRng::new(seed);
            let (deck, _) = assemble(&mixed_pool(), &requirements, &config, &mut rng).unwrap();
            assert_eq!(deck.len(), 8);
            assert_eq!(deck.iter().filter(|c| c.rarity == Rarity::Common).count(), 4);
            assert_eq!(deck.iter().filter(|c| c.rarity == Rarity::Rare).count(), 2);
            assert_eq!(deck.iter().filter(|c| c.rarity == Rarity::Epic).count(), 1);
            assert_eq!(deck.iter().filter(|c| c.rarity == Rarity::Legendary).count(), 1);
            assert_eq!(champion_count(&deck), 0);
        }
    }

    #[test]
    fn test_at_most_one_champion_in_fill() {
        // Two champions in the pool, nothing constrains them away.
        let config = SamplerConfig::default();
        for seed in 0..50 {
            let mut rng = DeckRng::new(seed);
            let (deck, _) = assemble(&mixed_pool(), &[], &config, &mut rng).unwrap();
            assert!(champion_count(&deck) <= 1, "seed {seed} produced two champions");
        }
    }

    #[test]
    fn test_champion_requirement_picks_exactly_one() {
        let config = SamplerConfig::default();
        let requirements = vec![rarity_req(Rarity::Champion, 1)];
        for seed in 0..20 {
            let mut rng = DeckRng::new(seed);
            let (deck, _) = assemble(&mixed_pool(), &requirements, &config, &mut rng).unwrap();
            assert_eq!(champion_count(&deck), 1);
        }
    }

    #[test]
    fn test_archetype_requirement_caps_champions() {
        // Troop requirement whose subset includes both champions: the deck
        // may satisfy the shortfall with at most one of them.
        let config = SamplerConfig::default();
        let requirements = vec![archetype_req(Archetype::Troop, 8)];
        for seed in 0..50 {
            let mut rng = DeckRng::new(seed);
            let (deck, _) = assemble(&mixed_pool(), &requirements, &config, &mut rng).unwrap();
            assert_eq!(deck.len(), 8);
            assert!(champion_count(&deck) <= 1);
        }
    }

    #[test]
    fn test_champion_requirement_after_champion_present_is_capped() {
        // The troop requirement grabs a champion first; the later champion
        // requirement finds none left and is silently capped to zero.
        let mut pool = Vector::new();
        // exactly 7 troop non-champions, forcing the champion to complete want=8
        for i in 0..7 {
            pool.push_back(card(
                &format!("Troop{i}"),
                &format!("1{i}"),
                3.0,
                Rarity::Common,
                Archetype::Troop,
            ));
        }
        pool.push_back(card("ChampA", "50", 4.0, Rarity::Champion, Archetype::Troop));
        pool.push_back(card("ChampB", "51", 3.0, Rarity::Champion, Archetype::Troop));

        let config = SamplerConfig::default();
        let requirements = vec![
            archetype_req(Archetype::Troop, 8),
            rarity_req(Rarity::Champion, 1),
        ];
        for seed in 0..20 {
            let mut rng = DeckRng::new(seed);
            let (deck, _) = assemble(&pool, &requirements, &config, &mut rng).unwrap();
            assert_eq!(deck.len(), 8);
            assert_eq!(champion_count(&deck), 1);
        }
    }

    #[test]
    fn test_insufficient_fill() {
        // 7-card pool cannot fill 8 slots
        let mut pool = Vector::new();
        for i in 0..7 {
            pool.push_back(card(
                &format!("C{i}"),
                &format!("{i}"),
                3.0,
                Rarity::Common,
                Archetype::Spell,
            ));
        }
        let config = SamplerConfig::default();
        let mut rng = DeckRng::new(42);
        let err = assemble(&pool, &[], &config, &mut rng).unwrap_err();
        assert_eq!(
            err,
            GenerateError::InsufficientFill {
                needed: 8,
                available: 7
            }
        );
    }

    #[test]
    fn test_average_elixir() {
        let mut pool = Vector::new();
        for i in 0..8 {
            pool.push_back(card(
                &format!("C{i}"),
                &format!("{i}"),
                4.0,
                Rarity::Common,
                Archetype::Spell,
            ));
        }
        let config = SamplerConfig::default();
        let mut rng = DeckRng::new(42);
        let (_, avg) = assemble(&pool, &[], &config, &mut rng).unwrap();
        assert!((avg - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pool_snapshot_not_consumed() {
        let pool = mixed_pool();
        let before = pool.len();
        let config = SamplerConfig::default();
        let mut rng = DeckRng::new(42);
        let _ = assemble(&pool, &[], &config, &mut rng).unwrap();
        assert_eq!(pool.len(), before);
    }
}
