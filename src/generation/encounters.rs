//! # Encounter Construction
//!
//! Candidate filtering, the greedy fill loop, and the orchestrator that
//! assembles one scenario per archetype.
//!
//! The fill is best-effort: a bounded, randomized greedy loop with no
//! backtracking. For awkward candidate pools (say, only very expensive
//! monsters) it can finish well under budget; it always terminates and
//! never exceeds the archetype's overshoot bound.

use crate::bestiary::{Bestiary, MonsterTemplate};
use crate::generation::archetype::ScenarioArchetype;
use crate::generation::budget::{compute_budget, BUDGET_BUFFER};
use crate::generation::multiplier::encounter_multiplier;
use crate::generation::{Difficulty, EncounterSettings};
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Hard cap on fill-loop iterations. A safety valve against pathological
/// inputs, not a convergence guarantee.
const MAX_FILL_ATTEMPTS: u32 = 200;

/// Fraction of the budget at which an encounter counts as full.
const BUDGET_FILL_TARGET: f64 = 0.95;

/// One line of a generated encounter: a monster template and how many of
/// it appear. The id is freshly generated so callers can reference the
/// entry after the encounter is stored or displayed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncounterEntry {
    pub template: MonsterTemplate,
    pub count: u32,
    pub id: Uuid,
}

/// The generated encounter for one archetype.
///
/// Entries are ordered descending by Challenge Rating. `total_xp` is the
/// multiplier-adjusted value of the whole encounter, floored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedEncounter {
    pub entries: Vec<EncounterEntry>,
    pub total_xp: u64,
    pub difficulty: Difficulty,
}

impl GeneratedEncounter {
    /// Total number of monsters across all entries.
    pub fn monster_count(&self) -> u32 {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    /// Number of distinct monster templates used.
    pub fn distinct_templates(&self) -> usize {
        self.entries.len()
    }
}

/// Narrows a monster pool to candidates eligible for one archetype.
///
/// A monster is excluded if any of these fails:
///
/// 1. its type string must contain at least one allowed tag (skipped when
///    no tags are given, the list is empty, or it contains `"Any"`);
/// 2. its CR must not exceed `max(0.25, level * ratio)`, with a flat +3
///    CR allowance for high-ratio archetypes (Boss);
/// 3. for non-Horde archetypes (ratio >= 0.9), its CR must be at least
///    `level * 0.2`, keeping trivial monsters out of elite slots;
/// 4. its single-monster XP must fit within the budget cap (1.5x budget
///    for Boss, 1.2x otherwise);
/// 5. it must carry a Challenge Rating at all.
pub fn filter_candidates<'a>(
    pool: impl IntoIterator<Item = &'a MonsterTemplate>,
    budget: f64,
    party_level: u32,
    allowed_types: Option<&[String]>,
    max_cr_ratio: f64,
) -> Vec<&'a MonsterTemplate> {
    let level = f64::from(party_level);
    let high_ratio = max_cr_ratio > 1.2;
    let max_cr = (level * max_cr_ratio + if high_ratio { 3.0 } else { 0.0 }).max(0.25);
    let xp_cap = budget * if high_ratio { 1.5 } else { 1.2 };

    pool.into_iter()
        .filter(|monster| {
            if !monster.has_challenge() {
                return false;
            }
            if let Some(tags) = allowed_types {
                if !tags.is_empty() && !tags.iter().any(|tag| tag == "Any") {
                    let monster_type = monster.creature_type.to_lowercase();
                    let matches = tags
                        .iter()
                        .any(|tag| monster_type.contains(&tag.to_lowercase()));
                    if !matches {
                        return false;
                    }
                }
            }
            let cr_value = monster.challenge_rating();
            if cr_value > max_cr {
                return false;
            }
            if max_cr_ratio >= 0.9 && cr_value < level * 0.2 {
                return false;
            }
            monster.xp_value() <= xp_cap
        })
        .collect()
}

/// Builds one encounter for an archetype from pre-filtered candidates.
///
/// Boss and Balanced pools are sorted strongest-first and sampled from
/// their top tier; a Horde pool is shuffled and narrowed to one or two
/// distinct templates so the horde stays thematically homogeneous. The
/// greedy loop then adds monsters until the budget is covered, the count
/// cap is reached, or the attempt cap runs out. A pick whose hypothetical
/// adjusted XP would break the overshoot bound is simply discarded.
pub fn construct_encounter(
    candidates: &[&MonsterTemplate],
    budget: f64,
    archetype: ScenarioArchetype,
    difficulty: Difficulty,
    rng: &mut StdRng,
) -> GeneratedEncounter {
    let tuning = archetype.tuning();
    let mut pool: Vec<&MonsterTemplate> = candidates.to_vec();

    match archetype {
        ScenarioArchetype::Boss | ScenarioArchetype::Balanced => {
            pool.sort_by(|a, b| b.challenge_rating().total_cmp(&a.challenge_rating()));
        }
        ScenarioArchetype::Horde => {
            pool.shuffle(rng);
            if !pool.is_empty() {
                let distinct = if rng.gen_bool(0.6) { 2 } else { 1 };
                pool.truncate(distinct);
            }
        }
    }

    let mut entries: Vec<EncounterEntry> = Vec::new();
    let mut raw_xp = 0.0_f64;

    for _ in 0..MAX_FILL_ATTEMPTS {
        let total_count: u32 = entries.iter().map(|entry| entry.count).sum();
        if total_count >= tuning.max_count {
            break;
        }
        if raw_xp * encounter_multiplier(total_count) >= budget * BUDGET_FILL_TARGET {
            break;
        }
        if pool.is_empty() {
            break;
        }

        let window = archetype.sampling_window(pool.len());
        let candidate = pool[rng.gen_range(0..window)];

        let candidate_xp = candidate.xp_value();
        let hypothetical_xp = (raw_xp + candidate_xp) * encounter_multiplier(total_count + 1);
        if hypothetical_xp > budget * archetype.overshoot_tolerance(total_count) {
            continue;
        }

        if let Some(existing) = entries
            .iter_mut()
            .find(|entry| entry.template.name == candidate.name)
        {
            existing.count += 1;
        } else {
            entries.push(EncounterEntry {
                template: candidate.clone(),
                count: 1,
                id: Uuid::new_v4(),
            });
        }
        raw_xp += candidate_xp;
    }

    entries.sort_by(|a, b| {
        b.template
            .challenge_rating()
            .total_cmp(&a.template.challenge_rating())
    });
    let final_count: u32 = entries.iter().map(|entry| entry.count).sum();

    GeneratedEncounter {
        entries,
        total_xp: (raw_xp * encounter_multiplier(final_count)).floor() as u64,
        difficulty,
    }
}

/// Generates up to one encounter per archetype for the given settings.
///
/// Computes the buffered XP budget once, then filters and constructs for
/// each archetype in turn. Archetypes with no eligible candidates are
/// omitted from the result map; callers treat a missing key as "no
/// encounter of this type is currently constructible", not as an error.
/// An empty bestiary therefore yields an empty map.
pub fn generate_scenarios(
    bestiary: &Bestiary,
    settings: &EncounterSettings,
    rng: &mut StdRng,
) -> HashMap<ScenarioArchetype, GeneratedEncounter> {
    let budget =
        compute_budget(settings.party_size, settings.party_level, settings.difficulty)
            * BUDGET_BUFFER;

    let mut scenarios = HashMap::new();

    for archetype in ScenarioArchetype::ALL {
        let candidates = filter_candidates(
            bestiary.values(),
            budget,
            settings.party_level,
            settings.monster_types.as_deref(),
            archetype.tuning().max_cr_ratio,
        );
        debug!(
            "{:?}: {} eligible candidates for budget {:.0}",
            archetype,
            candidates.len(),
            budget
        );
        if candidates.is_empty() {
            continue;
        }
        let encounter =
            construct_encounter(&candidates, budget, archetype, settings.difficulty, rng);
        scenarios.insert(archetype, encounter);
    }

    scenarios
}
