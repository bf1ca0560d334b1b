//! # Scenario Archetypes
//!
//! The three fixed encounter shapes the generator produces, each carrying
//! its own tuning: how strong an individual monster may be relative to
//! the party level, and how many monsters the finished encounter holds.
//! Representing them as a closed enum keeps the constructor generic over
//! archetype instead of branching on strings.

use serde::{Deserialize, Serialize};

/// One of the three fixed encounter shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScenarioArchetype {
    /// A small squad of one or two solid creatures
    Balanced,
    /// Many weaker creatures, at most two kinds
    Horde,
    /// A single very powerful creature
    Boss,
}

/// Tuning parameters attached to an archetype.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArchetypeTuning {
    /// Maximum CR-to-party-level ratio for an individual monster
    pub max_cr_ratio: f64,
    /// Minimum number of monsters in a finished encounter
    pub min_count: u32,
    /// Maximum number of monsters in a finished encounter
    pub max_count: u32,
}

impl ScenarioArchetype {
    /// All archetypes, in the order scenarios are generated and displayed.
    pub const ALL: [ScenarioArchetype; 3] = [
        ScenarioArchetype::Balanced,
        ScenarioArchetype::Horde,
        ScenarioArchetype::Boss,
    ];

    /// The tuning parameters for this archetype.
    pub const fn tuning(self) -> ArchetypeTuning {
        match self {
            ScenarioArchetype::Balanced => ArchetypeTuning {
                max_cr_ratio: 1.1,
                min_count: 1,
                max_count: 2,
            },
            ScenarioArchetype::Horde => ArchetypeTuning {
                max_cr_ratio: 0.4,
                min_count: 4,
                max_count: 15,
            },
            ScenarioArchetype::Boss => ArchetypeTuning {
                max_cr_ratio: 1.6,
                min_count: 1,
                max_count: 1,
            },
        }
    }

    /// Short display label for this archetype.
    pub const fn label(self) -> &'static str {
        match self {
            ScenarioArchetype::Balanced => "Elite Squad",
            ScenarioArchetype::Horde => "Horde",
            ScenarioArchetype::Boss => "Solitary Boss",
        }
    }

    /// One-line description for display alongside the label.
    pub const fn description(self) -> &'static str {
        match self {
            ScenarioArchetype::Balanced => "One or two solid creatures.",
            ScenarioArchetype::Horde => "Many weaker creatures.",
            ScenarioArchetype::Boss => "A single very powerful creature.",
        }
    }

    /// Number of candidates the fill loop samples from: the strongest 5
    /// for `Boss`, the strongest 15 for `Balanced`, the whole (already
    /// narrowed) pool for `Horde`.
    pub fn sampling_window(self, pool_len: usize) -> usize {
        match self {
            ScenarioArchetype::Boss => pool_len.min(5),
            ScenarioArchetype::Balanced => pool_len.min(15),
            ScenarioArchetype::Horde => pool_len,
        }
    }

    /// How far past the budget an accepted pick may push the adjusted XP.
    /// Loose for a lone strong monster (`Boss`, or `Balanced`'s first
    /// pick), tight everywhere else.
    pub fn overshoot_tolerance(self, current_count: u32) -> f64 {
        match self {
            ScenarioArchetype::Boss => 1.4,
            ScenarioArchetype::Balanced if current_count == 0 => 1.4,
            _ => 1.2,
        }
    }
}
