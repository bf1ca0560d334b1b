//! # Generation Module
//!
//! The encounter generation system: XP budgets, Challenge Rating
//! conversion, scenario archetypes, and the greedy encounter constructor.
//!
//! All generation is synchronous, single-threaded, in-memory computation
//! with no shared state across calls. Randomness is drawn from an
//! explicitly threaded [`rand::rngs::StdRng`]; seed it for reproducible
//! tests, or create one from entropy for live use (see [`utils`]).

pub mod archetype;
pub mod budget;
pub mod challenge;
pub mod encounters;
pub mod multiplier;

pub use archetype::*;
pub use budget::*;
pub use challenge::*;
pub use encounters::*;
pub use multiplier::*;

use crate::{MenagerieError, MenagerieResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Encounter difficulty tiers, ordered `Easy < Medium < Hard < Deadly`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Deadly,
}

impl Difficulty {
    /// All tiers in ascending order of severity.
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Deadly,
    ];

    /// Column index into the XP threshold table.
    pub(crate) fn index(self) -> usize {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
            Difficulty::Deadly => 3,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Deadly => "Deadly",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for Difficulty {
    type Err = MenagerieError;

    fn from_str(raw: &str) -> MenagerieResult<Self> {
        match raw.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "deadly" => Ok(Difficulty::Deadly),
            _ => Err(MenagerieError::InvalidSettings(format!(
                "unknown difficulty '{}'",
                raw
            ))),
        }
    }
}

/// Input value object for one generation request.
///
/// # Examples
///
/// ```
/// use menagerie::{Difficulty, EncounterSettings};
///
/// let settings = EncounterSettings {
///     party_size: 4,
///     party_level: 5,
///     difficulty: Difficulty::Medium,
///     monster_types: Some(vec!["undead".to_string()]),
/// };
/// assert_eq!(settings.party_level, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterSettings {
    /// Number of player characters in the party (positive)
    pub party_size: u32,

    /// Average party level; clamped into 1..=20 where it is consumed
    pub party_level: u32,

    /// Target encounter difficulty
    pub difficulty: Difficulty,

    /// Optional allowed creature type tags. `None`, an empty list, or a
    /// list containing `"Any"` all mean "no type restriction".
    #[serde(default)]
    pub monster_types: Option<Vec<String>>,
}

/// Utility functions for generation callers.
pub mod utils {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Creates a deterministic random number generator from a seed.
    pub fn seeded_rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    /// Creates a random number generator from OS entropy, for live use.
    pub fn entropy_rng() -> StdRng {
        StdRng::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_ordering() {
        assert!(Difficulty::Easy < Difficulty::Medium);
        assert!(Difficulty::Medium < Difficulty::Hard);
        assert!(Difficulty::Hard < Difficulty::Deadly);
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!("medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!("DEADLY".parse::<Difficulty>().unwrap(), Difficulty::Deadly);
        assert!("impossible".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_difficulty_display_round_trips() {
        for difficulty in Difficulty::ALL {
            let parsed: Difficulty = difficulty.to_string().parse().unwrap();
            assert_eq!(parsed, difficulty);
        }
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        use rand::Rng;
        let mut a = utils::seeded_rng(7);
        let mut b = utils::seeded_rng(7);
        assert_eq!(a.gen::<u64>(), b.gen::<u64>());
    }
}
