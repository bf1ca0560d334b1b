//! # Budget Model
//!
//! Translates party size, party level, and difficulty into a target XP
//! pool. The per-level thresholds are the D&D 5e Dungeon Master's Guide
//! values, kept as an immutable table so they can be tested independently
//! of the generation algorithm.

use super::Difficulty;

/// XP thresholds per character level, one row per level 1..=20, columns
/// ordered `Easy, Medium, Hard, Deadly`.
const XP_THRESHOLDS: [[u32; 4]; 20] = [
    [25, 50, 75, 100],
    [50, 100, 150, 200],
    [75, 150, 225, 400],
    [125, 250, 375, 500],
    [250, 500, 750, 1100],
    [300, 600, 900, 1400],
    [350, 750, 1100, 1700],
    [450, 900, 1400, 2100],
    [550, 1100, 1600, 2400],
    [600, 1200, 1900, 2800],
    [800, 1600, 2400, 3600],
    [1000, 2000, 3000, 4500],
    [1100, 2200, 3400, 5100],
    [1250, 2500, 3800, 5700],
    [1400, 2800, 4300, 6400],
    [1600, 3200, 4800, 7200],
    [2000, 3900, 5900, 8800],
    [2100, 4200, 6300, 9500],
    [2400, 4900, 7300, 10900],
    [2800, 5700, 8500, 12700],
];

/// Flat buffer the orchestrator applies on top of the raw budget, biasing
/// results toward slightly tougher encounters.
pub const BUDGET_BUFFER: f64 = 1.1;

/// Computes the raw XP budget for a party.
///
/// Looks up the per-character threshold for the (clamped) party level and
/// difficulty, then scales by party size. The orchestrator buffer
/// ([`BUDGET_BUFFER`]) is *not* applied here.
///
/// # Examples
///
/// ```
/// use menagerie::{compute_budget, Difficulty};
///
/// assert_eq!(compute_budget(4, 5, Difficulty::Medium), 2000.0);
/// assert_eq!(compute_budget(1, 1, Difficulty::Easy), 25.0);
/// ```
pub fn compute_budget(party_size: u32, party_level: u32, difficulty: Difficulty) -> f64 {
    let level = party_level.clamp(1, 20) as usize;
    let threshold = XP_THRESHOLDS[level - 1][difficulty.index()];
    f64::from(threshold) * f64::from(party_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_scales_with_party_size() {
        for size in 1..=8 {
            assert_eq!(
                compute_budget(size, 5, Difficulty::Medium),
                500.0 * f64::from(size)
            );
        }
    }

    #[test]
    fn test_budget_monotonic_in_level() {
        for difficulty in Difficulty::ALL {
            for level in 1..20 {
                assert!(
                    compute_budget(4, level, difficulty)
                        <= compute_budget(4, level + 1, difficulty),
                    "threshold decreased from level {} to {}",
                    level,
                    level + 1
                );
            }
        }
    }

    #[test]
    fn test_budget_monotonic_in_difficulty() {
        for level in 1..=20 {
            for pair in Difficulty::ALL.windows(2) {
                assert!(compute_budget(4, level, pair[0]) <= compute_budget(4, level, pair[1]));
            }
        }
    }

    #[test]
    fn test_budget_clamps_out_of_range_levels() {
        assert_eq!(
            compute_budget(4, 0, Difficulty::Hard),
            compute_budget(4, 1, Difficulty::Hard)
        );
        assert_eq!(
            compute_budget(4, 99, Difficulty::Hard),
            compute_budget(4, 20, Difficulty::Hard)
        );
    }

    #[test]
    fn test_buffered_budget_worked_example() {
        // Party of 4 at level 5, Medium: 500 * 4 = 2000, buffered to 2200.
        let buffered = compute_budget(4, 5, Difficulty::Medium) * BUDGET_BUFFER;
        assert!((buffered - 2200.0).abs() < 1e-9);
    }
}
