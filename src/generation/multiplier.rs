//! # Encounter Multiplier Model
//!
//! Groups of monsters are deadlier than their raw XP sum suggests: a
//! surrounded party takes more attacks per round. The standard adjustment
//! is a step function of the monster *count*, applied to the summed XP of
//! the whole encounter, never to individual monsters.

/// Multiplier steps as `(minimum count, multiplier)`, checked from the
/// largest threshold down.
const MULTIPLIER_STEPS: [(u32, f64); 6] = [
    (15, 4.0),
    (11, 3.0),
    (7, 2.5),
    (3, 2.0),
    (2, 1.5),
    (1, 1.0),
];

/// Returns the XP multiplier for an encounter of `count` monsters.
///
/// # Examples
///
/// ```
/// use menagerie::encounter_multiplier;
///
/// assert_eq!(encounter_multiplier(1), 1.0);
/// assert_eq!(encounter_multiplier(4), 2.0);
/// assert_eq!(encounter_multiplier(20), 4.0);
/// ```
pub fn encounter_multiplier(count: u32) -> f64 {
    MULTIPLIER_STEPS
        .iter()
        .find(|(minimum, _)| count >= *minimum)
        .map_or(1.0, |(_, multiplier)| *multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_steps() {
        assert_eq!(encounter_multiplier(0), 1.0);
        assert_eq!(encounter_multiplier(1), 1.0);
        assert_eq!(encounter_multiplier(2), 1.5);
        assert_eq!(encounter_multiplier(3), 2.0);
        assert_eq!(encounter_multiplier(4), 2.0);
        assert_eq!(encounter_multiplier(6), 2.0);
        assert_eq!(encounter_multiplier(7), 2.5);
        assert_eq!(encounter_multiplier(8), 2.5);
        assert_eq!(encounter_multiplier(10), 2.5);
        assert_eq!(encounter_multiplier(11), 3.0);
        assert_eq!(encounter_multiplier(12), 3.0);
        assert_eq!(encounter_multiplier(14), 3.0);
        assert_eq!(encounter_multiplier(15), 4.0);
        assert_eq!(encounter_multiplier(20), 4.0);
    }

    #[test]
    fn test_multiplier_never_decreases_with_count() {
        for count in 0..30 {
            assert!(encounter_multiplier(count) <= encounter_multiplier(count + 1));
        }
    }
}
