//! # Bestiary
//!
//! The monster template catalog and its JSON loader.
//!
//! The bestiary is owned by an external store and read-only to the
//! generation core. On disk it is a single JSON document mapping creature
//! keys to monster records; only the fields the generator consumes are
//! deserialized here, everything else in the document is ignored.

use crate::generation::challenge::{cr_to_xp, parse_cr};
use crate::MenagerieResult;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// An immutable monster record from the bestiary.
///
/// Field names follow the source document (`Nom`, `Type`, `Challenge`).
/// The Challenge Rating is kept as its raw string form — an integer or a
/// fraction such as `"1/4"` — because the XP lookup table is keyed by
/// that exact representation.
///
/// # Examples
///
/// ```
/// use menagerie::MonsterTemplate;
///
/// let goblin = MonsterTemplate::new("Goblin", "humanoid (goblinoid)", Some("1/4"));
/// assert_eq!(goblin.challenge_rating(), 0.25);
/// assert_eq!(goblin.xp_value(), 50.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterTemplate {
    /// Display name of the creature
    #[serde(rename = "Nom")]
    pub name: String,

    /// Free-text creature type, matched case-insensitively against
    /// allowed type tags (e.g. `"humanoid (goblinoid)"`)
    #[serde(rename = "Type", default)]
    pub creature_type: String,

    /// Challenge Rating as stored: an integer or a fraction string.
    /// Absent or empty for creatures that have not been rated.
    #[serde(rename = "Challenge", default)]
    pub challenge: Option<String>,
}

impl MonsterTemplate {
    /// Creates a template directly, mainly useful for tests and fixtures.
    pub fn new(
        name: impl Into<String>,
        creature_type: impl Into<String>,
        challenge: Option<&str>,
    ) -> Self {
        Self {
            name: name.into(),
            creature_type: creature_type.into(),
            challenge: challenge.map(str::to_string),
        }
    }

    /// Numeric Challenge Rating; `0.0` when absent or unparseable.
    pub fn challenge_rating(&self) -> f64 {
        self.challenge.as_deref().map_or(0.0, parse_cr)
    }

    /// Experience value of a single monster of this template.
    pub fn xp_value(&self) -> f64 {
        cr_to_xp(self.challenge.as_deref().unwrap_or("0"))
    }

    /// Whether this template carries a usable Challenge Rating at all.
    /// Templates without one are never eligible for generation.
    pub fn has_challenge(&self) -> bool {
        self.challenge.as_deref().is_some_and(|cr| !cr.is_empty())
    }
}

/// Mapping from creature key to monster template, as stored in the
/// bestiary document.
pub type Bestiary = HashMap<String, MonsterTemplate>;

/// Loads a bestiary document from disk, failing on I/O or parse errors.
pub fn load_bestiary<P: AsRef<Path>>(path: P) -> MenagerieResult<Bestiary> {
    let raw = fs::read_to_string(path)?;
    let bestiary = serde_json::from_str(&raw)?;
    Ok(bestiary)
}

/// Loads a bestiary document, degrading to an empty mapping on failure.
///
/// Callers treat an empty bestiary as valid, if unproductive, input: the
/// generator simply produces no scenarios. The failure itself is logged.
pub fn fetch_bestiary<P: AsRef<Path>>(path: P) -> Bestiary {
    match load_bestiary(&path) {
        Ok(bestiary) => bestiary,
        Err(error) => {
            warn!(
                "Failed to load bestiary from {}: {}",
                path.as_ref().display(),
                error
            );
            Bestiary::new()
        }
    }
}
