//! # Menagerie
//!
//! A procedural combat-encounter generator for tabletop role-playing
//! assistants.
//!
//! ## Architecture Overview
//!
//! Given a party's size and level plus a target difficulty, Menagerie
//! selects monster templates from a bestiary whose combined,
//! multiplier-adjusted experience value matches that difficulty. It
//! produces up to three distinct encounter shapes per request:
//!
//! - **Balanced**: a small squad of one or two solid creatures
//! - **Horde**: many weaker creatures of at most two kinds
//! - **Boss**: a single very powerful creature
//!
//! The crate is split into two modules:
//!
//! - **Bestiary**: the monster template catalog and its JSON loader
//! - **Generation System**: XP budgets, Challenge Rating conversion,
//!   candidate filtering, and the greedy encounter constructor
//!
//! Generation is pure in-memory computation. All randomness flows through
//! an explicitly threaded [`rand::rngs::StdRng`], so callers can seed it
//! for reproducible results or draw it from entropy in production.
//!
//! ## Example
//!
//! ```
//! use menagerie::{generate_scenarios, Bestiary, Difficulty, EncounterSettings};
//! use menagerie::generation::utils;
//!
//! let bestiary = Bestiary::new(); // normally loaded via fetch_bestiary
//! let settings = EncounterSettings {
//!     party_size: 4,
//!     party_level: 5,
//!     difficulty: Difficulty::Medium,
//!     monster_types: None,
//! };
//! let mut rng = utils::seeded_rng(42);
//! let scenarios = generate_scenarios(&bestiary, &settings, &mut rng);
//! assert!(scenarios.is_empty()); // empty bestiary yields no scenarios
//! ```

pub mod bestiary;
pub mod generation;

// Core module re-exports
pub use bestiary::*;
pub use generation::*;

/// Core error type for the Menagerie crate.
///
/// Encounter generation itself is infallible: malformed Challenge Ratings
/// degrade to zero, and archetypes with no eligible candidates are simply
/// omitted from the result map. Errors only arise at the edges, when
/// loading a bestiary document or parsing caller-supplied settings.
#[derive(thiserror::Error, Debug)]
pub enum MenagerieError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Caller-supplied settings are invalid
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

/// Result type used throughout the Menagerie codebase.
pub type MenagerieResult<T> = Result<T, MenagerieError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
