//! # Menagerie CLI
//!
//! Loads a bestiary document and prints one generated encounter per
//! scenario archetype for the requested party.

use clap::Parser;
use log::info;
use menagerie::generation::utils;
use menagerie::{
    fetch_bestiary, generate_scenarios, Difficulty, EncounterSettings, MenagerieResult,
    ScenarioArchetype,
};
use std::path::PathBuf;

/// Command line arguments for the Menagerie encounter generator.
#[derive(Parser, Debug)]
#[command(name = "menagerie")]
#[command(about = "Procedural combat-encounter generator for tabletop parties")]
#[command(version)]
struct Args {
    /// Path to the bestiary JSON document
    #[arg(short, long, default_value = "bestiary.json")]
    bestiary: PathBuf,

    /// Number of player characters in the party
    #[arg(short = 'p', long, default_value_t = 4)]
    party_size: u32,

    /// Average party level (1-20)
    #[arg(short = 'l', long, default_value_t = 3)]
    party_level: u32,

    /// Target difficulty (easy, medium, hard, deadly)
    #[arg(short, long, default_value = "medium")]
    difficulty: String,

    /// Restrict candidates to these creature types (repeatable)
    #[arg(short = 't', long = "monster-type")]
    monster_types: Vec<String>,

    /// Random seed for reproducible generation
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> MenagerieResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    info!("Menagerie v{}", menagerie::VERSION);

    let difficulty: Difficulty = args.difficulty.parse()?;
    let bestiary = fetch_bestiary(&args.bestiary);
    if bestiary.is_empty() {
        println!(
            "Bestiary at {} is empty or unreadable; nothing to generate.",
            args.bestiary.display()
        );
        return Ok(());
    }
    info!("Loaded {} monster templates", bestiary.len());

    let settings = EncounterSettings {
        party_size: args.party_size,
        party_level: args.party_level,
        difficulty,
        monster_types: if args.monster_types.is_empty() {
            None
        } else {
            Some(args.monster_types.clone())
        },
    };

    let mut rng = match args.seed {
        Some(seed) => utils::seeded_rng(seed),
        None => utils::entropy_rng(),
    };

    let scenarios = generate_scenarios(&bestiary, &settings, &mut rng);
    if scenarios.is_empty() {
        println!("No eligible monsters for these settings.");
        return Ok(());
    }

    println!(
        "{} encounter(s) for a party of {} at level {}:",
        settings.difficulty, settings.party_size, settings.party_level
    );
    for archetype in ScenarioArchetype::ALL {
        let Some(encounter) = scenarios.get(&archetype) else {
            continue;
        };
        println!();
        println!("== {} :: {}", archetype.label(), archetype.description());
        for entry in &encounter.entries {
            println!(
                "  {}x {} (CR {})",
                entry.count,
                entry.template.name,
                entry.template.challenge.as_deref().unwrap_or("0")
            );
        }
        println!("  Adjusted XP: {}", encounter.total_xp);
    }

    Ok(())
}
