//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use planner_core::{Playstyle, Priority};

use crate::config::OutputFormat;

/// Stat allocation planner
#[derive(Debug, Parser)]
#[command(name = "statplan")]
#[command(about = "Recommend a stat allocation for a character build", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Starting class key
    #[arg(short, long, default_value = "deprived")]
    pub class: String,

    /// Target character level
    #[arg(short, long, required_unless_present = "list_classes")]
    pub level: Option<u32>,

    /// Build archetype (barbarian, swordsman, knight, defender, priest, mage,
    /// hexer, magic_swordsman, mage_barbarian, paladin, faith_dex,
    /// hexer_physical, pyromancer, pyro_physical)
    #[arg(short, long, required_unless_present = "list_classes")]
    pub playstyle: Option<Playstyle>,

    /// Secondary focus (survivability, evasion, damage, versatility)
    #[arg(long, required_unless_present = "list_classes")]
    pub priority: Option<Priority>,

    /// Directory with planner data files (defaults to the built-in tables)
    #[arg(short, long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// List starting classes and exit
    #[arg(long)]
    pub list_classes: bool,
}
