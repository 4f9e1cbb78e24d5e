//! `statplan` binary.
//!
//! Recommends a final stat allocation for a class, level, playstyle and
//! priority.
//!
//! # Examples
//!
//! ```bash
//! statplan --level 120 --playstyle knight --priority damage
//! statplan --class sorcerer --level 80 --playstyle mage --priority evasion --format json
//! statplan --list-classes
//! ```

use anyhow::Result;
use clap::Parser;
use console::style;

use planner_cli::{Cli, CliConfig, OutputFormat, PlanRequest, build_plan, logging, report};
use planner_content::{ContentFactory, ContentStore, load_embedded};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::setup_logging()?;

    let config = CliConfig::from_env().with_overrides(cli.data_dir.clone(), cli.format);
    let store = load_content(&config)?;

    if cli.list_classes {
        print_classes(&store);
        return Ok(());
    }

    let (Some(level), Some(playstyle), Some(priority)) = (cli.level, cli.playstyle, cli.priority)
    else {
        anyhow::bail!("--level, --playstyle and --priority are required");
    };

    let request = PlanRequest {
        class: cli.class,
        level,
        playstyle,
        priority,
    };
    let plan = build_plan(&store, &request)?;

    match config.format {
        OutputFormat::Text => print!("{}", report::render_text(&plan)),
        OutputFormat::Json => println!("{}", report::render_json(&plan)?),
    }

    Ok(())
}

fn load_content(config: &CliConfig) -> Result<ContentStore> {
    match &config.data_dir {
        Some(dir) => {
            tracing::info!("Loading content from {}", dir.display());
            ContentFactory::new(dir).build()
        }
        None => {
            tracing::debug!("Using embedded content");
            load_embedded()
        }
    }
}

fn print_classes(store: &ContentStore) {
    println!("{}", style("Starting classes:").bold().yellow());
    for class in &store.classes {
        println!(
            "  {:<10} {:<10} level {:>2}  (levels {}..={})",
            class.key,
            class.name,
            class.starting_level,
            class.starting_level,
            store.config.max_level
        );
    }
}
