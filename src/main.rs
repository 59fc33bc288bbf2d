use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use macro_tetris_rs::cli::{Cli, Command};
use macro_tetris_rs::error::Result;
use macro_tetris_rs::interface::{
    display_meal_plan, display_pantry, display_target, prompt_stock_updates, prompt_target,
    prompt_yes_no,
};
use macro_tetris_rs::planner::PlannerConfig;
use macro_tetris_rs::state::{
    KitchenStateManager, export_plan_csv, load_kitchen, save_kitchen, save_plan,
};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so plan output on stdout stays clean.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan {
            seed,
            config,
            out,
            csv,
        } => cmd_plan(&cli.file, seed, config, out, csv),
        Command::Stock => cmd_stock(&cli.file),
        Command::Target => cmd_target(&cli.file),
        Command::Pantry => cmd_pantry(&cli.file),
        Command::Reset { pantry } => cmd_reset(&cli.file, pantry),
    }
}

/// Load the kitchen file, or report that it is missing.
fn open_kitchen(file_path: &str) -> Result<Option<KitchenStateManager>> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Kitchen state file not found: {}", file_path);
        eprintln!("Please ensure kitchen.json exists in the current directory.");
        return Ok(None);
    }

    let data = load_kitchen(path)?;
    Ok(Some(KitchenStateManager::new(data)))
}

/// Generate a weekly plan from the pantry.
fn cmd_plan(
    file_path: &str,
    seed: Option<u64>,
    config: Option<PathBuf>,
    out: Option<PathBuf>,
    csv: Option<PathBuf>,
) -> Result<()> {
    let Some(manager) = open_kitchen(file_path)? else {
        return Ok(());
    };

    let config = match config {
        Some(path) => PlannerConfig::load(path)?,
        None => PlannerConfig::default(),
    };

    println!(
        "Loaded {} ingredients, {} recipes",
        manager.len(),
        manager.recipes().len()
    );
    display_target(manager.target());

    let plan = match seed {
        Some(seed) => manager.plan(&config, &mut StdRng::seed_from_u64(seed))?,
        None => manager.plan(&config, &mut rand::thread_rng())?,
    };

    display_meal_plan(&plan, manager.recipes(), manager.target());

    if let Some(path) = out {
        save_plan(&path, &plan)?;
        println!("Plan written to {}", path.display());
    }
    if let Some(path) = csv {
        export_plan_csv(&path, &plan, manager.recipes())?;
        println!("Plan exported to {}", path.display());
    }

    Ok(())
}

/// Update pantry quantities interactively.
fn cmd_stock(file_path: &str) -> Result<()> {
    let Some(mut manager) = open_kitchen(file_path)? else {
        return Ok(());
    };

    if manager.is_empty() {
        println!("No ingredients in the catalogue.");
        return Ok(());
    }

    let updated = prompt_stock_updates(&mut manager)?;
    if updated > 0 && prompt_yes_no("Save updated pantry?", true)? {
        save_kitchen(file_path, &manager.to_data())?;
        println!("Updated {} items. Kitchen state saved.", updated);
    }

    Ok(())
}

/// Set the daily macro target.
fn cmd_target(file_path: &str) -> Result<()> {
    let Some(mut manager) = open_kitchen(file_path)? else {
        return Ok(());
    };

    display_target(manager.target());
    let target = prompt_target(manager.target())?;
    manager.set_target(target)?;

    save_kitchen(file_path, &manager.to_data())?;
    display_target(manager.target());
    println!("Kitchen state saved.");

    Ok(())
}

/// Show the pantry.
fn cmd_pantry(file_path: &str) -> Result<()> {
    let Some(manager) = open_kitchen(file_path)? else {
        return Ok(());
    };

    display_pantry(&manager);
    Ok(())
}

/// Reset state values.
fn cmd_reset(file_path: &str, pantry: bool) -> Result<()> {
    if !pantry {
        println!("Please specify at least one reset option:");
        println!("  --pantry  Empty the pantry");
        return Ok(());
    }

    let Some(mut manager) = open_kitchen(file_path)? else {
        return Ok(());
    };

    manager.reset_pantry();
    println!("Pantry emptied.");

    save_kitchen(file_path, &manager.to_data())?;
    println!("Kitchen state saved.");

    Ok(())
}
