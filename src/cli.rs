use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Macro Tetris: builds a weekly meal plan from your pantry that fits a macro target.
#[derive(Parser, Debug)]
#[command(name = "macro_tetris")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the kitchen state JSON file.
    #[arg(short, long, default_value = "kitchen.json")]
    pub file: String,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a weekly meal plan from the pantry.
    Plan {
        /// Seed for the snack-day picker. Random when omitted.
        #[arg(long)]
        seed: Option<u64>,

        /// Planner tuning file (JSON).
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write the plan as JSON.
        #[arg(long)]
        out: Option<PathBuf>,

        /// Write the plan as CSV.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Update pantry quantities interactively.
    Stock,

    /// Set the daily macro target interactively.
    Target,

    /// Show pantry contents and makeable recipes.
    Pantry,

    /// Reset state values.
    Reset {
        /// Empty the pantry.
        #[arg(long)]
        pantry: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            seed: None,
            config: None,
            out: None,
            csv: None,
        }
    }
}
