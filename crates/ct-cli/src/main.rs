//! CLI frontend for the Clock Tan-Tan game-master tool.

mod commands;
mod tui;

use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ct_session::TableConfig;

#[derive(Parser)]
#[command(
    name = "ct",
    about = "Clock Tan-Tan: outcome decks and progression for the game master",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command that opens a table.
#[derive(Args, Clone, Copy)]
struct TableArgs {
    /// RNG seed for reproducible shuffles (default: random)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Common successes each attribute starts with
    #[arg(long, default_value = "8")]
    successes: u32,

    /// Progression points available at the start
    #[arg(long, default_value = "21")]
    points: u32,

    /// Starting character level
    #[arg(long, default_value = "1")]
    level: u32,
}

impl TableArgs {
    fn config(self) -> TableConfig {
        let config = TableConfig::default()
            .with_starting_successes(self.successes)
            .with_starting_points(self.points)
            .with_starting_level(self.level);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive table session at the prompt
    Play {
        #[command(flatten)]
        table: TableArgs,
    },

    /// Launch the full-screen table board
    Tui {
        #[command(flatten)]
        table: TableArgs,
    },

    /// Show the bonuses an attribute grants at a success count
    Bonus {
        /// Attribute name (English, Portuguese, or abbreviation)
        attribute: String,

        /// Common successes allocated to the attribute
        successes: u32,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the Charisma affinity table
    Affinity,

    /// Draw cards from a freshly shuffled deck
    Draw {
        /// Attribute name (English, Portuguese, or abbreviation)
        attribute: String,

        /// Number of cards to draw
        #[arg(short, long, default_value = "1")]
        count: u32,

        #[command(flatten)]
        table: TableArgs,
    },

    /// Show a fresh session's decks, counters and bonuses
    Status {
        /// Print the session snapshot as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        table: TableArgs,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { table } => commands::play::run(table.config()),
        Commands::Tui { table } => tui::run(table.config()),
        Commands::Bonus {
            attribute,
            successes,
            json,
        } => commands::bonus::run(&attribute, successes, json),
        Commands::Affinity => commands::affinity::run(),
        Commands::Draw {
            attribute,
            count,
            table,
        } => commands::draw::run(&attribute, count, table.config()),
        Commands::Status { json, table } => commands::status::run(table.config(), json),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
