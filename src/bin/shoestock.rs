//! ShoeStock Binary
//!
//! Starts the interactive inventory shell, or runs one read-only command.

use std::io;

use clap::{Parser, Subcommand};
use shoestock::shell::{self, Shell};
use shoestock::{Config, MalformedLinePolicy, Store};
use tracing_subscriber::{fmt, EnvFilter};

/// ShoeStock
#[derive(Parser, Debug)]
#[command(name = "shoestock")]
#[command(about = "Inventory manager for a shoe retailer")]
#[command(version)]
struct Args {
    /// Inventory file
    #[arg(short, long, default_value = shoestock::config::DEFAULT_INVENTORY_PATH)]
    inventory: String,

    /// Abort on the first malformed line instead of skipping it
    #[arg(long)]
    strict: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every shoe
    List,

    /// List every shoe with its stock value
    Value,

    /// Show the first shoe with a code (case-sensitive)
    Search {
        /// The code to search for
        code: String,
    },

    /// Show the shoe with the lowest quantity
    Lowest,

    /// Show the shoe with the highest quantity
    Highest,
}

fn main() {
    // Logs go to stderr so they never mix with menu output
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("ShoeStock v{}", shoestock::VERSION);
    tracing::info!("Inventory file: {}", args.inventory);

    let policy = if args.strict {
        MalformedLinePolicy::Abort
    } else {
        MalformedLinePolicy::SkipAndWarn
    };

    let config = Config::builder()
        .inventory_path(&args.inventory)
        .malformed_lines(policy)
        .build();

    let (store, report) = match Store::open(&config) {
        Ok(opened) => opened,
        Err(e) => {
            tracing::error!("Failed to load inventory: {}", e);
            std::process::exit(1);
        }
    };

    let result = match args.command {
        None => {
            let stdin = io::stdin();
            let mut session = Shell::new(store, stdin.lock(), io::stdout());
            session.report_load(&report).and_then(|_| session.run())
        }
        Some(command) => {
            let output = match command {
                Commands::List => shell::inventory_table(&store, false),
                Commands::Value => shell::inventory_table(&store, true),
                Commands::Search { code } => shell::search_report(&store, &code),
                Commands::Lowest => shell::lowest_report(&store),
                Commands::Highest => shell::highest_report(&store),
            };
            if report.unavailable.is_some() {
                eprintln!("{}", shell::MISSING_FILE);
            }
            println!("{}", output);
            Ok(())
        }
    };

    if let Err(e) = result {
        tracing::error!("Shell error: {}", e);
        std::process::exit(1);
    }
}
