use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use listkeeper::cli::{
    handle_config_command, handle_expenses_command, handle_todo_command, TODO_FAREWELL,
};
use listkeeper::config::{KeeperPaths, Settings};

#[derive(Parser)]
#[command(
    name = "listkeeper",
    version,
    about = "Terminal to-do list and expense tracker",
    long_about = "listkeeper runs two small interactive programs: a to-do list with \
                  pending and completed tasks, and an expense ledger with running \
                  totals. Each keeps its state in a JSON file that is rewritten \
                  after every change."
)]
struct Cli {
    /// Directory holding todo.json, expenses.json and listkeeper.json
    /// (defaults to the current directory)
    #[arg(long, global = true, env = "LISTKEEPER_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the to-do list interactively
    Todo,

    /// Track expenses interactively
    #[command(alias = "expense")]
    Expenses,

    /// Show resolved paths and settings
    Config,
}

fn main() -> Result<()> {
    // Quiet by default so log lines don't interleave with the menus
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = KeeperPaths::new(cli.data_dir)?;
    let settings = Settings::load(&paths)?;

    match cli.command {
        Some(Commands::Todo) => {
            install_interrupt_handler(TODO_FAREWELL);
            handle_todo_command(&paths)?;
        }
        Some(Commands::Expenses) => {
            handle_expenses_command(&paths, settings)?;
        }
        Some(Commands::Config) => {
            handle_config_command(&mut std::io::stdout(), &paths, &settings)?;
        }
        None => {
            println!("listkeeper - terminal to-do list and expense tracker");
            println!();
            println!("Run 'listkeeper todo' to manage your tasks.");
            println!("Run 'listkeeper expenses' to track spending.");
            println!("Run 'listkeeper --help' for usage information.");
        }
    }

    Ok(())
}

/// Turn Ctrl-C into a clean exit; every change is already saved
fn install_interrupt_handler(farewell: &'static str) {
    let result = ctrlc::set_handler(move || {
        println!("\n{}", farewell);
        std::process::exit(0);
    });

    if let Err(e) = result {
        warn!(error = %e, "could not install interrupt handler");
    }
}
