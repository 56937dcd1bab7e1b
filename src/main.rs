use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};

use kakeibo::cli::{handle_category_command, run_entry_session, CategoryCommands};
use kakeibo::config::paths::KakeiboPaths;
use kakeibo::services::CategoryStore;
use kakeibo::storage::Storage;

#[derive(Parser)]
#[command(
    name = "kakeibo",
    version,
    about = "Terminal expense-entry panel",
    long_about = "kakeibo is a terminal expense-entry panel: a fixed set of \
                  spending categories, each selectable to record an amount, \
                  with a spreadsheet-ready datasheet export. Categories are \
                  persisted across sessions; the ledger lives for one session."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive expense-entry session (default)
    Entry,

    /// Category management commands
    #[command(subcommand, alias = "cat")]
    Categories(CategoryCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let paths = KakeiboPaths::new()?;
    let storage = Storage::new(paths)?;

    match cli.command {
        Some(Commands::Categories(cmd)) => {
            handle_category_command(&storage, cmd)?;
        }
        Some(Commands::Config) => {
            println!("Base directory: {}", storage.paths().base_dir().display());
            println!(
                "Category blob:  {}",
                storage.paths().categories_file().display()
            );
        }
        Some(Commands::Entry) | None => {
            let store = CategoryStore::load(&storage.categories);
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            run_entry_session(&store, stdin.lock(), &mut stdout)?;
        }
    }

    Ok(())
}
