//! Category CLI commands

use clap::Subcommand;

use crate::display::format_category_menu;
use crate::error::KakeiboResult;
use crate::services::CategoryStore;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories in panel order
    List,

    /// Rename a category label (its stable id is unchanged)
    Rename {
        /// Category id (the original label text)
        id: String,
        /// New display label
        label: String,
    },
}

/// Handle a category subcommand
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> KakeiboResult<()> {
    let mut store = CategoryStore::load(&storage.categories);

    match cmd {
        CategoryCommands::List => {
            print!("{}", format_category_menu(store.categories()));
        }
        CategoryCommands::Rename { id, label } => {
            if store.rename(&id, &label) {
                println!("Renamed '{}' to '{}'", id, label);
            } else {
                println!("No category with id '{}'; nothing changed", id);
            }
        }
    }

    Ok(())
}
