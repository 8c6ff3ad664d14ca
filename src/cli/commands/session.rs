//! Interactive session - the default when no subcommand is given
//!
//! Startup order: open the database (creating the table if needed), import
//! the configured CSV, clear the screen, then hand over to the menu.

use miette::{IntoDiagnostic, Result};

use crate::cli::console::{Console, TermConsole};
use crate::cli::menu::{run_menu, MenuAction, MenuContext};
use crate::cli::GlobalOpts;
use crate::core::importer::import_csv;
use crate::core::store::Inventory;

pub fn run(no_import: bool, global: &GlobalOpts) -> Result<()> {
    let config = global.config();
    let mut store = Inventory::open(&config.database())?;

    if !no_import {
        import_csv(&mut store, &config.import_csv())?;
    }

    let mut console = TermConsole::new();
    console.clear().into_diagnostic()?;

    let mut ctx = MenuContext {
        store: &mut store,
        backup_path: config.backup_file(),
        backup_mode: config.backup_mode(),
    };
    run_menu(&mut console, &mut ctx, &MenuAction::ALL)
}
