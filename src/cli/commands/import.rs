//! `inventory import` command - Load products from a CSV file

use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::cli::GlobalOpts;
use crate::core::importer::import_csv;
use crate::core::store::Inventory;

#[derive(clap::Args, Debug)]
pub struct ImportArgs {
    /// CSV file to import (default: the configured import file)
    pub file: Option<PathBuf>,
}

pub fn run(args: ImportArgs, global: &GlobalOpts) -> Result<()> {
    let config = global.config();
    let file_path = args.file.unwrap_or_else(|| config.import_csv());
    let mut store = Inventory::open(&config.database())?;

    if !global.quiet {
        println!(
            "{} Importing products from {}",
            style("→").blue(),
            style(file_path.display()).yellow()
        );
    }

    let stats = import_csv(&mut store, &file_path)?;

    if !global.quiet {
        println!();
        println!("{}", style("─".repeat(40)).dim());
        println!("{}", style("Import Summary").bold());
        println!("{}", style("─".repeat(40)).dim());
        println!("  Rows processed:   {}", style(stats.rows_processed).cyan());
        println!("  Products created: {}", style(stats.created).green());
        println!("  Products updated: {}", style(stats.updated).yellow());
    }

    Ok(())
}
