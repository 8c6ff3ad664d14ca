//! `inventory backup` command - Dump every product to a CSV file

use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::cli::GlobalOpts;
use crate::core::backup::{backup, BackupMode};
use crate::core::store::Inventory;

#[derive(clap::Args, Debug)]
pub struct BackupArgs {
    /// Backup file (default: Backup.csv)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Replace the backup file instead of appending to it
    #[arg(long)]
    pub truncate: bool,
}

pub fn run(args: BackupArgs, global: &GlobalOpts) -> Result<()> {
    let config = global.config();
    let path = args.output.unwrap_or_else(|| config.backup_file());
    let mode = if args.truncate {
        BackupMode::Truncate
    } else {
        config.backup_mode()
    };

    let store = Inventory::open(&config.database())?;
    let report = backup(&store, &path, mode).map_err(|e| {
        miette::miette!("Something went wrong, Please try again. ({})", e)
    })?;

    if !global.quiet {
        println!(
            "{} Backup successfully completed: {} product(s) written to {}",
            style("✓").green(),
            style(report.rows_written).cyan(),
            style(report.path.display()).yellow()
        );
    }

    Ok(())
}
