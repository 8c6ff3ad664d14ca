//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    add::AddArgs, backup::BackupArgs, import::ImportArgs, list::ListArgs, show::ShowArgs,
};
use crate::core::Config;

#[derive(Parser)]
#[command(name = "inventory")]
#[command(author, version, about = "Store inventory manager")]
#[command(long_about = "Keeps a product inventory in a local SQLite database, fed from a CSV file. \
Run without a subcommand to import inventory.csv and open the interactive menu.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub global: GlobalOpts,

    /// Open the menu without importing the CSV file first
    #[arg(long)]
    pub no_import: bool,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// SQLite database file (default: inventory.db)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// CSV file imported at startup (default: inventory.csv)
    #[arg(long, global = true)]
    pub csv: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

impl GlobalOpts {
    /// Layered configuration with command-line overrides applied last
    pub fn config(&self) -> Config {
        let mut config = Config::load();
        config.merge(Config {
            database: self.db.clone(),
            import_csv: self.csv.clone(),
            ..Default::default()
        });
        config
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Import products from a CSV file (upsert by product name)
    Import(ImportArgs),

    /// List all products, newest first
    List(ListArgs),

    /// Show a single product by id
    Show(ShowArgs),

    /// Add a product, or update the one with the same name
    Add(AddArgs),

    /// Write every product to the backup CSV file
    Backup(BackupArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// CSV with prices in cents
    Csv,
    /// JSON array
    Json,
}
