//! `inventory list` command - Print every product, newest first

use console::style;
use miette::Result;

use crate::cli::table::render_products;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::store::Inventory;

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

pub fn run(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let config = global.config();
    let store = Inventory::open(&config.database())?;
    let products = store.list_all()?;

    println!("{}", render_products(&products, args.format)?);

    if args.format == OutputFormat::Table && !global.quiet {
        println!(
            "{} product(s) found",
            style(products.len()).cyan()
        );
    }

    Ok(())
}
