//! `inventory add` command - Save a product without the interactive prompts

use chrono::Local;
use console::style;
use miette::Result;

use crate::cli::GlobalOpts;
use crate::core::product::{parse_date, parse_decimal_price};
use crate::core::store::{Inventory, UpsertOutcome};

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Product name (an existing product with this name is updated)
    #[arg(long, short = 'n')]
    pub name: String,

    /// Price as a decimal amount, e.g. 9.99
    #[arg(long, short = 'p', allow_negative_numbers = true)]
    pub price: String,

    /// Quantity on hand
    #[arg(long, allow_negative_numbers = true)]
    pub quantity: i64,

    /// Last-updated date as MM/DD/YYYY (default: today)
    #[arg(long)]
    pub date: Option<String>,
}

pub fn run(args: AddArgs, global: &GlobalOpts) -> Result<()> {
    let price = parse_decimal_price(&args.price)
        .ok_or_else(|| miette::miette!("Invalid price '{}': expected a decimal amount like 9.99", args.price))?;

    let date = match &args.date {
        Some(raw) => parse_date(raw)
            .ok_or_else(|| miette::miette!("Invalid date '{}': expected MM/DD/YYYY", raw))?,
        None => Local::now().date_naive(),
    };

    let config = global.config();
    let mut store = Inventory::open(&config.database())?;
    let (product, outcome) = store.upsert(args.name.trim(), price, args.quantity, date)?;

    if !global.quiet {
        let verb = match outcome {
            UpsertOutcome::Created => "Created",
            UpsertOutcome::Updated => "Updated",
        };
        println!(
            "{} {} product {} {} ({} at {})",
            style("✓").green(),
            verb,
            style(product.id).cyan(),
            style(&product.name).bold(),
            product.quantity,
            product.display_price()
        );
    }

    Ok(())
}
