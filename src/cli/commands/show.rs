//! `inventory show` command - Print one product by id

use miette::Result;

use crate::cli::viewer::record_lines;
use crate::cli::GlobalOpts;
use crate::core::store::Inventory;

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Product id
    pub id: i64,
}

pub fn run(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let config = global.config();
    let store = Inventory::open(&config.database())?;

    let product = store
        .get_by_id(args.id)?
        .ok_or_else(|| miette::miette!("No product found with ID {}", args.id))?;

    for line in record_lines(&product) {
        println!("{}", line);
    }

    Ok(())
}
