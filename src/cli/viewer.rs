//! Record-by-record browser

use std::io;

use miette::{IntoDiagnostic, Result};

use crate::cli::console::Console;
use crate::core::product::Product;
use crate::core::store::Inventory;

pub const SEARCH_PROMPT: &str = "Search by ID: ";
pub const NEXT_PROMPT: &str = "Action: [r/n]  ";

const INVALID_ID_MESSAGE: &str = "That is not a valid value.";

/// Lines shown for a single product
pub fn record_lines(product: &Product) -> Vec<String> {
    vec![
        product.id.to_string(),
        product.name.clone(),
        product.display_price(),
        product.quantity.to_string(),
        format!("Date: {}", product.display_date()),
    ]
}

/// Entry point of the `v` menu action.
///
/// A blank answer browses every product, newest first; a number shows that
/// product only.
pub fn view_entries<C: Console + ?Sized>(console: &mut C, store: &Inventory) -> Result<()> {
    let answer = match console.read_line(SEARCH_PROMPT) {
        Ok(Some(answer)) => answer,
        Ok(None) => return Ok(()),
        Err(e) if e.kind() == io::ErrorKind::InvalidData => {
            return console
                .print_line(INVALID_ID_MESSAGE)
                .into_diagnostic();
        }
        Err(e) => return Err(e).into_diagnostic(),
    };

    let query = answer.trim();
    if query.is_empty() {
        return browse(console, &store.list_all()?);
    }

    match query.parse::<i64>() {
        Ok(id) => view_by_id(console, store, id),
        Err(_) => console
            .print_line(INVALID_ID_MESSAGE)
            .into_diagnostic(),
    }
}

/// Show one product by id, or say it does not exist
pub fn view_by_id<C: Console + ?Sized>(console: &mut C, store: &Inventory, id: i64) -> Result<()> {
    match store.get_by_id(id)? {
        Some(product) => browse(console, &[product]),
        None => console
            .print_line(&format!("No product found with ID {}.", id))
            .into_diagnostic(),
    }
}

/// Page through `products` one screen at a time.
///
/// `r` goes back to the menu, `n` moves on; other answers ask again.
pub fn browse<C: Console + ?Sized>(console: &mut C, products: &[Product]) -> Result<()> {
    for product in products {
        console.clear().into_diagnostic()?;
        for line in record_lines(product) {
            console.print_line(&line).into_diagnostic()?;
        }
        console.print_line("\n\n").into_diagnostic()?;
        console.print_line("r) return to main menu").into_diagnostic()?;
        console.print_line("n) next entry").into_diagnostic()?;

        loop {
            let Some(answer) = console.read_line(NEXT_PROMPT).into_diagnostic()? else {
                return Ok(());
            };
            match answer.trim().to_lowercase().as_str() {
                "r" => return Ok(()),
                "n" => {
                    console.clear().into_diagnostic()?;
                    break;
                }
                _ => continue,
            }
        }
    }

    Ok(())
}
