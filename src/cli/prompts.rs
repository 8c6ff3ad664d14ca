//! Field collectors for the add/update action
//!
//! Every collector returns `Ok(None)` when input runs out, which the caller
//! treats as "abandon this entry".

use std::io;

use crate::cli::console::Console;
use crate::core::product::{parse_decimal_price, parse_quantity};

pub const NAME_PROMPT: &str = "What is the name of your product? ";
pub const PRICE_PROMPT: &str = "What is price of your product? $";
pub const QUANTITY_PROMPT: &str = "What is the quantity of your product? ";
pub const CONFIRM_PROMPT: &str = "Save entry? [Yn] ";

/// Values collected for a new or updated product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub name: String,
    /// Price in cents
    pub price: i64,
    pub quantity: i64,
}

/// Keep asking until `parse` accepts the answer. Unreadable input counts as
/// a rejected answer.
pub fn ask_until<C, T, F>(
    console: &mut C,
    prompt: &str,
    retry_message: &str,
    parse: F,
) -> io::Result<Option<T>>
where
    C: Console + ?Sized,
    F: Fn(&str) -> Option<T>,
{
    loop {
        let parsed = match console.read_line(prompt) {
            Ok(Some(answer)) => parse(&answer),
            Ok(None) => return Ok(None),
            Err(e) if e.kind() == io::ErrorKind::InvalidData => None,
            Err(e) => return Err(e),
        };
        match parsed {
            Some(value) => return Ok(Some(value)),
            None => console.print_line(retry_message)?,
        }
    }
}

/// Product name; any text is accepted, unreadable input is asked again
pub fn prompt_name<C: Console + ?Sized>(console: &mut C) -> io::Result<Option<String>> {
    loop {
        match console.read_line(NAME_PROMPT) {
            Ok(answer) => return Ok(answer.map(|name| name.trim().to_string())),
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                console.print_line("Please try again.")?;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Price as a decimal amount, returned in cents
pub fn prompt_price<C: Console + ?Sized>(console: &mut C) -> io::Result<Option<i64>> {
    ask_until(
        console,
        PRICE_PROMPT,
        "That's not a valid value try again.",
        parse_decimal_price,
    )
}

pub fn prompt_quantity<C: Console + ?Sized>(console: &mut C) -> io::Result<Option<i64>> {
    ask_until(
        console,
        QUANTITY_PROMPT,
        "That is not a valid value please enter a number.",
        parse_quantity,
    )
}

/// Anything but `n` confirms. Running out of input declines.
pub fn confirm_save<C: Console + ?Sized>(console: &mut C) -> io::Result<bool> {
    Ok(match console.read_line(CONFIRM_PROMPT)? {
        Some(answer) => answer.trim().to_lowercase() != "n",
        None => false,
    })
}

/// Ask for name, price and quantity in that order
pub fn collect_entry<C: Console + ?Sized>(console: &mut C) -> io::Result<Option<NewEntry>> {
    let Some(name) = prompt_name(console)? else {
        return Ok(None);
    };
    let Some(price) = prompt_price(console)? else {
        return Ok(None);
    };
    let Some(quantity) = prompt_quantity(console)? else {
        return Ok(None);
    };

    Ok(Some(NewEntry {
        name,
        price,
        quantity,
    }))
}
